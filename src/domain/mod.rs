pub mod ad;
pub mod errors;
pub mod ports;

pub use ad::*;
pub use errors::*;
