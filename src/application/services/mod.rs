pub mod lock_simulator;
pub mod reader;
pub mod registry;

pub use lock_simulator::*;
pub use reader::*;
pub use registry::*;
