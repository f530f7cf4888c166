pub mod ads;
pub mod lock;
