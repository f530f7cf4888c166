pub mod ads_repository;
pub mod table_locker;
pub mod task_spawner;
pub mod time_service;
pub mod tracer;

pub use ads_repository::*;
pub use table_locker::*;
pub use task_spawner::*;
pub use time_service::*;
pub use tracer::*;
