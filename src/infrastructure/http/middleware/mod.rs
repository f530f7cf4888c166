pub mod error;

pub use error::*;

use crate::application::services::{AdReader, LockSimulator};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub reader: Arc<AdReader>,
    pub simulator: Arc<LockSimulator>,
}
