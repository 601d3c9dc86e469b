pub mod config;
pub mod error;
pub mod rest;
pub mod storage;
pub mod task;

use config::Config;
use storage::Storage;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub storage: Storage,
}
