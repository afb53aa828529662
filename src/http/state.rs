use std::sync::Arc;

use crate::config::Config;

/// Shared by all handlers. Read-only: every request ranks its own tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
