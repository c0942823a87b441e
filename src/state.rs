use std::sync::Arc;

use crate::config::settings::AppConfig;
use crate::infrastructure::queue::JobQueue;
use crate::infrastructure::storage::ObjectStore;

/// Collaborators are trait objects so tests can swap in doubles
/// without touching process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub raw_store: Arc<dyn ObjectStore>,
    pub processed_store: Arc<dyn ObjectStore>,
    pub queue: Arc<dyn JobQueue>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        raw_store: Arc<dyn ObjectStore>,
        processed_store: Arc<dyn ObjectStore>,
        queue: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            config,
            raw_store,
            processed_store,
            queue,
        }
    }
}
