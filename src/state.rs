use std::sync::Arc;

use crate::application::services::ResolutionService;
use crate::infrastructure::cache::CacheService;

/// Shared application state injected into every handler.
///
/// Both fields are long-lived clients built once at startup. The cache
/// handle is the same instance the resolution service uses; handlers only
/// touch it directly for the readiness probe.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<ResolutionService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(resolution_service: Arc<ResolutionService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            resolution_service,
            cache,
        }
    }
}
