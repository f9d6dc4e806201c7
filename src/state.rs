//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ViewCache;
use crate::infrastructure::cache::CacheService;

/// Application state cloned into every request handler.
///
/// Built once by [`crate::server::run`]; nothing here is a process-wide global.
#[derive(Clone)]
pub struct AppState {
    /// Response memoizer used by cached endpoints.
    pub view_cache: Arc<ViewCache>,
    /// Underlying cache backend, for health reporting.
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(cache: Arc<dyn CacheService>, cache_timeout_seconds: u64) -> Self {
        Self {
            view_cache: Arc::new(ViewCache::new(cache.clone(), cache_timeout_seconds)),
            cache,
        }
    }
}
