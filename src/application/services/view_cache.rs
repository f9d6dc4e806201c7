//! Get-or-compute memoization of rendered view bodies.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;
use crate::infrastructure::cache::CacheService;

/// Memoizes whole response bodies in a [`CacheService`], keyed by request path.
///
/// The key ignores query string, headers and client identity, so every
/// client shares one entry per path.
///
/// No lock is held between lookup and store: concurrent misses on the same
/// path may each compute the body, and the last store wins.
pub struct ViewCache {
    cache: Arc<dyn CacheService>,
    timeout_seconds: u64,
}

impl ViewCache {
    pub fn new(cache: Arc<dyn CacheService>, timeout_seconds: u64) -> Self {
        Self {
            cache,
            timeout_seconds,
        }
    }

    /// Cache key for the view served at `path`.
    ///
    /// ```
    /// use datetime_endpoint::application::services::ViewCache;
    ///
    /// assert_eq!(ViewCache::key_for("/hour"), "view//hour");
    /// ```
    pub fn key_for(path: &str) -> String {
        format!("view/{}", path)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// Returns the cached body for `path`, or runs `compute`, stores its
    /// output for the configured timeout and returns it.
    ///
    /// # Errors
    ///
    /// Cache backend failures and errors from `compute` are returned as-is;
    /// nothing is stored when `compute` fails.
    pub async fn get_or_compute<F, Fut>(&self, path: &str, compute: F) -> Result<String, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, AppError>>,
    {
        let key = Self::key_for(path);

        if let Some(body) = self.cache.get(&key).await? {
            debug!("View cache HIT for {}", path);
            return Ok(body);
        }

        debug!("View cache MISS for {}", path);
        let body = compute().await?;
        self.cache
            .set(&key, &body, Some(self.timeout_seconds))
            .await?;

        Ok(body)
    }

    /// Drops the cached body for `path`.
    pub async fn invalidate(&self, path: &str) -> Result<(), AppError> {
        self.cache.delete(&Self::key_for(path)).await?;
        Ok(())
    }
}
