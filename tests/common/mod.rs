#![allow(dead_code)]

use async_trait::async_trait;
use datetime_endpoint::infrastructure::cache::{CacheError, CacheResult, CacheService, MemoryCache};
use datetime_endpoint::state::AppState;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TEST_TIMEOUT: u64 = 3000;

/// State backed by an in-process cache the test can inspect.
pub fn create_test_state() -> (AppState, Arc<CountingCache>) {
    let cache = Arc::new(CountingCache::new(MemoryCache::new(TEST_TIMEOUT)));
    let state = AppState::new(cache.clone(), TEST_TIMEOUT);
    (state, cache)
}

/// State whose cache backend fails every call.
pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingCache), TEST_TIMEOUT)
}

/// Wraps a cache and counts stores, so tests can tell hits from misses.
pub struct CountingCache {
    inner: MemoryCache,
    sets: AtomicUsize,
}

impl CountingCache {
    pub fn new(inner: MemoryCache) -> Self {
        Self {
            inner,
            sets: AtomicUsize::new(0),
        }
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheService for CountingCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl_seconds).await
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        self.inner.delete(key).await
    }

    async fn clear(&self) -> CacheResult<usize> {
        self.inner.clear().await
    }

    async fn health_check(&self) -> bool {
        self.inner.health_check().await
    }

    fn backend(&self) -> &'static str {
        self.inner.backend()
    }
}

/// A backend that is never reachable.
pub struct FailingCache;

#[async_trait]
impl CacheService for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn clear(&self) -> CacheResult<usize> {
        Err(CacheError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
