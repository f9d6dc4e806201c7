//! In-process cache with per-entry expiry.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Thread-safe in-memory cache.
///
/// Expired entries are dropped lazily on the next lookup of the same key.
/// Suitable for a single server process or for tests; entries are not
/// shared between processes.
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
    default_ttl: u64,
}

impl MemoryCache {
    /// Creates an empty cache using `default_ttl_seconds` when `set` is called without a TTL.
    pub fn new(default_ttl_seconds: u64) -> Self {
        debug!("Using MemoryCache (default TTL: {}s)", default_ttl_seconds);
        Self {
            entries: DashMap::new(),
            default_ttl: default_ttl_seconds,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > Instant::now() {
                debug!("Cache HIT: {}", key);
                return Ok(Some(entry.value.clone()));
            }
            drop(entry);
            self.entries.remove(key);
            debug!("Cache EXPIRED: {}", key);
        }
        debug!("Cache MISS: {}", key);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        let expires_at = Instant::now()
            .checked_add(Duration::from_secs(ttl))
            .ok_or_else(|| CacheError::Operation(format!("TTL of {}s is out of range", ttl)))?;

        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        debug!("Cache SET: {} (TTL: {}s)", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        if self.entries.remove(key).is_some() {
            debug!("Cache DELETE: {}", key);
        }
        Ok(())
    }

    async fn clear(&self) -> CacheResult<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        debug!("Cache CLEAR: {} entries", removed);
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "simple"
    }
}
