//! No-op cache implementation for testing or disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unreachable at startup. Every read is a miss, so each
/// resolution goes to the upstream service; writes and deletes succeed
/// without storing anything. Health checks fail so readiness reports the
/// service as degraded while no caching happens.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> CacheResult<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullCache::new();
        cache
            .set("urlinfo:abc", "{}", Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.get("urlinfo:abc").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_null_cache_delete_is_ok() {
        let cache = NullCache::default();
        assert!(cache.delete("urlinfo:missing").await.is_ok());
        assert!(cache.delete("urlinfo:missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_null_cache_is_never_healthy() {
        assert!(!NullCache::new().health_check().await);
    }
}
