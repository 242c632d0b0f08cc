//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Upper bound for establishing the connection and the startup PING.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis cache implementation for URL record lookups.
///
/// Uses a shared `ConnectionManager` that is cheap to clone per call and
/// safe for concurrent use. Every command is bounded by `op_timeout`;
/// errors and timeouts are returned to the caller rather than swallowed.
pub struct RedisCache {
    client: ConnectionManager,
    op_timeout: Duration,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// The whole handshake is bounded by [`CONNECT_TIMEOUT`].
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379/0"`)
    /// - `op_timeout` - Per-command timeout applied to get/set/delete
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING fails.
    /// Returns [`CacheError::Timeout`] if the handshake exceeds the bound.
    pub async fn connect(redis_url: &str, op_timeout: Duration) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = timeout(CONNECT_TIMEOUT, async {
            let manager = ConnectionManager::new(client).await.map_err(|e| {
                CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

            let mut test_conn = manager.clone();
            test_conn
                .ping::<()>()
                .await
                .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

            Ok::<_, CacheError>(manager)
        })
        .await
        .map_err(|_| CacheError::Timeout(CONNECT_TIMEOUT))??;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            op_timeout,
        })
    }
}

/// Runs a Redis command under `op_timeout`.
///
/// An elapsed timeout is an error, never a miss. I/O and dropped-connection
/// failures map to [`CacheError::ConnectionError`], everything else to
/// [`CacheError::OperationError`].
async fn bounded<T, F>(op_timeout: Duration, op: F) -> CacheResult<T>
where
    F: Future<Output = redis::RedisResult<T>>,
{
    match timeout(op_timeout, op).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) if e.is_io_error() || e.is_connection_dropped() => {
            Err(CacheError::ConnectionError(e.to_string()))
        }
        Ok(Err(e)) => Err(CacheError::OperationError(e.to_string())),
        Err(_) => Err(CacheError::Timeout(op_timeout)),
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = bounded(self.op_timeout, conn.get::<_, Option<String>>(key)).await?;

        match &value {
            Some(_) => debug!("Cache HIT: {}", key),
            None => debug!("Cache MISS: {}", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.client.clone();
        // SETEX rejects a zero expiry.
        let ttl_seconds = ttl.as_secs().max(1);

        bounded(self.op_timeout, conn.set_ex::<_, _, ()>(key, value, ttl_seconds)).await?;

        debug!("Cache SET: {} (TTL: {}s)", key, ttl_seconds);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.client.clone();
        let deleted = bounded(self.op_timeout, conn.del::<_, i32>(key)).await?;

        if deleted > 0 {
            debug!("Cache DELETE: {}", key);
        }
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        bounded(self.op_timeout, conn.ping::<()>()).await.is_ok()
    }
}
