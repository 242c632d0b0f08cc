//! Cache-aside resolution of short codes.

use std::sync::Arc;
use std::time::Duration;

use metrics::counter;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::entities::{ShortCode, UrlRecord};
use crate::domain::repositories::UrlResolver;
use crate::domain::resolution::ResolutionOutcome;
use crate::infrastructure::cache::{CacheError, CacheService};

/// Failures that are neither a bad request nor a confirmed absence.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// A cached value exists but does not decode to a [`UrlRecord`].
    #[error("failed to parse cached data for key '{key}': {reason}")]
    CorruptCacheEntry { key: String, reason: String },

    #[error("URL service failure: {0}")]
    Upstream(String),

    #[error("malformed URL service response: {0}")]
    MalformedResponse(String),

    /// The cache store failed on an operation whose result the caller needs.
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Classified error of a resolution or eviction request.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{0}")]
    Validation(String),

    #[error("short URL not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Resolves short codes through a read-through cache in front of the
/// upstream URL service.
///
/// # Request Flow
///
/// 1. Read `urlinfo:<code>` from the cache
/// 2. On hit, decode and return without contacting upstream
/// 3. On miss or cache error, ask the upstream resolver
/// 4. On a found record, write it back with the configured TTL
///
/// # Failure Isolation
///
/// - **Cache read error**: logged, treated as a miss
/// - **Corrupt cache entry**: surfaced as [`ResolutionError::CorruptCacheEntry`]
/// - **Cache write error**: logged, the record is still returned
///
/// The service holds no mutable state; concurrent misses for the same code
/// each reach upstream.
pub struct ResolutionService {
    cache: Arc<dyn CacheService>,
    resolver: Arc<dyn UrlResolver>,
    cache_ttl: Duration,
}

impl ResolutionService {
    /// Creates a new resolution service.
    pub fn new(
        cache: Arc<dyn CacheService>,
        resolver: Arc<dyn UrlResolver>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            resolver,
            cache_ttl,
        }
    }

    /// Resolves `code` to its URL record.
    ///
    /// `code` is used verbatim; trimming is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Validation`] if `code` is empty.
    /// Returns [`ResolveError::NotFound`] if upstream confirms the code does not exist.
    /// Returns [`ResolveError::Resolution`] on a corrupt cache entry or any
    /// other upstream failure.
    pub async fn resolve_url(&self, code: &str) -> Result<UrlRecord, ResolveError> {
        let code = validate(code)?;
        let key = code.cache_key();

        match self.cache.get(&key).await {
            Ok(Some(cached)) => {
                return match serde_json::from_str::<UrlRecord>(&cached) {
                    Ok(record) => {
                        counter!("redirect_cache_hits_total").increment(1);
                        debug!("Cache hit for short code: {}", code);
                        Ok(record)
                    }
                    Err(e) => {
                        counter!("redirect_cache_errors_total", "op" => "decode").increment(1);
                        error!("Corrupt cache entry {}: {}", key, e);
                        Err(ResolutionError::CorruptCacheEntry {
                            key,
                            reason: e.to_string(),
                        }
                        .into())
                    }
                };
            }
            Ok(None) => {
                counter!("redirect_cache_misses_total").increment(1);
                debug!("Cache miss for short code: {}", code);
            }
            Err(e) => {
                counter!("redirect_cache_errors_total", "op" => "get").increment(1);
                warn!(
                    "Cache error for key {}: {}. Proceeding to fetch from URL service.",
                    key, e
                );
            }
        }

        let outcome = self.resolver.resolve(&code).await;
        counter!("redirect_upstream_requests_total", "outcome" => outcome.label()).increment(1);

        let record = match outcome {
            ResolutionOutcome::Found(record) => record,
            ResolutionOutcome::NotFound => {
                return Err(ResolveError::NotFound(code.to_string()));
            }
            ResolutionOutcome::UpstreamFailure(detail) => {
                warn!("URL service failure for {}: {}", code, detail);
                return Err(ResolutionError::Upstream(detail).into());
            }
            ResolutionOutcome::MalformedResponse(detail) => {
                warn!("Malformed URL service response for {}: {}", code, detail);
                return Err(ResolutionError::MalformedResponse(detail).into());
            }
        };

        self.populate(&key, &record).await;

        Ok(record)
    }

    /// Resolves `code` and returns only its stored destination URL.
    ///
    /// # Errors
    ///
    /// See [`Self::resolve_url`].
    pub async fn destination_url(&self, code: &str) -> Result<String, ResolveError> {
        self.resolve_url(code)
            .await
            .map(|record| record.destination_url)
    }

    /// Deletes the cached record for `code`, forcing the next resolution
    /// to go upstream. Upstream state is untouched.
    ///
    /// Evicting a code that is not cached succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Validation`] if `code` is empty.
    /// Returns [`ResolutionError::Cache`] if the cache store fails.
    pub async fn evict(&self, code: &str) -> Result<(), ResolveError> {
        let code = validate(code)?;
        let key = code.cache_key();

        debug!("Deleting cache for short code: {} (key: {})", code, key);
        self.cache.delete(&key).await.map_err(|e| {
            counter!("redirect_cache_errors_total", "op" => "delete").increment(1);
            ResolveError::from(ResolutionError::Cache(e))
        })
    }

    /// Best-effort write-back of a freshly resolved record.
    async fn populate(&self, key: &str, record: &UrlRecord) {
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize URL info for caching: {}", e);
                return;
            }
        };

        if let Err(e) = self.cache.set(key, &payload, self.cache_ttl).await {
            counter!("redirect_cache_errors_total", "op" => "set").increment(1);
            warn!("Failed to set cache for key {}: {}", key, e);
        }
    }
}

fn validate(code: &str) -> Result<ShortCode, ResolveError> {
    ShortCode::new(code).map_err(|e| ResolveError::Validation(e.to_string()))
}
