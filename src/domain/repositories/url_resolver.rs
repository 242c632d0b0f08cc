//! Resolver trait for upstream short-code lookups.

use crate::domain::entities::ShortCode;
use crate::domain::resolution::ResolutionOutcome;
use async_trait::async_trait;

/// Looks up URL metadata for a short code at the authoritative source.
///
/// Implementations make exactly one attempt per call and never retry.
/// Every failure mode is folded into [`ResolutionOutcome`], so the call
/// itself is infallible.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::HttpUrlResolver`] - HTTP client for the URL service
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlResolver: Send + Sync {
    /// Resolves `code` into a classified outcome.
    async fn resolve(&self, code: &ShortCode) -> ResolutionOutcome;
}
