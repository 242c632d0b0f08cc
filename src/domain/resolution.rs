//! Typed result of an upstream lookup.

use crate::domain::entities::UrlRecord;

/// Classified outcome of resolving a short code against the upstream service.
///
/// "Not found" is a variant in its own right so callers never have to
/// recover it from an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Found(UrlRecord),
    NotFound,
    /// Upstream answered but reported a failure, or could not be reached.
    UpstreamFailure(String),
    /// Upstream answered with a body that is not the expected envelope.
    MalformedResponse(String),
}

impl ResolutionOutcome {
    /// Short label used for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::UpstreamFailure(_) => "upstream_failure",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}
