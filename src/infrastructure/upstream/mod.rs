//! Client for the upstream URL service.
//!
//! The upstream service owns URL metadata. This module translates its HTTP
//! responses into [`crate::domain::resolution::ResolutionOutcome`] values.

mod envelope;
mod http_resolver;

pub use http_resolver::HttpUrlResolver;
