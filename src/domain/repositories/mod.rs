//! Source-of-truth trait definitions for the domain layer.
//!
//! The upstream URL service is the authoritative store of URL metadata. The
//! trait here abstracts it so the resolution engine can be exercised with
//! mocks.
//!
//! # Architecture
//!
//! - Traits define the contract for lookups
//! - Implementations live in `crate::infrastructure::upstream`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod url_resolver;

pub use url_resolver::UrlResolver;

#[cfg(test)]
pub use url_resolver::MockUrlResolver;
