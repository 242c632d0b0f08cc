//! Infrastructure layer for external integrations.
//!
//! This layer implements the interfaces consumed by the application layer,
//! talking to the network services the redirect path depends on.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis and no-op implementations)
//! - [`upstream`] - HTTP client for the upstream URL service

pub mod cache;
pub mod upstream;
