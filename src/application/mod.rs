//! Application layer services implementing the redirect use cases.
//!
//! Services consume the cache and upstream abstractions and provide a clean
//! API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::resolution_service::ResolutionService`] - Cache-aside short code resolution and eviction

pub mod services;
