//! # Redirect Service
//!
//! Resolves short codes to destination URLs and redirects callers, using a
//! Redis read-through cache in front of the upstream URL service.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short codes, URL records, resolver trait
//! - **Application Layer** ([`application`]) - Cache-aside resolution and eviction
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis cache and upstream HTTP client
//! - **API Layer** ([`api`]) - Redirect, eviction and health handlers
//!
//! ## Request Flow
//!
//! ```text
//! GET /{short} -> ResolutionService -> cache GET -> hit: 301
//!                                               -> miss/error: URL service -> cache SET -> 301
//! ```
//!
//! Cache failures never block a redirect: read errors degrade to a miss and
//! write errors are logged. A cached value that does not decode is reported
//! as an error rather than silently refetched.
//!
//! ## Quick Start
//!
//! ```bash
//! export URL_SERVICE_BASE_URL="http://localhost:8081"
//! export REDIS_ADDR="localhost:6379"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolutionError, ResolutionService, ResolveError};
    pub use crate::domain::entities::{ShortCode, UrlRecord};
    pub use crate::domain::repositories::UrlResolver;
    pub use crate::domain::resolution::ResolutionOutcome;
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheError, CacheResult, CacheService};
    pub use crate::state::AppState;
}
