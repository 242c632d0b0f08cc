//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cache;
pub mod health;
pub mod redirect;

pub use cache::evict_cache_handler;
pub use health::{health_handler, readiness_handler};
pub use redirect::redirect_handler;
