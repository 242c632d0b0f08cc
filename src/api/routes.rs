//! API route configuration.

use crate::api::handlers::{
    evict_cache_handler, health_handler, readiness_handler, redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// All service routes.
///
/// # Endpoints
///
/// - `GET    /health`         - Static liveness payload
/// - `GET    /health/ready`   - Cache readiness check
/// - `DELETE /cache/{short}`  - Evict the cached record for a short code
/// - `GET    /{short}`        - Redirect to the destination URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/health/ready", get(readiness_handler))
        .route("/cache/{short}", delete(evict_cache_handler))
        .route("/{short}", get(redirect_handler))
}
