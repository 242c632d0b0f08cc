//! Handler for cache eviction.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::cache::EvictResponse;
use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;

/// Deletes the cached record for a short code.
///
/// # Endpoint
///
/// `DELETE /cache/{short}`
///
/// The next redirect for the code goes to the URL service. Evicting a code
/// that is not cached still returns 200.
///
/// # Errors
///
/// - 400 Bad Request if the short code is blank
/// - 500 Internal Server Error if the cache store fails
pub async fn evict_cache_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<EvictResponse>, AppError> {
    let code = ShortCode::parse(&short).map_err(|e| AppError::bad_request(e.to_string()))?;

    state
        .resolution_service
        .evict(code.as_str())
        .await
        .map_err(|e| {
            error!("Error deleting cache for short code '{}': {}", code, e);
            AppError::internal("Failed to delete cache entry")
        })?;

    info!("Evicted cache entry for short code '{}'", code);
    Ok(Json(EvictResponse::for_code(code.as_str())))
}
