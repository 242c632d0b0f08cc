//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::entities::ShortCode;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_norm::redirect_target;

/// Redirects a short code to its destination URL.
///
/// # Endpoint
///
/// `GET /{short}`
///
/// # Request Flow
///
/// 1. Trim the path segment; reject blank codes
/// 2. Resolve through the cache-aside [`crate::application::services::ResolutionService`]
/// 3. Add `https://` to destinations stored without a scheme
/// 4. Return 301 Moved Permanently
///
/// # Errors
///
/// - 400 Bad Request if the short code is blank
/// - 404 Not Found if upstream has no such short code
/// - 502 Bad Gateway if the URL service fails or answers garbage
/// - 500 Internal Server Error on a corrupt cache entry or an unusable destination
pub async fn redirect_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let code = ShortCode::parse(&short).map_err(|e| AppError::bad_request(e.to_string()))?;

    let record = state
        .resolution_service
        .resolve_url(code.as_str())
        .await
        .inspect_err(|e| debug!("Resolution of {} failed: {}", code, e))?;

    let target = redirect_target(&record.destination_url).map_err(|e| {
        error!("Unusable destination for {}: {}", code, e);
        AppError::internal("Invalid destination URL")
    })?;

    let location = HeaderValue::try_from(target).map_err(|e| {
        error!("Destination for {} is not a valid header value: {}", code, e);
        AppError::internal("Invalid destination URL")
    })?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
