use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::application::services::{ResolutionError, ResolveError};

/// Message returned when a short code cannot be resolved for a reason other
/// than absence.
pub const RESOLUTION_FAILED_MESSAGE: &str = "Failed to fetch URL information";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// HTTP-facing error. Serializes as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    BadGateway(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::BadGateway(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::BadGateway(message)
            | AppError::Internal(message) => message,
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Maps a resolution failure to its HTTP kind.
///
/// Upstream failures become 502; cache corruption and cache store errors
/// are failures of this service and become 500. Details stay in the logs.
impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::Validation(message) => AppError::bad_request(message),
            ResolveError::NotFound(_) => AppError::not_found("Short URL not found"),
            ResolveError::Resolution(
                ResolutionError::Upstream(_) | ResolutionError::MalformedResponse(_),
            ) => AppError::bad_gateway(RESOLUTION_FAILED_MESSAGE),
            ResolveError::Resolution(
                ResolutionError::CorruptCacheEntry { .. } | ResolutionError::Cache(_),
            ) => AppError::internal(RESOLUTION_FAILED_MESSAGE),
        }
    }
}
