//! DTOs for cache management endpoints.

use serde::Serialize;

/// Confirmation returned after a cache entry is evicted.
#[derive(Debug, Serialize)]
pub struct EvictResponse {
    pub message: String,
}

impl EvictResponse {
    pub fn for_code(code: &str) -> Self {
        Self {
            message: format!("Cache for short code '{}' deleted successfully", code),
        }
    }
}
