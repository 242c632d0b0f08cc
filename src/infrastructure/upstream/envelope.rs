//! Wire envelope returned by the upstream URL service.

use crate::domain::entities::UrlRecord;
use serde::Deserialize;

/// Response envelope for `GET <base>/url/{short}`.
///
/// `error` and `message` are optional on the wire and treated as empty
/// when absent.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub data: Option<UrlRecord>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// The upstream-reported error, if one is set and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}
