//! Short code value type.

use std::fmt;

/// Errors produced when constructing a [`ShortCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortCodeError {
    #[error("Short code is required")]
    Empty,
}

/// An opaque, non-empty, case-sensitive short code.
///
/// No trimming or character validation happens here. Callers that receive
/// raw input (e.g. the HTTP path segment) should use [`ShortCode::parse`],
/// which trims surrounding whitespace first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    /// Wraps `code` as-is, rejecting the empty string.
    pub fn new(code: impl Into<String>) -> Result<Self, ShortCodeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(ShortCodeError::Empty);
        }
        Ok(Self(code))
    }

    /// Trims surrounding whitespace from raw input and wraps the result.
    pub fn parse(raw: &str) -> Result<Self, ShortCodeError> {
        Self::new(raw.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Cache key under which the record for this code is stored.
    pub fn cache_key(&self) -> String {
        format!("urlinfo:{}", self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
