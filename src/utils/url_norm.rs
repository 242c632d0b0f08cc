//! Redirect target normalization.

use std::borrow::Cow;
use url::Url;

/// Errors that can occur while turning a stored destination into a redirect target.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RedirectTargetError {
    #[error("destination URL is empty")]
    Empty,

    #[error("destination URL is not a valid absolute URL: {0}")]
    Invalid(String),
}

/// Prefixes `https://` when `destination` has no `http://` or `https://` scheme.
///
/// The scheme check is ASCII case-insensitive. Values that already carry a
/// scheme are returned unchanged.
///
/// # Examples
///
/// ```
/// use redirect_service::utils::url_norm::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com/x"), "https://example.com/x");
/// assert_eq!(ensure_scheme("http://example.com/x"), "http://example.com/x");
/// ```
pub fn ensure_scheme(destination: &str) -> Cow<'_, str> {
    if has_http_scheme(destination) {
        Cow::Borrowed(destination)
    } else {
        Cow::Owned(format!("https://{}", destination))
    }
}

/// Builds the `Location` value for a stored destination URL.
///
/// Trims surrounding whitespace, adds a scheme via [`ensure_scheme`] and
/// checks that the result parses as an absolute URL. The returned string is
/// the normalized input, not the parser's re-serialization.
///
/// # Errors
///
/// Returns [`RedirectTargetError::Empty`] for a blank destination.
/// Returns [`RedirectTargetError::Invalid`] if the result does not parse.
pub fn redirect_target(destination: &str) -> Result<String, RedirectTargetError> {
    let destination = destination.trim();
    if destination.is_empty() {
        return Err(RedirectTargetError::Empty);
    }

    let target = ensure_scheme(destination).into_owned();
    Url::parse(&target).map_err(|e| RedirectTargetError::Invalid(e.to_string()))?;

    Ok(target)
}

fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
