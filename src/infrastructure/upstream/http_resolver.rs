//! HTTP implementation of [`UrlResolver`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::envelope::ApiEnvelope;
use crate::domain::entities::ShortCode;
use crate::domain::repositories::UrlResolver;
use crate::domain::resolution::ResolutionOutcome;

/// Maximum number of characters of an unexpected response body kept in
/// failure details.
const BODY_SNIPPET_LEN: usize = 256;

/// Resolves short codes against `<base>/url/{short}`.
///
/// Holds a single `reqwest::Client` that is built once and shared by all
/// requests. One attempt per call; transport errors, unexpected statuses and
/// undecodable bodies are all classified rather than returned as errors.
#[derive(Debug, Clone)]
pub struct HttpUrlResolver {
    client: Client,
    base_url: String,
}

impl HttpUrlResolver {
    /// Builds a resolver for the service rooted at `base_url`.
    ///
    /// A trailing `/` on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Builds `<base>/url/{code}`, percent-encoding the code as one path segment.
    fn lookup_url(&self, code: &ShortCode) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("url")
            .push(code.as_str());
        Ok(url)
    }
}

#[async_trait]
impl UrlResolver for HttpUrlResolver {
    async fn resolve(&self, code: &ShortCode) -> ResolutionOutcome {
        let url = match self.lookup_url(code) {
            Ok(url) => url,
            Err(e) => {
                return ResolutionOutcome::UpstreamFailure(format!(
                    "invalid URL service base URL '{}': {}",
                    self.base_url, e
                ));
            }
        };
        debug!("Fetching from URL service: {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("URL service request failed for {}: {}", code, e);
                return ResolutionOutcome::UpstreamFailure(describe_transport_error(&e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return ResolutionOutcome::UpstreamFailure(format!(
                    "failed to read response body: {}",
                    e
                ));
            }
        };

        classify(status, &body)
    }
}

/// Maps an upstream status and body to an outcome.
fn classify(status: StatusCode, body: &str) -> ResolutionOutcome {
    if status == StatusCode::NOT_FOUND {
        return ResolutionOutcome::NotFound;
    }

    if status != StatusCode::OK {
        return ResolutionOutcome::UpstreamFailure(format!(
            "URL service returned status {}: {}",
            status.as_u16(),
            snippet(body)
        ));
    }

    let envelope: ApiEnvelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            return ResolutionOutcome::MalformedResponse(format!(
                "failed to parse response JSON: {}",
                e
            ));
        }
    };

    if let Some(error) = envelope.error_message() {
        return ResolutionOutcome::UpstreamFailure(format!("URL service error: {}", error));
    }

    match envelope.data {
        Some(record) => ResolutionOutcome::Found(record),
        None => ResolutionOutcome::UpstreamFailure("no data returned from URL service".to_string()),
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        format!("URL service request timed out: {}", e)
    } else if e.is_connect() {
        format!("Connection to URL service failed: {}", e)
    } else {
        format!("failed to fetch URL info: {}", e)
    }
}

fn snippet(body: &str) -> String {
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
