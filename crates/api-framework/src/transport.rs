//! # Transports
//!
//! A [`Transport`] performs one request and returns the decoded JSON body. It is
//! the single place where network failures are normalized into [`ApiError`].
//!
//! [`HttpTransport`] is the reqwest-backed implementation used in production;
//! [`MockTransport`](crate::mock::MockTransport) replays scripted responses in tests.

use crate::error::ApiError;
use crate::message::ApiRequest;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client-side deadline applied to every call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends requests to the API and normalizes their outcome.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The base URL every request path is appended to.
    fn base_url(&self) -> &str;

    /// Performs the request.
    ///
    /// Returns `Ok(None)` when a success response has an empty or non-JSON body.
    /// Any status outside 2xx, redirects included, is an [`ApiError::ServerError`].
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError>;
}

/// Reqwest-backed transport with a fixed base URL and deadline.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport targeting `base_url` with the given per-call deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unknown`] when the URL is not absolute or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        url::Url::parse(base_url).map_err(ApiError::unknown)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // 3xx must surface as ServerError, never be followed.
        let client = Client::builder()
            .default_headers(headers)
            .redirect(Policy::none())
            .timeout(timeout)
            .build()
            .map_err(ApiError::unknown)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::Unreachable {
                base_url: self.base_url.clone(),
            }
        } else {
            ApiError::unknown(error)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        debug!("Sending request");
        let mut builder = self
            .client
            .request(request.method, self.endpoint(&request.path));
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !status.is_success() {
            let error = ApiError::from_status(status, body.as_ref());
            warn!(status = status.as_u16(), error = %error, "Request rejected");
            return Err(error);
        }

        debug!(status = status.as_u16(), bytes = body.len(), "Response received");
        Ok(decode_body(body.as_ref()))
    }
}

fn decode_body(body: &[u8]) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(error = %e, "Ignoring non-JSON success body");
            None
        }
    }
}
