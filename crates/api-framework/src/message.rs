//! # Requests
//!
//! The transport-neutral description of one call, passed from
//! [`ResourceClient`](crate::ResourceClient) to a [`Transport`](crate::Transport).

pub use reqwest::Method;
use serde_json::Value;

/// A single request against the API, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Endpoint path without a leading slash, e.g. `recipes/7/`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}
