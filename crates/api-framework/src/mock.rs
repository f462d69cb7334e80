//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements the same [`Transport`] trait as the production
//! [`HttpTransport`](crate::HttpTransport) but answers from an in-memory queue of
//! expectations. It lets you test resource clients and the read/write flows built
//! on them without opening a socket.
//!
//! ## When to use the mock vs a real server
//!
//! | Feature | MockTransport | HttpTransport + local server |
//! |---------|---------------|------------------------------|
//! | **Speed** | Instant (in-memory) | Fast (loopback HTTP) |
//! | **Determinism** | 100% deterministic | Subject to real timers |
//! | **Covers** | Client logic, fallback policy | Error normalization, headers, wire shapes |
//! | **Error Injection** | Any [`ApiError`] via `return_err` | Status codes, delays, closed ports |
//!
//! ## Example
//!
//! ```rust
//! use api_framework::mock::MockTransport;
//! use api_framework::{ApiError, ApiRequest, Method, Transport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new("http://api.test/api");
//!     mock.expect(Method::GET, "recipes/").return_json(json!([]));
//!     mock.expect(Method::GET, "users/").return_err(ApiError::Timeout);
//!
//!     let transport = mock.transport();
//!     let body = transport.send(ApiRequest::new(Method::GET, "recipes/")).await;
//!     assert_eq!(body.unwrap(), Some(json!([])));
//!     let err = transport.send(ApiRequest::new(Method::GET, "users/")).await;
//!     assert!(matches!(err, Err(ApiError::Timeout)));
//!
//!     mock.verify(); // every expectation was consumed
//! }
//! ```
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation panics, so a test fails loudly instead of silently exercising a
//! fallback path.

use crate::error::ApiError;
use crate::message::{ApiRequest, Method};
use crate::transport::Transport;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Expectation {
    method: Method,
    path: String,
    response: Result<Option<Value>, ApiError>,
}

struct MockState {
    base_url: String,
    expectations: Mutex<VecDeque<Expectation>>,
    requests: Mutex<Vec<ApiRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A scripted transport with expectation tracking for fluent testing.
///
/// Clones share the same expectation queue and request log.
#[derive(Clone)]
pub struct MockTransport {
    state: Arc<MockState>,
}

impl MockTransport {
    /// Creates a mock with no expectations that reports `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            state: Arc::new(MockState {
                base_url: base_url.into(),
                expectations: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns the mock as a shareable transport for clients under test.
    pub fn transport(&self) -> Arc<dyn Transport> {
        Arc::new(self.clone())
    }

    /// Expects the next request to be `method path`.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            state: Arc::clone(&self.state),
        }
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.state.requests).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.state.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that attaches a response to an expected request.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    state: Arc<MockState>,
}

impl ExpectationBuilder {
    /// Answers with a successful JSON body.
    pub fn return_json(self, body: Value) {
        self.push(Ok(Some(body)));
    }

    /// Answers with a successful empty (or non-JSON) body.
    pub fn return_empty(self) {
        self.push(Ok(None));
    }

    /// Fails the request with `error`.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<Value>, ApiError>) {
        lock(&self.state.expectations).push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        &self.state.base_url
    }

    async fn send(&self, request: ApiRequest) -> Result<Option<Value>, ApiError> {
        lock(&self.state.requests).push(request.clone());
        let expectation = lock(&self.state.expectations).pop_front();
        match expectation {
            Some(exp) if exp.method == request.method && exp.path == request.path => exp.response,
            Some(exp) => panic!(
                "Unexpected request {} {} (expected {} {})",
                request.method, request.path, exp.method, exp.path
            ),
            None => panic!(
                "Unexpected request {} {} (no expectations left)",
                request.method, request.path
            ),
        }
    }
}
