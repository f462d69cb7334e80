//! # API Framework
//!
//! This crate provides the building blocks for type-safe access to a JSON REST
//! API organized as resource collections (`/recipes/`, `/users/{id}/`, …).
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`ApiEntity`]) - your domain records and their collection paths
//! 2. **Interface Layer** ([`ResourceClient`], [`ApiClient`]) - typed CRUD calls
//! 3. **Transport Layer** ([`Transport`]) - one request in, one normalized result out
//!
//! Every failure is normalized into an [`ApiError`] exactly once, at the transport
//! boundary. List endpoints accept both bare arrays and `{"results": [...]}`
//! envelopes (see [`envelope`]).
//!
//! ## Read Paths and Fallback Data
//!
//! A [`FallbackPolicy`] turns the result of a read call into a [`Resolution`]:
//! live data when there is some, the bundled dataset when the call came back
//! empty or failed. Write calls never go through a policy; their errors always
//! reach the caller.
//!
//! ## Concurrency Model
//!
//! - Each call is a single async request/response; the only suspension point is the network
//! - Calls issued concurrently are independent and unordered
//! - Each call enforces a fixed deadline and resolves exactly once
//! - No shared mutable state: clients hold an `Arc` to an immutable transport
//!
//! ## Testing
//!
//! [`mock::MockTransport`] answers requests from a queue of expectations, so
//! clients and read flows can be tested without sockets.

pub mod client;
pub mod client_trait;
pub mod entity;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod message;
pub mod mock;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client::ResourceClient;
pub use client_trait::ApiClient;
pub use entity::ApiEntity;
pub use error::{ApiError, DecodeError};
pub use fallback::{DataSource, FallbackPolicy, Resolution};
pub use message::{ApiRequest, Method};
pub use transport::{HttpTransport, Transport, DEFAULT_TIMEOUT};
