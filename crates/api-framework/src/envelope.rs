//! # List Envelopes
//!
//! List endpoints may answer with a bare JSON array or, when the server
//! paginates, with an object wrapping the array under `results`. Both are
//! normalized into a plain `Vec<T>` here; any other shape yields an empty list.

use crate::error::{ApiError, DecodeError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Field that carries the items of a paginated response.
pub const RESULTS_KEY: &str = "results";

/// Unwraps a list response body into its items.
///
/// `None` stands for an empty or non-JSON success body.
pub fn unwrap_list<T: DeserializeOwned>(body: Option<Value>) -> Result<Vec<T>, ApiError> {
    let items = match body {
        Some(items @ Value::Array(_)) => items,
        Some(Value::Object(mut envelope)) => match envelope.remove(RESULTS_KEY) {
            Some(items @ Value::Array(_)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(items).map_err(|e| DecodeError::Payload(e).into())
}
