//! # API Errors
//!
//! Every failure a [`Transport`](crate::Transport) can produce is normalized into
//! one [`ApiError`] variant at the transport boundary. Callers pattern-match on
//! the variant, never on the message text.

use reqwest::StatusCode;

/// The four ways a call against the remote API can fail.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The call exceeded the client-side deadline.
    #[error("Request timeout. Please check your connection.")]
    Timeout,

    /// No network path to the configured base URL (DNS or connection failure).
    #[error("Cannot connect to backend server at {base_url}. Make sure the API server is running.")]
    Unreachable { base_url: String },

    /// The server answered with a non-2xx status.
    #[error("API Error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// Anything else, with its original cause.
    #[error("{0}")]
    Unknown(Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Wraps an arbitrary cause as [`ApiError::Unknown`].
    pub fn unknown(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ApiError::Unknown(cause.into())
    }

    /// Builds a [`ApiError::ServerError`] from a status and the raw response body.
    ///
    /// A JSON string body is unwrapped, any other JSON value is rendered compactly,
    /// plain text is kept as-is and an empty body falls back to the status text.
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        ApiError::ServerError {
            status: status.as_u16(),
            body: stringify_body(status, body),
        }
    }

    /// Status code of a [`ApiError::ServerError`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Unreachable { .. })
    }
}

fn stringify_body(status: StatusCode, body: &[u8]) -> String {
    if body.iter().all(u8::is_ascii_whitespace) {
        return status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

/// Failures decoding a success response into the expected shape.
///
/// These surface to callers wrapped in [`ApiError::Unknown`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl From<DecodeError> for ApiError {
    fn from(e: DecodeError) -> Self {
        ApiError::unknown(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_renders_structured_body_as_json() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            br#"{"title": ["This field is required."]}"#,
        );
        let message = err.to_string();
        assert!(message.contains("400"));
        assert!(message.contains(r#"{"title":["This field is required."]}"#));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn server_error_unwraps_json_string_body() {
        let err = ApiError::from_status(StatusCode::FORBIDDEN, br#""Not allowed""#);
        assert_eq!(err.to_string(), "API Error (403): Not allowed");
    }

    #[test]
    fn server_error_keeps_plain_text_body() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, b"<h1>Bad Gateway</h1>\n");
        assert_eq!(err.to_string(), "API Error (502): <h1>Bad Gateway</h1>");
    }

    #[test]
    fn server_error_falls_back_to_status_text() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, b"");
        assert_eq!(err.to_string(), "API Error (404): Not Found");
    }

    #[test]
    fn redirect_statuses_carry_their_code() {
        let err = ApiError::from_status(StatusCode::MOVED_PERMANENTLY, b"");
        assert!(err.to_string().contains("301"));
    }

    #[test]
    fn unreachable_names_base_url() {
        let err = ApiError::Unreachable {
            base_url: "http://10.0.2.2:8000/api".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("http://10.0.2.2:8000/api"));
        assert!(message.contains("server is running"));
    }

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::Unreachable {
            base_url: String::new()
        }
        .is_retryable());
        assert!(!ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, b"").is_retryable());
        assert!(!ApiError::unknown("boom").is_retryable());
    }

    #[test]
    fn decode_errors_become_unknown() {
        let cause = serde_json::from_str::<u32>("\"seven\"").unwrap_err();
        let err: ApiError = DecodeError::from(cause).into();
        assert!(matches!(err, ApiError::Unknown(_)));
        assert!(err.to_string().starts_with("Invalid response payload"));
    }
}
