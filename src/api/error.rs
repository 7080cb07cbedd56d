use serde::Deserialize;
use thiserror::Error;

/// Closed set of failures surfaced by the request client.
///
/// Every operation resolves to either its typed success value or one of
/// these; no other error type escapes the transport boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Could not reach the service: {0}")]
    Unreachable(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Machine-readable error body the service attaches to non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data.
    /// Error bodies come from arbitrary services and proxies, so the cut
    /// must land on a char boundary, not a byte offset.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..end],
                body.len()
            )
        }
    }

    /// Classify a non-success status. Uses the service-supplied `detail` when
    /// the body carries one, otherwise a message derived from the status.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) if !parsed.detail.is_empty() => ApiError::Rejected(parsed.detail),
            _ => ApiError::Rejected(format!(
                "Service returned {}: {}",
                status,
                Self::truncate_body(body)
            )),
        }
    }

    /// Classify a transport-level failure from reqwest.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unreachable(err.to_string())
        } else {
            ApiError::Unknown(err.to_string())
        }
    }

    /// Actionable message for display. Each variant maps to distinct
    /// guidance; `Rejected` and `Validation` carry their own text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(detail) => detail.clone(),
            ApiError::Unreachable(_) | ApiError::Timeout => {
                "Could not reach the service. Check that it is running and try again.".to_string()
            }
            ApiError::Rejected(detail) => detail.clone(),
            ApiError::MalformedResponse(_) | ApiError::Unknown(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_transport(err)
    }
}
