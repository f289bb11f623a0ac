//! Request error normalization.
//!
//! Every failure leaving the HTTP layer is one `ApiError`. Non-2xx bodies
//! come back in several shapes depending on which backend handler produced
//! them, so the message is extracted with a fixed priority order:
//! raw string body, `message`, `error`, `msg`, the whole body as JSON,
//! then a generic status line.

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

use serde_json::Value;

/// Normalized error for all outbound API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Server responded with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Request was sent but no response came back.
    #[error("Network error: no response received")]
    Network,

    /// Request could not be constructed (bad body, bad URL).
    #[error("Request setup error: {0}")]
    Setup(String),

    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// Client-side validation rejected the input before any network call.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// True when the server explicitly rejected the credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }

    /// Build a `Status` error from a response body, extracting the most
    /// human-readable message available.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status { status, message: extract_message(status, body) }
    }
}

/// Pull a display message out of an error response body.
pub(crate) fn extract_message(status: u16, body: &str) -> String {
    let fallback = || format!("HTTP error! status: {status}");
    if body.is_empty() {
        return fallback();
    }

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        // Not JSON at all: the body is a plain-text message.
        return body.to_owned();
    };

    match value {
        Value::String(s) => s,
        Value::Object(ref map) => {
            for key in ["message", "error", "msg"] {
                if let Some(Value::String(s)) = map.get(key) {
                    return s.clone();
                }
            }
            serde_json::to_string(&value).unwrap_or_else(|_| fallback())
        }
        other => serde_json::to_string(&other).unwrap_or_else(|_| fallback()),
    }
}
