//! Error types for the tunewire API client.

use thiserror::Error;

/// Main error type for all backend operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-OK status.
    ///
    /// The message is the backend's `message` field when it sent one,
    /// otherwise `HTTP error! status: <code>`.
    #[error("{message}")]
    RequestFailed {
        /// HTTP status code of the response.
        status: u16,
        /// Message shown to the user.
        message: String,
    },

    /// A required form field was blank; nothing was sent.
    #[error("{0} is required")]
    Validation(&'static str),

    /// The request never produced a response (connection, TLS, timeout).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not decode into the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A path parameter would change which endpoint is addressed.
    #[error("Invalid path parameter for {field}: {value:?}")]
    InvalidPathSegment {
        /// Which parameter was rejected.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Client configuration is unusable (bad base URL, etc.).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading a file for upload failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Build the error for a non-OK response from its status and parsed body.
    ///
    /// `body` is whatever JSON the backend sent, or an empty object when the
    /// body was not JSON at all.
    pub fn from_response(status: u16, body: &serde_json::Value) -> Self {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));

        Self::RequestFailed { status, message }
    }

    /// HTTP status of a failed request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for tunewire operations.
pub type Result<T> = std::result::Result<T, ApiError>;
