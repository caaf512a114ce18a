//! Error types for the autograf client.

use thiserror::Error;

/// Errors that can occur when using the autograf client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server URL could not be parsed.
    #[error("Failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    /// The server URL parsed but cannot be used as an API base.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP request could not be assembled (bad header name or value, bad method).
    #[error("Failed to build request: {0}")]
    RequestBuild(String),

    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be read completely.
    #[error("Failed to read response body: {0}")]
    Io(#[source] reqwest::Error),

    /// Server returned a non-success status code.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Response body does not match the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ClientError {
    /// HTTP status code for [`ClientError::Api`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the call was stopped by its [`RequestContext`](crate::RequestContext).
    pub fn is_canceled(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::Canceled | TransportError::DeadlineExceeded)
        )
    }
}

/// Failures below the HTTP layer: DNS, connect, TLS, or the caller giving up.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying HTTP client failed to deliver the request.
    #[error("{0}")]
    Http(#[source] reqwest::Error),

    /// The request context was canceled while the call was in flight.
    #[error("request canceled")]
    Canceled,

    /// The request context deadline passed while the call was in flight.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
