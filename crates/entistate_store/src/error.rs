//! Error types for store operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to the remote resource.
///
/// These never cross the store boundary: [`RemoteStore`](crate::RemoteStore)
/// converts them to its `error` string.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network or transport failure before a response arrived.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// Error response bodies are not parsed; only the status survives.
    #[error("request failed with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// JSON encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a status error.
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }
}
