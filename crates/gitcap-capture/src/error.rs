//! Capture shim error types.

use thiserror::Error;

/// Errors that can occur while relaying and capturing an exchange.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The declared CONTENT_LENGTH could not be parsed.
    #[error("invalid CONTENT_LENGTH value: {0:?}")]
    InvalidContentLength(String),

    /// The backend executable could not be spawned.
    #[error("failed to run backend {path}: {source}")]
    Backend {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
