//! Streaming-related error types.

use thiserror::Error;

/// Errors raised while reading an established event stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StreamError {
    /// The transport failed mid-read (anything other than a clean end-of-stream).
    #[error("error reading from stream: {message}")]
    ReadFailed { message: String },
}

impl StreamError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::ReadFailed { .. } => "E_STREAM_READ",
        }
    }
}
