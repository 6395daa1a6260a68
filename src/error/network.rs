//! Network-related error types.
//!
//! This module defines errors raised by the HTTP seam, both when opening the
//! upstream event stream and when delivering a payload to the forwarding
//! target.

use std::time::Duration;

use thiserror::Error;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request could not be built (malformed URL, bad header).
    #[error("invalid request to {url}: {message}")]
    InvalidRequest { url: String, message: String },

    /// Connection to the remote host failed.
    #[error("connection to {url} failed: {message}")]
    ConnectionFailed { url: String, message: String },

    /// The remote host answered with a non-success status.
    #[error("server returned non-200 status: {status}")]
    HttpStatus { status: u16 },

    /// The request did not complete in time.
    #[error("request to {url} timed out after {}ms", .after.as_millis())]
    Timeout { url: String, after: Duration },

    /// Generic network error.
    #[error("network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::InvalidRequest { .. } => "E_NET_REQUEST",
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

/// Classify a reqwest error into a [`NetworkError`].
pub fn classify_reqwest_error(url: &str, err: &reqwest::Error) -> NetworkError {
    if err.is_builder() {
        NetworkError::InvalidRequest {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if err.is_connect() {
        NetworkError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        NetworkError::HttpStatus {
            status: status.as_u16(),
        }
    } else {
        NetworkError::Other {
            message: err.to_string(),
        }
    }
}
