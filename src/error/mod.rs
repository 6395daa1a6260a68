//! Error handling for the relay.
//!
//! Errors fall into three kinds:
//!
//! | Kind | Raised by | Fatal |
//! |------|-----------|-------|
//! | Connect | opening the upstream stream | Yes |
//! | Stream | reading the upstream stream | Yes |
//! | Delivery | forwarding a payload to the target | No |
//!
//! Lines that match no recognized SSE field are not errors; the parser drops
//! them.

mod network;
mod stream;

pub use network::{classify_reqwest_error, NetworkError};
pub use stream::StreamError;

use thiserror::Error;

/// Result alias used across the relay.
pub type RelayResult<T> = Result<T, RelayError>;

/// Unified error type for a relay session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The upstream stream could not be established.
    #[error("error making request: {0}")]
    Connect(#[source] NetworkError),

    /// The upstream stream failed after it was established.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// A payload could not be delivered to the forwarding target.
    #[error("forwarding to {url} failed: {source}")]
    Delivery {
        url: String,
        #[source]
        source: NetworkError,
    },
}

impl RelayError {
    /// Whether this error ends the session.
    ///
    /// Only delivery failures are survivable.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RelayError::Delivery { .. })
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RelayError::Connect(err) => err.error_code(),
            RelayError::Stream(err) => err.error_code(),
            RelayError::Delivery { .. } => "E_DELIVERY",
        }
    }
}

impl From<NetworkError> for RelayError {
    fn from(err: NetworkError) -> Self {
        RelayError::Connect(err)
    }
}
