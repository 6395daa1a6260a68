//! HTTP client trait abstraction.
//!
//! Provides a trait-based abstraction over the two HTTP exchanges the relay
//! makes: the long-lived streaming GET to the event source, and the POST of
//! each payload to the forwarding target.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::collections::HashMap;
use std::pin::Pin;

use crate::error::NetworkError;

/// HTTP headers represented as a key-value map.
pub type Headers = HashMap<String, String>;

/// A live byte source, typically a streaming response body.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, NetworkError>> + Send>>;

/// Buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }
}

/// Response whose body is consumed incrementally.
pub struct StreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, read chunk by chunk
    pub body: ByteStream,
}

impl std::fmt::Debug for StreamResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Trait for HTTP client operations.
///
/// Implementations include the production reqwest-based client and an
/// in-memory mock for tests.
///
/// # Example
///
/// ```ignore
/// use hookrelay::traits::{Headers, HttpClient};
///
/// async fn open<C: HttpClient>(client: &C) -> Result<u16, NetworkError> {
///     let response = client.get_stream("http://localhost:8080/stream", &Headers::new()).await?;
///     Ok(response.status)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the body as a stream.
    ///
    /// The status is reported as-is; callers decide what counts as success.
    async fn get_stream(&self, url: &str, headers: &Headers)
        -> Result<StreamResponse, NetworkError>;

    /// Perform a POST request with a string body.
    async fn post(&self, url: &str, body: &str, headers: &Headers)
        -> Result<Response, NetworkError>;
}
