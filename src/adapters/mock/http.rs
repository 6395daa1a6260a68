//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses, chunked stream bodies, errors, or requests that never finish.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::NetworkError;
use crate::traits::{Headers, HttpClient, Response, StreamResponse};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a buffered response
    Success(Response),
    /// Return a streaming body delivered chunk by chunk
    Stream {
        status: u16,
        chunks: Vec<Result<Bytes, NetworkError>>,
    },
    /// Fail before any response is produced
    Error(NetworkError),
    /// Never complete
    Hang,
}

impl MockResponse {
    /// A 200 stream whose chunks are the given strings.
    pub fn stream<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockResponse::Stream {
            status: 200,
            chunks: chunks
                .into_iter()
                .map(|c| Ok(Bytes::from(c.into())))
                .collect(),
        }
    }

    /// An empty response with the given status.
    pub fn status(status: u16) -> Self {
        MockResponse::Success(Response::new(status, Bytes::new()))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are matched by exact URL, then by URL prefix, then the default.
/// Clones share configuration and recorded requests.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Recorded requests with the given method.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        lock(&self.requests)
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        let responses = lock(&self.responses);

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get_stream(
        &self,
        url: &str,
        headers: &Headers,
    ) -> Result<StreamResponse, NetworkError> {
        self.record_request("GET", url, headers, None);

        match self.get_response(url) {
            Some(MockResponse::Stream { status, chunks }) => Ok(StreamResponse {
                status,
                body: Box::pin(futures::stream::iter(chunks)),
            }),
            Some(MockResponse::Success(response)) => Ok(StreamResponse {
                status: response.status,
                body: Box::pin(futures::stream::iter(vec![Ok::<_, NetworkError>(
                    response.body,
                )])),
            }),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Hang) => futures::future::pending().await,
            None => Err(NetworkError::Other {
                message: format!("No mock response for URL: {}", url),
            }),
        }
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, NetworkError> {
        self.record_request("POST", url, headers, Some(body.to_string()));

        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Stream { .. }) => Err(NetworkError::Other {
                message: "Stream response on non-stream request".to_string(),
            }),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Hang) => futures::future::pending().await,
            None => Err(NetworkError::Other {
                message: format!("No mock response for URL: {}", url),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_stream_chunks_in_order() {
        let client = MockHttpClient::new();
        client.set_response(
            "http://source/stream",
            MockResponse::stream(["chunk1", "chunk2", "chunk3"]),
        );

        let response = client
            .get_stream("http://source/stream", &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 200);

        let chunks: Vec<_> = response
            .body
            .map(|c| c.unwrap())
            .collect()
            .await;
        assert_eq!(
            chunks,
            vec![
                Bytes::from("chunk1"),
                Bytes::from("chunk2"),
                Bytes::from("chunk3")
            ]
        );
    }

    #[tokio::test]
    async fn test_post_records_body() {
        let client = MockHttpClient::new();
        client.set_response("http://target/hook", MockResponse::status(201));

        let response = client
            .post("http://target/hook", r#"{"name": "test"}"#, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);

        let requests = client.requests_with_method("POST");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://target/hook");
        assert_eq!(requests[0].body, Some(r#"{"name": "test"}"#.to_string()));
    }

    #[tokio::test]
    async fn test_no_response_configured() {
        let client = MockHttpClient::new();
        let result = client.post("http://target/missing", "{}", &Headers::new()).await;
        assert!(matches!(result, Err(NetworkError::Other { .. })));
    }

    #[tokio::test]
    async fn test_prefix_and_default_match() {
        let client = MockHttpClient::new();
        client.set_response("http://target", MockResponse::status(200));
        client.set_default_response(MockResponse::status(404));

        let prefixed = client
            .post("http://target/a/b", "", &Headers::new())
            .await
            .unwrap();
        assert_eq!(prefixed.status, 200);

        let fallback = client
            .post("http://elsewhere", "", &Headers::new())
            .await
            .unwrap();
        assert_eq!(fallback.status, 404);
    }

    #[tokio::test]
    async fn test_hang_never_completes() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Hang);

        let result = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            client.post("http://target", "{}", &Headers::new()),
        )
        .await;
        assert!(result.is_err());
        assert_eq!(client.get_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_requests() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::status(200));
        let cloned = client.clone();

        cloned.post("http://target", "{}", &Headers::new()).await.unwrap();

        assert_eq!(client.get_requests().len(), 1);
        client.clear_requests();
        assert!(cloned.get_requests().is_empty());
    }
}
