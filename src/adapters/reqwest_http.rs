//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client, implementing the
//! [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;
use futures_util::StreamExt;

use crate::error::{classify_reqwest_error, NetworkError};
use crate::traits::{Headers, HttpClient, Response, StreamResponse};

/// HTTP client implementation using reqwest.
///
/// The default client sets no overall request timeout, since the upstream
/// event stream stays open indefinitely. Bounded waits are applied by the
/// caller where they are wanted.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get_stream(
        &self,
        url: &str,
        headers: &Headers,
    ) -> Result<StreamResponse, NetworkError> {
        let builder = Self::apply_headers(self.client.get(url), headers);

        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(url, &e))?;

        let status = response.status().as_u16();
        let body = response.bytes_stream().map(|result| {
            result.map_err(|e| NetworkError::Other {
                message: e.to_string(),
            })
        });

        Ok(StreamResponse {
            status,
            body: Box::pin(body),
        })
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, NetworkError> {
        let builder = self.client.post(url).body(body.to_string());
        let builder = Self::apply_headers(builder, headers);

        let response = builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(url, &e))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify_reqwest_error(url, &e))?;

        Ok(Response::new(status, body))
    }
}
