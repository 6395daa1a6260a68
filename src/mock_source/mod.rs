//! Mock event source for exercising the relay locally.
//!
//! Serves `GET /stream` as `text/event-stream`: one `data: ` line per sample
//! notification, a pause after each, then a closing comment. The source can
//! be switched off, in which case `/stream` answers 503.

mod catalogue;

pub use catalogue::{sample_events, sample_payloads};

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use futures_util::stream;
use tokio::task::JoinHandle;

use crate::config::MockSourceConfig;

/// Comment line closing every mock stream.
pub const FINISHED_COMMENT: &str = "Stream finished.";

#[derive(Clone)]
struct MockSourceState {
    available: Arc<AtomicBool>,
    interval: Duration,
}

/// A running mock source.
pub struct MockSource {
    addr: SocketAddr,
    available: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl MockSource {
    /// Address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Full URL of the event stream endpoint.
    pub fn stream_url(&self) -> String {
        format!("http://{}/stream", self.addr)
    }

    /// Switch the stream endpoint on or off for later connections.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Wait for the server task to exit.
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            if !e.is_cancelled() {
                tracing::error!("Mock source task failed: {}", e);
            }
        }
    }

    /// Stop serving.
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Start the mock source on `config.addr` (port 0 picks a free port).
pub async fn start_mock_source(config: MockSourceConfig) -> color_eyre::Result<MockSource> {
    let available = Arc::new(AtomicBool::new(true));
    let state = MockSourceState {
        available: Arc::clone(&available),
        interval: config.interval,
    };

    let app = Router::new()
        .route("/stream", get(stream_handler))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    let addr = listener.local_addr()?;

    tracing::info!("Mock source listening on http://{}", addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Mock source error: {}", e);
        }
    });

    Ok(MockSource {
        addr,
        available,
        handle,
    })
}

/// Wire chunks for one connection, each flagged with whether a pause follows.
fn wire_chunks() -> Vec<(String, bool)> {
    let mut chunks: Vec<(String, bool)> = sample_payloads()
        .into_iter()
        .map(|payload| (format!("data: {}\n", payload), true))
        .collect();
    chunks.push((format!(":{}\n", FINISHED_COMMENT), false));
    chunks
}

async fn stream_handler(State(state): State<MockSourceState>) -> Response {
    if !state.available.load(Ordering::SeqCst) {
        tracing::debug!("Rejecting stream request, source switched off");
        return (StatusCode::SERVICE_UNAVAILABLE, "event source unavailable").into_response();
    }

    tracing::info!("Client connected to mock stream");

    let interval = state.interval;
    let chunks = stream::unfold(
        (wire_chunks().into_iter(), false),
        move |(mut chunks, pause)| async move {
            if pause && !interval.is_zero() {
                tokio::time::sleep(interval).await;
            }
            let (chunk, pause_after) = chunks.next()?;
            Some((Ok::<_, Infallible>(chunk), (chunks, pause_after)))
        },
    );

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(chunks),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sse::{FrameParser, SseFrame};

    #[test]
    fn test_wire_chunks_parse_back_to_catalogue() {
        let mut parser = FrameParser::new();
        let frames: Vec<_> = wire_chunks()
            .into_iter()
            .flat_map(|(chunk, _)| parser.push_bytes(chunk.as_bytes()))
            .collect();

        let mut expected: Vec<_> = sample_payloads().into_iter().map(SseFrame::data).collect();
        expected.push(SseFrame::comment(FINISHED_COMMENT));
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_pause_follows_each_event_only() {
        let pauses: Vec<_> = wire_chunks().into_iter().map(|(_, p)| p).collect();
        assert_eq!(pauses, vec![true, true, true, true, false]);
    }

    #[tokio::test]
    async fn test_serves_event_stream() {
        let source = start_mock_source(
            MockSourceConfig::new()
                .with_addr(SocketAddr::from(([127, 0, 0, 1], 0)))
                .with_interval(Duration::ZERO),
        )
        .await
        .unwrap();

        let response = reqwest::get(source.stream_url()).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["content-type"].to_str().unwrap(),
            "text/event-stream"
        );
        let body = response.text().await.unwrap();
        assert!(body.ends_with(":Stream finished.\n"));
        assert_eq!(body.lines().filter(|l| l.starts_with("data: ")).count(), 4);

        source.shutdown();
    }

    #[tokio::test]
    async fn test_switched_off_source_answers_503() {
        let source = start_mock_source(
            MockSourceConfig::new().with_addr(SocketAddr::from(([127, 0, 0, 1], 0))),
        )
        .await
        .unwrap();
        source.set_available(false);
        assert!(!source.is_available());

        let response = reqwest::get(source.stream_url()).await.unwrap();
        assert_eq!(response.status(), 503);

        source.shutdown();
    }
}
