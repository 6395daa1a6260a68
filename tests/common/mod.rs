#![allow(dead_code)]

//! Common test utilities for integration tests.
//!
//! Starts the in-process mock source and builds relays wired to real HTTP
//! with a recording reporter.

use std::net::SocketAddr;
use std::time::Duration;

use hookrelay::adapters::{RecordingReporter, ReqwestHttpClient};
use hookrelay::config::MockSourceConfig;
use hookrelay::mock_source::{start_mock_source, MockSource};
use hookrelay::relay::{Relay, RelayTarget};

/// Forward timeout used by integration relays.
pub const TEST_FORWARD_TIMEOUT: Duration = Duration::from_secs(5);

/// Start a mock source on a free local port with no pause between events.
pub async fn start_test_source() -> MockSource {
    start_mock_source(
        MockSourceConfig::new()
            .with_addr(SocketAddr::from(([127, 0, 0, 1], 0)))
            .with_interval(Duration::ZERO),
    )
    .await
    .expect("mock source should start")
}

/// A relay over real HTTP that records its reports.
pub fn test_relay(
    stream_url: &str,
    target: RelayTarget,
) -> (Relay<ReqwestHttpClient, RecordingReporter>, RecordingReporter) {
    let reporter = RecordingReporter::new();
    let relay = Relay::with_target(
        stream_url,
        target,
        TEST_FORWARD_TIMEOUT,
        ReqwestHttpClient::new(),
        reporter.clone(),
    );
    (relay, reporter)
}

/// Console lines expected after every payload has been handled.
pub fn closing_lines() -> Vec<String> {
    vec![
        "Received comment: Stream finished.".to_string(),
        "Server closed the connection.".to_string(),
    ]
}
