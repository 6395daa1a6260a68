//! Upstream connection lifecycle and the read-parse-forward loop.

use std::time::Duration;

use crate::config::RelayConfig;
use crate::error::{NetworkError, RelayError, RelayResult};
use crate::traits::{Headers, HttpClient, Reporter};

use super::forwarder::{FrameOutcome, Forwarder};
use super::session::StreamSession;
use super::target::RelayTarget;

/// Media type requested from the event source.
pub const EVENT_STREAM: &str = "text/event-stream";

/// Connection manager state. `Closed` is terminal; there is no reconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Streaming,
    Closed,
}

/// Counts of what a session did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelaySummary {
    /// Data payloads POSTed to the target
    pub forwarded: usize,
    /// Data payloads that could not be delivered
    pub delivery_failures: usize,
    /// Data payloads printed to the console
    pub printed: usize,
    /// Comments received
    pub comments: usize,
}

impl RelaySummary {
    fn record(&mut self, outcome: &FrameOutcome) {
        match outcome {
            FrameOutcome::Forwarded { .. } => self.forwarded += 1,
            FrameOutcome::DeliveryFailed(_) => self.delivery_failures += 1,
            FrameOutcome::Printed => self.printed += 1,
            FrameOutcome::Commented => self.comments += 1,
            FrameOutcome::Ended => {}
        }
    }

    /// Total data frames handled, whatever happened to them.
    pub fn data_frames(&self) -> usize {
        self.forwarded + self.delivery_failures + self.printed
    }
}

/// Drives one relay session from connect to close.
///
/// # Example
///
/// ```ignore
/// use hookrelay::adapters::{ConsoleReporter, ReqwestHttpClient};
/// use hookrelay::config::RelayConfig;
/// use hookrelay::relay::Relay;
///
/// let mut relay = Relay::new(&RelayConfig::from_env(), ReqwestHttpClient::new(), ConsoleReporter);
/// let summary = relay.run().await?;
/// ```
pub struct Relay<C, R> {
    client: C,
    stream_url: String,
    forwarder: Forwarder<C, R>,
    state: ConnectionState,
}

impl<C: HttpClient + Clone, R: Reporter> Relay<C, R> {
    pub fn new(config: &RelayConfig, client: C, reporter: R) -> Self {
        let target = RelayTarget::new(config.forward_url.clone());
        Self::with_target(
            config.stream_url.clone(),
            target,
            config.forward_timeout,
            client,
            reporter,
        )
    }

    pub fn with_target(
        stream_url: impl Into<String>,
        target: RelayTarget,
        forward_timeout: Duration,
        client: C,
        reporter: R,
    ) -> Self {
        let forwarder = Forwarder::new(client.clone(), reporter, target, forward_timeout);
        Self {
            client,
            stream_url: stream_url.into(),
            forwarder,
            state: ConnectionState::Idle,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    fn transition(&mut self, next: ConnectionState) {
        tracing::debug!(from = ?self.state, to = ?next, "Connection state change");
        self.state = next;
    }

    /// Open the upstream stream.
    ///
    /// Anything but a 200 response closes the relay without streaming.
    pub async fn connect(&mut self) -> RelayResult<StreamSession> {
        if self.state != ConnectionState::Idle {
            return Err(RelayError::Connect(NetworkError::Other {
                message: format!("cannot connect from state {:?}", self.state),
            }));
        }
        self.transition(ConnectionState::Connecting);

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), EVENT_STREAM.to_string());

        let response = match self.client.get_stream(&self.stream_url, &headers).await {
            Ok(response) => response,
            Err(e) => {
                self.transition(ConnectionState::Closed);
                return Err(RelayError::Connect(e));
            }
        };

        if response.status != 200 {
            self.transition(ConnectionState::Closed);
            return Err(RelayError::Connect(NetworkError::HttpStatus {
                status: response.status,
            }));
        }

        tracing::info!(url = %self.stream_url, "Connected to event source");
        self.transition(ConnectionState::Streaming);
        Ok(StreamSession::new(response.body))
    }

    /// Connect and relay frames until the stream ends.
    ///
    /// Each frame is fully handled, including its forward, before the next
    /// one is read. Delivery failures are reported and skipped; connection
    /// and read errors end the session and are returned.
    pub async fn run(&mut self) -> RelayResult<RelaySummary> {
        let mut session = self.connect().await?;
        let mut summary = RelaySummary::default();

        let result = loop {
            match session.next_frame().await {
                Some(Ok(frame)) => {
                    let outcome = self.forwarder.handle(&frame).await;
                    summary.record(&outcome);
                    if outcome == FrameOutcome::Ended {
                        break Ok(summary);
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(code = e.error_code(), "Stream failed: {}", e);
                    break Err(RelayError::Stream(e));
                }
                None => break Ok(summary),
            }
        };

        session.close();
        self.transition(ConnectionState::Closed);
        if let Ok(summary) = &result {
            tracing::info!(
                forwarded = summary.forwarded,
                failed = summary.delivery_failures,
                printed = summary.printed,
                comments = summary.comments,
                "Relay session finished"
            );
        }
        result
    }
}
