//! Routing of frames to the forwarding target or the console.

use std::time::Duration;

use crate::error::{NetworkError, RelayError};
use crate::sse::{FrameKind, SseFrame};
use crate::traits::{Headers, HttpClient, Report, Reporter};

use super::target::RelayTarget;

/// What handling one frame amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Payload POSTed; the target answered with `status`
    Forwarded { status: u16 },
    /// Payload could not be delivered; the session continues
    DeliveryFailed(RelayError),
    /// Payload printed to the console
    Printed,
    /// Comment printed to the console
    Commented,
    /// Stream completion reported
    Ended,
}

/// Applies the routing policy to each frame.
///
/// Every `Data` or `Comment` frame produces exactly one observable effect,
/// either an outbound POST or a console report. Comments are never forwarded.
pub struct Forwarder<C, R> {
    client: C,
    reporter: R,
    target: RelayTarget,
    timeout: Duration,
}

impl<C: HttpClient, R: Reporter> Forwarder<C, R> {
    pub fn new(client: C, reporter: R, target: RelayTarget, timeout: Duration) -> Self {
        Self {
            client,
            reporter,
            target,
            timeout,
        }
    }

    /// Handle one frame.
    pub async fn handle(&self, frame: &SseFrame) -> FrameOutcome {
        match frame.kind {
            FrameKind::Data => match self.target.forward_url() {
                Some(url) => self.forward(url, &frame.payload).await,
                None => {
                    self.reporter.report(Report::Message(frame.payload.clone()));
                    FrameOutcome::Printed
                }
            },
            FrameKind::Comment => {
                self.reporter.report(Report::Comment(frame.payload.clone()));
                FrameOutcome::Commented
            }
            FrameKind::End => {
                self.reporter.report(Report::StreamClosed);
                FrameOutcome::Ended
            }
        }
    }

    /// POST one payload, bounded by the forward timeout.
    ///
    /// Only transport-level failure counts; the response status is logged and
    /// otherwise ignored.
    async fn forward(&self, url: &str, payload: &str) -> FrameOutcome {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let result =
            tokio::time::timeout(self.timeout, self.client.post(url, payload, &headers)).await;

        let source = match result {
            Ok(Ok(response)) => {
                tracing::debug!(url, status = response.status, "Forwarded payload");
                return FrameOutcome::Forwarded {
                    status: response.status,
                };
            }
            Ok(Err(e)) => e,
            Err(_) => NetworkError::Timeout {
                url: url.to_string(),
                after: self.timeout,
            },
        };

        tracing::warn!(url, code = source.error_code(), "Forwarding failed: {}", source);
        self.reporter.report(Report::DeliveryFailed {
            url: url.to_string(),
            reason: source.to_string(),
        });

        FrameOutcome::DeliveryFailed(RelayError::Delivery {
            url: url.to_string(),
            source,
        })
    }
}
