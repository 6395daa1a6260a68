//! Operator console abstraction.
//!
//! Everything the relay tells the operator goes through a [`Reporter`], so
//! tests can capture the exact sequence of reports.

use std::fmt;

/// One operator-visible report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A data payload printed instead of forwarded
    Message(String),
    /// A comment received from the source
    Comment(String),
    /// The source closed the stream cleanly
    StreamClosed,
    /// A payload could not be delivered to the target
    DeliveryFailed { url: String, reason: String },
}

impl Report {
    /// Whether this report belongs on stderr rather than stdout.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Report::DeliveryFailed { .. })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Message(payload) => write!(f, "Received message: {}", payload),
            Report::Comment(text) => write!(f, "Received comment: {}", text),
            Report::StreamClosed => write!(f, "Server closed the connection."),
            Report::DeliveryFailed { reason, .. } => write!(f, "Forwarding error: {}", reason),
        }
    }
}

/// Sink for operator reports.
pub trait Reporter: Send + Sync {
    fn report(&self, report: Report);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        assert_eq!(
            Report::Message(r#"{"a":1}"#.to_string()).to_string(),
            r#"Received message: {"a":1}"#
        );
        assert_eq!(
            Report::Comment("Stream finished.".to_string()).to_string(),
            "Received comment: Stream finished."
        );
        assert_eq!(
            Report::StreamClosed.to_string(),
            "Server closed the connection."
        );
        assert_eq!(
            Report::DeliveryFailed {
                url: "http://localhost:3000".to_string(),
                reason: "connection refused".to_string(),
            }
            .to_string(),
            "Forwarding error: connection refused"
        );
    }

    #[test]
    fn test_only_delivery_failures_are_diagnostics() {
        assert!(!Report::Message(String::new()).is_diagnostic());
        assert!(!Report::Comment(String::new()).is_diagnostic());
        assert!(!Report::StreamClosed.is_diagnostic());
        assert!(Report::DeliveryFailed {
            url: String::new(),
            reason: String::new(),
        }
        .is_diagnostic());
    }
}
