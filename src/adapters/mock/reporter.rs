//! Recording reporter for tests.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Report, Reporter};

/// Reporter that keeps every report in memory.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<Report>> {
        self.reports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All reports received so far, in order.
    pub fn reports(&self) -> Vec<Report> {
        self.log().clone()
    }

    /// Reports rendered as the console would print them.
    pub fn lines(&self) -> Vec<String> {
        self.reports().iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, report: Report) {
        self.log().push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let reporter = RecordingReporter::new();
        let shared = reporter.clone();

        shared.report(Report::Comment("hello".to_string()));
        shared.report(Report::StreamClosed);

        assert_eq!(
            reporter.lines(),
            vec![
                "Received comment: hello".to_string(),
                "Server closed the connection.".to_string()
            ]
        );
    }
}
