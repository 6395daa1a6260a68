//! Console reporter writing to the operator's terminal.

use crate::traits::{Report, Reporter};

/// Prints reports to stdout, and delivery diagnostics to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, report: Report) {
        if report.is_diagnostic() {
            eprintln!("{}", report);
        } else {
            println!("{}", report);
        }
    }
}
