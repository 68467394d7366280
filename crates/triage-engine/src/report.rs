//! Report values and the reporting sink.

use triage_core::category::Category;

/// A classified failure, ready for the reporting sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub category: Category,
    /// The driver error's rendered form (code, SQLSTATE, message).
    pub message: String,
}

/// Sink for classified failure reports.
pub trait Reporter {
    fn report(&self, report: &Report);
}

/// Default sink: one line per classified failure on standard output.
///
/// Output format is fixed: `<label>: <message>`, e.g.
/// `Duplicate Exception: error code [23505]; SQL state [23505]; ...`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&self, report: &Report) {
        // Unclassified carries no label and prints nothing.
        if let Some(label) = report.category.label() {
            println!("{label}: {}", report.message);
        }
    }
}
