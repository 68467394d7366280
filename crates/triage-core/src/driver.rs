//! The driver error shape consumed by the classification engine.

use thiserror::Error;

/// A failure originating in the relational driver.
///
/// Carries the vendor error code and SQLSTATE the classification table is
/// keyed on, plus the driver's message for reporting. Implements
/// [`std::error::Error`] so it can sit anywhere in a cause chain and be
/// recovered by the executor's extraction walk.
///
/// Either identifier may be absent: a zero `code` or an empty `sqlstate`
/// simply never matches a table entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error code [{code}]; SQL state [{sqlstate}]; {message}")]
pub struct DriverError {
    /// Vendor-assigned error code. Zero when the driver reports none.
    pub code: i32,

    /// Five-character SQLSTATE, or empty when the driver reports none.
    pub sqlstate: String,

    /// Driver message, carried through opaquely into reports.
    pub message: String,
}

impl DriverError {
    #[must_use]
    pub fn new(code: i32, sqlstate: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            sqlstate: sqlstate.into(),
            message: message.into(),
        }
    }

    /// Decimal rendering of the vendor code, the form the code table stores.
    ///
    /// Negative codes keep their sign (`-803`); some vendors use negative
    /// code spaces.
    #[must_use]
    pub fn code_string(&self) -> String {
        self.code.to_string()
    }
}
