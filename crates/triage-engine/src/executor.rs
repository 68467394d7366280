//! Statement execution shell.
//!
//! `StatementExecutor` is the seam between application code and the
//! classification engine: it opens a session, runs the statement, and turns
//! any driver-originated failure into a category-tagged report. Failures
//! with no driver error in their cause chain are not swallowed; they
//! propagate as [`EngineError`].

use triage_codes::ErrorCodeTable;
use triage_config::TriageConfig;
use triage_core::category::Category;

use crate::classify::ErrorClassifier;
use crate::error::EngineError;
use crate::extract::find_driver_error;
use crate::report::{Report, Reporter, StdoutReporter};
use crate::session::{Session, SessionFactory};

/// Terminal state of a single `execute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// The statement ran without error.
    Succeeded,
    /// A driver failure was classified and handed to the reporter.
    Reported(Category),
    /// A driver failure matched no category; nothing was reported.
    Swallowed,
}

/// Runs SQL statements and routes driver failures through classification.
///
/// Stateless between calls: each `execute` opens a fresh session from the
/// factory and drops it on every exit path. Instances can be shared across
/// threads when the factory and reporter are.
pub struct StatementExecutor<F, R> {
    factory: F,
    classifier: ErrorClassifier,
    reporter: R,
    verbose_unclassified: bool,
}

impl<F: SessionFactory, R: Reporter> StatementExecutor<F, R> {
    #[must_use]
    pub const fn new(factory: F, classifier: ErrorClassifier, reporter: R) -> Self {
        Self {
            factory,
            classifier,
            reporter,
            verbose_unclassified: false,
        }
    }

    /// Wire an executor from loaded configuration: the configured product
    /// picks the code set, the report section picks diagnostics verbosity.
    #[must_use]
    pub fn from_config(
        config: &TriageConfig,
        table: &ErrorCodeTable,
        factory: F,
        reporter: R,
    ) -> Self {
        Self {
            factory,
            classifier: ErrorClassifier::for_product(table, &config.database.product),
            reporter,
            verbose_unclassified: config.report.verbose_unclassified,
        }
    }

    /// The classifier this executor routes failures through.
    #[must_use]
    pub const fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Run one SQL statement.
    ///
    /// On success, returns [`ExecuteOutcome::Succeeded`] and no report is
    /// emitted. On a driver failure, bare or nested anywhere in the cause
    /// chain, the error is classified: classified categories produce one
    /// report line and [`ExecuteOutcome::Reported`]; unclassified driver
    /// errors produce only a diagnostic log line and
    /// [`ExecuteOutcome::Swallowed`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the failure carries no driver error at
    /// all (pool exhaustion, configuration, unrelated I/O).
    pub fn execute(&self, sql: &str) -> Result<ExecuteOutcome, EngineError> {
        let mut session = match self.factory.open_connection() {
            Ok(session) => session,
            Err(failure) => return self.resolve_failure(failure, EngineError::Connection),
        };
        match session.execute(sql) {
            Ok(()) => Ok(ExecuteOutcome::Succeeded),
            Err(failure) => self.resolve_failure(failure, EngineError::Statement),
        }
    }

    /// Classify and report the driver error inside `failure`, or hand the
    /// failure back wrapped in `wrap` when there is none.
    fn resolve_failure(
        &self,
        failure: anyhow::Error,
        wrap: fn(anyhow::Error) -> EngineError,
    ) -> Result<ExecuteOutcome, EngineError> {
        let Some(driver) = find_driver_error(&failure).cloned() else {
            return Err(wrap(failure));
        };

        let category = self.classifier.classify(&driver);
        if category.is_classified() {
            tracing::debug!(
                category = %category,
                code = driver.code,
                sqlstate = %driver.sqlstate,
                "classified driver failure"
            );
            self.reporter.report(&Report {
                category,
                message: driver.to_string(),
            });
            Ok(ExecuteOutcome::Reported(category))
        } else {
            if self.verbose_unclassified {
                tracing::warn!(
                    code = driver.code,
                    sqlstate = %driver.sqlstate,
                    product = self.classifier.product(),
                    "driver error matched no category"
                );
            } else {
                tracing::debug!(
                    code = driver.code,
                    sqlstate = %driver.sqlstate,
                    product = self.classifier.product(),
                    "driver error matched no category"
                );
            }
            Ok(ExecuteOutcome::Swallowed)
        }
    }
}

impl<F: SessionFactory> StatementExecutor<F, StdoutReporter> {
    /// Executor with the default sink: one line per classified failure on
    /// standard output.
    #[must_use]
    pub const fn with_stdout(factory: F, classifier: ErrorClassifier) -> Self {
        Self::new(factory, classifier, StdoutReporter)
    }
}
