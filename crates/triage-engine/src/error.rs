//! Engine error types.

use thiserror::Error;

/// Failures `execute` cannot localize into a report.
///
/// Driver-originated failures never surface here; they are classified and
/// reported instead. These variants carry everything else: exhausted pools,
/// configuration problems, I/O faults with no driver error in their cause
/// chain.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The session factory could not produce a connection.
    #[error("Failed to open database session: {0}")]
    Connection(anyhow::Error),

    /// The statement failed with no driver error anywhere in its cause
    /// chain. The original failure is carried unchanged.
    #[error("Statement failed outside the driver: {0}")]
    Statement(anyhow::Error),
}
