//! # triage-engine
//!
//! The classification engine and execution shell for sqltriage.
//!
//! [`classify::ErrorClassifier`] resolves the configured database product
//! against the code table and maps driver errors to
//! [`triage_core::category::Category`] values.
//! [`executor::StatementExecutor`] drives a SQL statement through an
//! injected session factory, recovers a driver error nested anywhere in a
//! failure's cause chain, and routes it through classification to a
//! [`report::Reporter`].
//!
//! Everything here is synchronous and stateless between calls; the only
//! blocking point is the session's own `execute`.

pub mod classify;
pub mod error;
pub mod executor;
pub mod extract;
pub mod report;
pub mod session;

#[cfg(test)]
mod test_support;
