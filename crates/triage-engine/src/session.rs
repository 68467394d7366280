//! Session collaborator traits.
//!
//! The engine never talks to a driver directly. It consumes two narrow
//! interfaces: a factory that opens short-lived sessions, and the session's
//! single `execute` method. A session is released by dropping it; the
//! executor scopes each session to one `execute` call.

/// A short-lived database session able to run one SQL statement at a time.
///
/// The failure type is [`anyhow::Error`] so wrapping layers (pools,
/// transaction proxies) can stack arbitrary context on top of a
/// [`triage_core::driver::DriverError`]; the executor recovers the driver
/// error from anywhere in the chain.
pub trait Session {
    /// Execute a single SQL statement.
    ///
    /// # Errors
    ///
    /// Returns the driver failure, possibly wrapped. A
    /// [`triage_core::driver::DriverError`] anywhere in the cause chain is
    /// classified by the executor; anything else propagates to the caller.
    fn execute(&mut self, sql: &str) -> Result<(), anyhow::Error>;
}

/// Produces sessions on demand.
///
/// Implementations are expected to be cheap to call per statement; pooling
/// is the implementor's concern, not the engine's.
pub trait SessionFactory {
    type Session: Session;

    /// Open a session for a single statement.
    ///
    /// # Errors
    ///
    /// Returns the underlying acquisition failure (pool exhaustion,
    /// connectivity, configuration).
    fn open_connection(&self) -> Result<Self::Session, anyhow::Error>;
}
