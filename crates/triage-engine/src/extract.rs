//! Driver error recovery from wrapped failures.
//!
//! Pools and transaction layers routinely wrap the driver's failure in
//! their own error types before it reaches the executor. The chain is
//! walked once, outermost first, and the first driver error found wins.

use triage_core::driver::DriverError;

/// Upper bound on cause-chain links visited. Cyclic cause chains occur in
/// practice; the walk is bounded instead of tracking visited nodes.
const MAX_CHAIN_DEPTH: usize = 32;

/// First [`DriverError`] in `failure`'s cause chain, outermost to innermost.
///
/// The failure itself counts as the first link, so a bare driver error is
/// found immediately. Returns `None` when no link within
/// [`MAX_CHAIN_DEPTH`] is a driver error.
#[must_use]
pub fn find_driver_error(failure: &anyhow::Error) -> Option<&DriverError> {
    failure
        .chain()
        .take(MAX_CHAIN_DEPTH)
        .find_map(|cause| cause.downcast_ref::<DriverError>())
}
