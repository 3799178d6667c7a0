//! Tracing and logging setup shared by the ledgerd binary and tests.

pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init();
}
