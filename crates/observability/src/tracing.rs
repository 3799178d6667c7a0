//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber: JSON lines on stdout, filtered via
/// `RUST_LOG` (falling back to `info`).
///
/// Calling this twice is harmless; the second `try_init` fails quietly.
pub fn init() {
    init_with_default_filter("info");
}

/// Like [`init`] but with an explicit fallback filter, for tests and tools
/// that want a different default verbosity.
pub fn init_with_default_filter(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_target(false)
        .try_init();
}
