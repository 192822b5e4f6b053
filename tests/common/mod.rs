//! Shared setup for the integration suites.

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber for this test binary.
///
/// The level comes from `RUST_LOG`, quiet (`warn`) by default, and output
/// goes through the test writer so cargo captures it per test. Safe to call
/// from every test; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}
