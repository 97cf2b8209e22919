//! Tracing setup for test binaries
//!
//! Doubles only emit `tracing` events. Tests that want to see them call
//! [`init`] once; later calls are no-ops.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install a fmt subscriber that writes through the test harness
pub fn init(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
