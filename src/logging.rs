//! Tracing setup
//!
//! Logs go to stderr so they never mix with the alternate screen; redirect
//! stderr to a file to keep them.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();

    if result.is_ok() {
        tracing::debug!("Tracing initialized at level '{}'", level);
    }
}
