//! Diagnostic logging to stderr via `tracing`.
//!
//! Silent at the default level; `RUST_LOG=vault_keys=debug` shows pipeline
//! steps. Plaintext and values are never logged.

use crate::constants;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
