//! Diagnostic logging setup.
//!
//! Engine and command diagnostics go through `tracing`. The subscriber writes to
//! stderr so that command output on stdout stays machine-readable. Verbosity is
//! controlled with `RUST_LOG` and defaults to warnings only.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Later calls are ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
