//! Logging setup for `bench_compare`.
//!
//! All log output goes to stderr so the report on stdout stays clean.
//! `RUST_LOG` takes precedence over the verbosity flags when set.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

/// Map `-v`/`-q` flags to a default filter directive.
#[must_use]
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<(), TryInitError> {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
}

/// Install a subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}
