//! Tracing setup shared by the demos.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Demos call [`init`] so that
//! `PATTERNBOOK_LOG=debug cargo run --example command` shows what each
//! pattern is doing under the hood.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (EnvFilter syntax).
pub const LOG_ENV_VAR: &str = "PATTERNBOOK_LOG";

/// Filter used when the environment variable is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `PATTERNBOOK_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr subscriber. Safe to call more than once.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
