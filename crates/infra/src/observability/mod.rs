//! Observability infrastructure
//!
//! Installs the process-wide `tracing` subscriber. Events go to stderr so
//! that the interactive front-end owns stdout.

use roster_domain::{LoggingConfig, Result, RosterError};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the event filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber: plain text, or JSON lines when
/// `config.json` is set.
///
/// # Errors
/// `RosterError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let installed = if config.json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)).try_init()
    };

    installed
        .map_err(|e| RosterError::Internal(format!("failed to install tracing subscriber: {e}")))
}
