//! Logging setup
//!
//! Installs the process-wide `tracing` subscriber from `LoggingConfig`.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Returns `false` when a subscriber was already installed, so calling this
/// more than once (tests, embedding) is harmless.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
