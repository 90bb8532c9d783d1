//! Tracing setup: structured logging for the whole workspace.

use tracing_subscriber::EnvFilter;

use carbonsense_core::config::defaults::DEFAULT_LOG_LEVEL;
use carbonsense_core::config::ObservabilityConfig;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CARBONSENSE_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `CARBONSENSE_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Later calls are no-ops.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .try_init();
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init();
}

/// Initialize from configuration. `CARBONSENSE_LOG` still takes precedence
/// over the configured level.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
