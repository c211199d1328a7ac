use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Builds the log filter from RUST_LOG, or from `default_log_settings` when RUST_LOG is unset or unparsable.
pub fn log_filter(default_log_settings: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_settings))
}

/// Installs the global tracing subscriber. Safe to call more than once: later calls are no-ops.
pub fn setup_logging(default_log_settings: &str) {
    let installed = tracing_subscriber::registry()
        .with(log_filter(default_log_settings))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already installed; keeping it");
    }
}
