use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default directives used by the API server when RUST_LOG is not set.
pub const DEFAULT_LOG_SETTINGS: &str = "api_geo=debug,core_geo=debug,tower_http=debug";

/// Sets the logging (tracing) level using RUST_LOG, falling back to the supplied default log settings.
///
/// Safe to call more than once: only the first call installs the subscriber.
pub fn setup_logging(default_log_settings: &str) {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_settings.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
