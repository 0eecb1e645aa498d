use tracing_subscriber::EnvFilter;

use crate::adapter::config::AppConfig;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `log_level`; an
/// unparseable directive falls back to `info`.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(log_level = %config.log_level, "tracing initialized");
}
