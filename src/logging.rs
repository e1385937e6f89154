use crate::config::AppConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stdout;
/// `use_json` switches to the JSON formatter for log shippers.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let layer = fmt::layer().json().with_target(true);
        registry.with(layer).init();
    } else {
        let layer = fmt::layer().with_target(false);
        registry.with(layer).init();
    }
}
