//! Tracing subscriber setup for the marketplace core.

use crate::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured log level is applied
/// to this crate and sqlx is kept at `warn`. Safe to call more than once:
/// later calls leave the existing subscriber in place.
pub fn init(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("coursepay_backend={},sqlx=warn", config.log_level).into()
    });

    if config.is_production() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
