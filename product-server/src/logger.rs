//! Logging setup

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "product_server=info,tower_http=info";

/// Initialize the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_logger() {
    init_logger_with_filter(DEFAULT_FILTER);
}

pub fn init_logger_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
