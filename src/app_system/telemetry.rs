use tracing_subscriber::EnvFilter;

use crate::config::StoreConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `log_filter` applies.
///
/// ```bash
/// RUST_LOG=debug cargo run                  # everything at debug
/// RUST_LOG=storefront::store_actor=debug    # only the store service
/// ```
pub fn setup_tracing(config: &StoreConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
