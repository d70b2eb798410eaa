use std::env;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence when present. Otherwise `FINGURU_DEBUG=true`
/// selects the `debug` level and anything else falls back to `info`.
pub fn init_logger() {
    let finguru_debug = env::var("FINGURU_DEBUG").unwrap_or_else(|_| "false".to_string());

    let default_level = if finguru_debug == "true" {
        "debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a second call (tests, embedded use) keeps the first subscriber
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
