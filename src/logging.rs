//! Tracing subscriber setup for binaries.
//!
//! The library itself only emits events; call [`init_tracing`] once at
//! process startup.

use crate::config::AppConfig;

/// Initialize tracing (logging) from the application config.
///
/// `RUST_LOG` takes precedence over the configured level. Events are written
/// to stderr because stdout carries the billing results, which callers pipe
/// as JSON.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
