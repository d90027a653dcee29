//! Tracing initialization and subscriber setup.

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for a host application.
///
/// Installs an env-filtered fmt layer writing to stderr. The level comes from
/// `config.trace_level`, defaulting to `"info"`; the filter string accepts the
/// usual `tracing_subscriber` directive syntax (for example
/// `"mediashelf=debug"`).
///
/// Idempotent: only the first call takes effect, later calls are ignored
/// rather than panicking on the already-installed global subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        );

    let _ = subscriber.try_init();
}
