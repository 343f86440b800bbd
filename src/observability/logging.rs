//! Structured logging.
//!
//! # Design Decisions
//! - `RUST_LOG` always wins; the configured level is the fallback
//! - Events go to standard output in the default fmt layout

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `log_level` applies to this crate's own events; tower-http's
/// per-request traces are enabled alongside them.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "xiv_dev_proxy={log_level},tower_http=debug"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
