//! Structured logging.
//!
//! # Responsibilities
//! - Build the logger handed to each component at construction
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Components hold an explicit `Dispatch` instead of relying on a global
//! - `RUST_LOG` takes precedence over the configured level

use tracing::Dispatch;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use crate::config::ObservabilityConfig;

fn default_directives(level: &str) -> String {
    format!("pingpong={level},tower_http={level}")
}

/// Build a logger writing human-readable lines to stdout.
pub fn build_logger(config: &ObservabilityConfig) -> Dispatch {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.log_level)));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.ansi));

    Dispatch::new(subscriber)
}

/// Also route events from code that has no injected logger (hyper, tower-http).
pub fn install_global(logger: &Dispatch) {
    if tracing::dispatcher::set_global_default(logger.clone()).is_err() {
        tracing::dispatcher::with_default(logger, || {
            tracing::warn!("Global logger already installed, keeping existing one");
        });
    }
}
