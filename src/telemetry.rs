//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when it parses, otherwise from
/// `config.log_level`. `config.log_format` selects human-readable (`text`) or
/// one JSON object per line (`json`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = Registry::default().with(env_filter);

    if config.log_format == "json" {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()
            .context("Failed to install JSON tracing subscriber")?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .try_init()
            .context("Failed to install tracing subscriber")?;
    }

    Ok(())
}
