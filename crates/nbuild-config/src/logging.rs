//! Logging setup using the `tracing` ecosystem.
//!
//! # Example
//!
//! ```rust,no_run
//! use nbuild_config::{LoggingSettings, init_logger};
//!
//! init_logger(&LoggingSettings::default()).unwrap();
//! tracing::info!("Resolving closures");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};
use crate::settings::{LogFormat, LoggingSettings};

/// Filter used when neither the settings nor `RUST_LOG` specify one.
pub const DEFAULT_FILTER: &str = "warn,nbuild_graph=info,nbuild_config=info";

/// Build the event filter for `settings`.
///
/// The level is determined in this order:
/// 1. `settings.level`
/// 2. `RUST_LOG` environment variable
/// 3. [`DEFAULT_FILTER`]
pub fn build_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    match settings.level.as_deref() {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| ConfigError::InvalidValue {
            field: "logging.level".to_string(),
            message: e.to_string(),
        }),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global tracing subscriber.
///
/// Call once, before any logging occurs.
///
/// # Errors
///
/// Fails on invalid filter directives or if a global subscriber is already set.
pub fn init_logger(settings: &LoggingSettings) -> Result<()> {
    let filter = build_filter(settings)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_target(settings.target)
                    .with_level(true)
                    .with_ansi(settings.color)
                    .compact(),
            )
            .try_init(),
        LogFormat::Full => registry
            .with(
                fmt::layer()
                    .with_target(settings.target)
                    .with_level(true)
                    .with_ansi(settings.color),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::Logger(e.to_string()))
}
