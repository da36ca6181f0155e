//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "ISSUEBOARD_LOG";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("failed to initialize tracing subscriber: {0}")]
    Install(String),
}

/// Builds the log filter.
///
/// A valid, non-empty `ISSUEBOARD_LOG` wins; otherwise the configured level
/// applies.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when the configured level does
/// not parse.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    let override_directives = std::env::var(LOG_ENV_VAR).ok();
    filter_from(override_directives.as_deref(), config)
}

fn filter_from(
    override_directives: Option<&str>,
    config: &LoggingConfig,
) -> Result<EnvFilter, TelemetryError> {
    override_directives
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(
            || EnvFilter::try_new(config.level.as_str()).map_err(TelemetryError::from),
            Ok,
        )
}

/// Installs a global fmt subscriber filtered by [`env_filter`].
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}
