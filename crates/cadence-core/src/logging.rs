//! Tracing subscriber bootstrap for binaries and tools embedding cadence.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// the configured level.
///
/// ## Errors
/// Returns `CoreError::LoggingError` if the level is not a valid filter
/// directive or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> CoreResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| CoreError::LoggingError(e.to_string()))?;

    tracing::debug!(level = %config.level, "Logging initialized");
    Ok(())
}
