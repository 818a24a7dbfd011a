use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default number of periods (weeks, months or years) scanned before giving up.
pub const DEFAULT_MAX_PERIODS: u32 = 1000;

/// Default tracing filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub evaluation: EvaluationSettings,
    pub logging: LoggingConfig,
}

/// Knobs for occurrence evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    /// Upper bound on periods scanned while searching for the next occurrence.
    /// Rules that can never match (e.g. February 30th) stop here.
    pub max_periods: u32,
    /// Drop a computed occurrence that falls after the UNTIL date. When false,
    /// UNTIL is only checked against "now".
    pub clamp_to_until: bool,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
            clamp_to_until: true,
        }
    }
}

impl EvaluationSettings {
    /// ## Summary
    /// Checks that the settings can drive an evaluation.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if `max_periods` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_periods == 0 {
            return Err(CoreError::InvalidConfiguration(
                "evaluation.max_periods must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `cadence.toml` into a `Settings`.
    ///
    /// Environment variables use the `CADENCE_` prefix and `__` between
    /// sections, e.g. `CADENCE_EVALUATION__MAX_PERIODS=200`.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("evaluation.max_periods", DEFAULT_MAX_PERIODS)?
            .set_default("evaluation.clamp_to_until", true)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?
            // TOML file
            .add_source(config::File::with_name("cadence.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()
            .map_err(|e| CoreError::ConfigError(e.to_string()))?;

        settings.evaluation.validate()?;
        Ok(settings)
    }
}

impl EvaluationSettings {
    /// ## Summary
    /// Loads only the evaluation section of the configuration.
    ///
    /// ## Errors
    /// Returns an error if loading or validating the configuration fails.
    pub fn load() -> Result<Self> {
        Ok(load_config()?.evaluation)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
