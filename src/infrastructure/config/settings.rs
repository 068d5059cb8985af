//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application
//! settings. Configuration is loaded from a TOML file; every section is
//! optional and falls back to its defaults.
//!
//! # Example
//!
//! ```no_run
//! use purchase_ledger::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::application::forecast::ForecastConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Forecast window and model-fit settings.
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load configuration from a TOML file, or use defaults if it does not
    /// exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize logging from this configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        self.logging.validate()?;

        if self.forecast.window_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast.window_days",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.forecast.fit_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast.fit_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.forecast.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "forecast.max_iterations",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
