use std::str::FromStr;

use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// ## Summary
    /// Builds the `EnvFilter` a host installs for this logging level.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if the level is not a valid filter directive.
    pub fn env_filter(&self) -> CoreResult<EnvFilter> {
        EnvFilter::try_new(self.level.as_str())
            .map_err(|e| CoreError::ConfigError(format!("invalid log level {:?}: {e}", self.level)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// IANA name of the zone floating date-times are interpreted in when the
    /// acting principal has no preference of its own.
    pub default_timezone: String,
}

impl ConversionConfig {
    /// ## Summary
    /// Resolves the configured default timezone.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the name is not an IANA zone.
    pub fn default_tz(&self) -> CoreResult<Tz> {
        Tz::from_str(&self.default_timezone)
            .map_err(|_e| CoreError::UnknownTimezone(self.default_timezone.clone()))
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            default_timezone: "UTC".to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("conversion.default_timezone", "UTC")?
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(
            level = %settings.logging.level,
            default_timezone = %settings.conversion.default_timezone,
            "Loaded configuration"
        );

        Ok(settings)
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
