use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_INSTANCES, DEFAULT_MAX_ITERATIONS};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

/// Hard limits applied to every expansion run.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExpansionConfig {
    /// Maximum number of candidate dates walked before giving up.
    pub max_iterations: usize,
    /// Maximum number of instances returned; extra instances are dropped.
    pub max_instances: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_instances: DEFAULT_MAX_INSTANCES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables (`CADENCE_EXPANSION__MAX_ITERATIONS`, ...) take precedence.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> CoreResult<Self> {
        let config = Self::builder()?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// ## Summary
    /// Returns a builder pre-populated with the default values of every setting.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be registered.
    pub fn builder() -> CoreResult<ConfigBuilder<DefaultState>> {
        let defaults = ExpansionConfig::default();

        Ok(Config::builder()
            .set_default(
                "expansion.max_iterations",
                u64::try_from(defaults.max_iterations).unwrap_or(u64::MAX),
            )?
            .set_default(
                "expansion.max_instances",
                u64::try_from(defaults.max_instances).unwrap_or(u64::MAX),
            )?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Deserializes and validates settings from an already built `Config`.
    ///
    /// ## Errors
    /// Returns an error if deserialization fails or a limit is zero.
    pub fn from_config(config: Config) -> CoreResult<Self> {
        let settings = config.try_deserialize::<Self>()?;
        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks that the expansion limits are usable.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if either limit is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.expansion.max_iterations == 0 {
            return Err(CoreError::ValidationError(
                "expansion.max_iterations must be positive".to_string(),
            ));
        }
        if self.expansion.max_instances == 0 {
            return Err(CoreError::ValidationError(
                "expansion.max_instances must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
