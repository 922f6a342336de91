//! Simulator configuration module
//!
//! Type-safe configuration loading using the `config` and `dotenvy` crates.
//! Environment variables use the `SEVEN_S` prefix and `__` between nested
//! keys. An optional file (TOML, YAML or JSON) can supply a base layer that
//! the environment then overrides.
//!
//! # Example
//!
//! ```no_run
//! use seven_s_sim::config::{init_tracing, SimConfig};
//!
//! let config = SimConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod error;
mod logging;
mod simulation;

pub use error::{ConfigError, ValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use simulation::SimulationSettings;

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SEVEN_S";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimConfig {
    /// Session behaviour (initial score, KPI drift, scenario generation)
    #[serde(default)]
    pub simulation: SimulationSettings,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SEVEN_S` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SEVEN_S__SIMULATION__INITIAL_SCORE=0.6` -> `simulation.initial_score = 0.6`
    /// - `SEVEN_S__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables on top
    ///
    /// The file format is inferred from its extension.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.simulation.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    fn environment() -> config::Environment {
        config::Environment::default()
            .prefix(ENV_PREFIX)
            .separator("__")
    }
}
