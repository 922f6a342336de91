//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber could not be installed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Initial score must be between 0 and 1, got {0}")]
    InvalidInitialScore(f64),

    #[error("KPI drift ratio must be between 0 and 1, got {0}")]
    InvalidDriftRatio(f64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Scenario pack path must not be empty")]
    EmptyScenarioPackPath,
}
