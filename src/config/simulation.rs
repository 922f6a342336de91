//! Simulation settings

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::domain::foundation::Fraction;
use crate::domain::model::DEFAULT_INITIAL_SCORE;

/// Knobs for a simulation session
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationSettings {
    /// Score every element starts with when the model is initialized
    #[serde(default = "default_initial_score")]
    pub initial_score: f64,

    /// Record a drifted value for every KPI after each decision
    #[serde(default = "default_true")]
    pub kpi_drift_enabled: bool,

    /// Largest relative KPI move per drift step (0.1 = ±10%)
    #[serde(default = "default_kpi_drift_ratio")]
    pub kpi_drift_ratio: f64,

    /// Add generated decisions and tensions once the model is initialized
    #[serde(default = "default_true")]
    pub auto_generate_scenarios: bool,

    /// Seed for KPI drift; random when unset
    pub rng_seed: Option<u64>,

    /// YAML scenario pack loaded alongside the generated scenarios
    pub scenario_pack: Option<PathBuf>,
}

fn default_initial_score() -> f64 {
    DEFAULT_INITIAL_SCORE
}

fn default_true() -> bool {
    true
}

fn default_kpi_drift_ratio() -> f64 {
    0.1
}

impl SimulationSettings {
    /// The initial score as a bounded value.
    pub fn initial_fraction(&self) -> Fraction {
        Fraction::new(self.initial_score)
    }

    /// Validate simulation settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&self.initial_score) {
            return Err(ValidationError::InvalidInitialScore(self.initial_score));
        }
        if !(0.0..=1.0).contains(&self.kpi_drift_ratio) {
            return Err(ValidationError::InvalidDriftRatio(self.kpi_drift_ratio));
        }
        if matches!(&self.scenario_pack, Some(path) if path.as_os_str().is_empty()) {
            return Err(ValidationError::EmptyScenarioPackPath);
        }
        Ok(())
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            initial_score: default_initial_score(),
            kpi_drift_enabled: true,
            kpi_drift_ratio: default_kpi_drift_ratio(),
            auto_generate_scenarios: true,
            rng_seed: None,
            scenario_pack: None,
        }
    }
}
