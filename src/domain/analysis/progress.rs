//! Progress summaries - how far the player is through the scenario, and
//! where each KPI stands against its target.

use serde::{Deserialize, Serialize};

use crate::domain::company::KpiDefinition;
use crate::domain::scenario::{Decision, Tension};
use crate::domain::simulation::KpiTracker;

use super::AlignmentCalculator;

/// Decisions made and tensions resolved so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationProgress {
    pub decisions_made: usize,
    pub decisions_total: usize,
    pub tensions_resolved: usize,
    pub tensions_total: usize,
}

impl SimulationProgress {
    pub fn of(decisions: &[Decision], tensions: &[Tension]) -> Self {
        Self {
            decisions_made: decisions.iter().filter(|d| d.is_made()).count(),
            decisions_total: decisions.len(),
            tensions_resolved: tensions.iter().filter(|t| t.resolved()).count(),
            tensions_total: tensions.len(),
        }
    }

    /// True once every decision is made and every tension resolved.
    pub fn all_addressed(&self) -> bool {
        self.decisions_made == self.decisions_total && self.tensions_resolved == self.tensions_total
    }

    /// Share of decisions and tensions addressed, 0.0 when there are none.
    pub fn completion(&self) -> f64 {
        let total = self.decisions_total + self.tensions_total;
        if total == 0 {
            return 0.0;
        }
        let done = self.decisions_made + self.tensions_resolved;
        AlignmentCalculator::round_to_hundredths(done as f64 / total as f64)
    }
}

/// Where one KPI stands against its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiProgress {
    pub name: String,
    pub unit: String,
    pub starting: f64,
    pub latest: f64,
    pub target: f64,
    /// Target minus latest value.
    pub gap: f64,
    pub samples: usize,
}

impl KpiProgress {
    /// Measures a tracker against its definition.
    ///
    /// An empty tracker reads as the definition's current value.
    pub fn measure(definition: &KpiDefinition, tracker: &KpiTracker) -> Self {
        let latest = tracker.latest_value().unwrap_or(definition.current);
        Self {
            name: definition.name.clone(),
            unit: definition.unit.clone(),
            starting: definition.current,
            latest,
            target: definition.target,
            gap: AlignmentCalculator::round_to_hundredths(definition.target - latest),
            samples: tracker.len(),
        }
    }

    /// Share of the starting gap closed so far; 1.0 when there was no gap.
    pub fn fraction_closed(&self) -> f64 {
        let initial_gap = self.target - self.starting;
        if initial_gap.abs() < f64::EPSILON {
            return 1.0;
        }
        ((self.latest - self.starting) / initial_gap).clamp(0.0, 1.0)
    }

    pub fn target_reached(&self) -> bool {
        if self.target >= self.starting {
            self.latest >= self.target
        } else {
            self.latest <= self.target
        }
    }
}
