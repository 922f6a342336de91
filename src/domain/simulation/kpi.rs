//! KPI trackers: append-only value histories, one per company KPI.

use serde::{Deserialize, Serialize};

use crate::domain::company::KpiDefinition;
use crate::domain::foundation::Timestamp;

/// One recorded KPI value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KpiSample {
    pub timestamp: Timestamp,
    pub value: f64,
}

/// History of a single KPI.
///
/// # Invariants
///
/// - `history` is append-only and never empty once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTracker {
    name: String,
    history: Vec<KpiSample>,
}

impl KpiTracker {
    /// Starts a tracker with one sample of `initial` taken now.
    pub fn new(name: impl Into<String>, initial: f64) -> Self {
        Self {
            name: name.into(),
            history: vec![KpiSample {
                timestamp: Timestamp::now(),
                value: initial,
            }],
        }
    }

    /// Starts a tracker from a company KPI definition.
    pub fn for_definition(definition: &KpiDefinition) -> Self {
        Self::new(definition.name.clone(), definition.current)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in recording order.
    pub fn history(&self) -> &[KpiSample] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn latest(&self) -> Option<&KpiSample> {
        self.history.last()
    }

    pub fn latest_value(&self) -> Option<f64> {
        self.latest().map(|sample| sample.value)
    }

    /// Appends a sample taken now.
    pub fn record(&mut self, value: f64) -> KpiSample {
        self.record_at(Timestamp::now(), value)
    }

    /// Appends a sample with an explicit timestamp.
    pub fn record_at(&mut self, timestamp: Timestamp, value: f64) -> KpiSample {
        let sample = KpiSample { timestamp, value };
        self.history.push(sample);
        sample
    }

    /// Chart points as `(date label, value)`, oldest first.
    pub fn series(&self) -> Vec<(String, f64)> {
        self.history
            .iter()
            .map(|sample| (sample.timestamp.short_date(), sample.value))
            .collect()
    }
}
