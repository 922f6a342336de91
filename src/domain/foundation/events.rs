//! Event plumbing shared by every simulation event.
//!
//! Events are plain serde structs. `domain_event!` gives them a routing type
//! and the identity fields an envelope needs; `EventEnvelope` carries the
//! serialized payload to publishers.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::Timestamp;

/// Aggregate type stamped on simulation envelopes.
pub const SIMULATION_AGGREGATE: &str = "Simulation";

/// A fact recorded by the simulation.
pub trait DomainEvent: Send + Sync {
    /// Routing type ending in its schema version, e.g. "simulation.reset.v1".
    fn event_type(&self) -> &'static str;

    fn aggregate_id(&self) -> String;

    fn occurred_at(&self) -> Timestamp;

    fn event_id(&self) -> EventId;

    fn aggregate_type(&self) -> &'static str {
        SIMULATION_AGGREGATE
    }

    fn schema_version(&self) -> u32 {
        schema_version_of(self.event_type())
    }

    /// Serializes the event into a transport envelope.
    fn to_envelope(&self) -> Result<EventEnvelope, serde_json::Error>
    where
        Self: Serialize + Sized,
    {
        Ok(EventEnvelope {
            event_id: self.event_id(),
            event_type: self.event_type().to_string(),
            schema_version: self.schema_version(),
            aggregate_id: self.aggregate_id(),
            aggregate_type: self.aggregate_type().to_string(),
            occurred_at: self.occurred_at(),
            payload: serde_json::to_value(self)?,
            metadata: EventMetadata::default(),
        })
    }
}

/// Reads the `.vN` suffix of an event type; 1 when there is none.
fn schema_version_of(event_type: &str) -> u32 {
    event_type
        .rsplit_once(".v")
        .and_then(|(_, version)| version.parse().ok())
        .unwrap_or(1)
}

/// Implements `DomainEvent` for a simulation event struct.
///
/// The struct must have `event_id` and `simulation_id` fields. The time
/// field defaults to `occurred_at`.
///
/// ```ignore
/// domain_event!(DecisionMade, "simulation.decision_made.v1");
/// domain_event!(KpiUpdated, "simulation.kpi_updated.v1", occurred_at = recorded_at);
/// ```
#[macro_export]
macro_rules! domain_event {
    ($event:ident, $event_type:literal) => {
        $crate::domain_event!($event, $event_type, occurred_at = occurred_at);
    };
    ($event:ident, $event_type:literal, occurred_at = $time:ident) => {
        impl $crate::domain::foundation::DomainEvent for $event {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn aggregate_id(&self) -> String {
                self.simulation_id.to_string()
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$time
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.event_id.clone()
            }
        }
    };
}

pub use domain_event;

/// Unique identifier of one event instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Links between events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Event that triggered this one, e.g. the decision behind a KPI drift.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causation_id: Option<EventId>,
}

/// Serialized event as handed to publishers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    /// Routing key, e.g. "simulation.tension_resolved.v1".
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    #[serde(default)]
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Builds an envelope around an arbitrary JSON payload.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        let event_type = event_type.into();
        Self {
            event_id: EventId::new(),
            schema_version: schema_version_of(&event_type),
            event_type,
            aggregate_id: aggregate_id.into(),
            aggregate_type: aggregate_type.into(),
            occurred_at: Timestamp::now(),
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Records the event that caused this one.
    pub fn caused_by(mut self, cause: &EventId) -> Self {
        self.metadata.causation_id = Some(cause.clone());
        self
    }

    /// Decodes the payload back into its event struct.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}
