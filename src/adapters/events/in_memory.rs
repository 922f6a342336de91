//! In-memory event bus.
//!
//! Keeps every published envelope in order and dispatches it to the handlers
//! subscribed to its event type. Used by the session by default and by tests
//! to assert on what was published.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, SimulationId};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// A poisoned lock is recovered rather than propagated; the recorded
/// envelopes stay readable after a handler panics.
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(Vec::new()),
        }
    }

    /// All envelopes in publication order.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Envelopes with the given event type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Envelopes emitted by one simulation.
    pub fn events_for_simulation(&self, simulation_id: SimulationId) -> Vec<EventEnvelope> {
        let id = simulation_id.to_string();
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == id)
            .collect()
    }

    /// Event types in publication order.
    pub fn event_types(&self) -> Vec<String> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|e| e.event_type.clone())
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    /// Forgets every recorded envelope; subscriptions are kept.
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn handlers_for(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());

        // Handlers are cloned out so no lock is held across an await.
        let mut failures = Vec::new();
        for handler in self.handlers_for(&event.event_type) {
            if let Err(err) = handler.handle(event.clone()).await {
                failures.push(format!("{}: {}", handler.name(), err));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::PublishFailed,
                format!("Handler errors: {}", failures.join(", ")),
            )
            .with_detail("event_type", event.event_type))
        }
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn envelope(event_type: &str, simulation_id: SimulationId) -> EventEnvelope {
        EventEnvelope::new(event_type, simulation_id.to_string(), "Simulation", json!({}))
    }

    struct Counter(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for Counter {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "Counter"
        }
    }

    struct Failing;

    #[async_trait]
    impl EventHandler for Failing {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "projection offline"))
        }

        fn name(&self) -> &'static str {
            "Failing"
        }
    }

    #[tokio::test]
    async fn publish_records_envelopes_in_order() {
        let bus = InMemoryEventBus::new();
        let sim = SimulationId::new();

        bus.publish(envelope("simulation.company_set.v1", sim)).await.unwrap();
        bus.publish(envelope("simulation.model_initialized.v1", sim)).await.unwrap();

        assert_eq!(
            bus.event_types(),
            vec!["simulation.company_set.v1", "simulation.model_initialized.v1"]
        );
        assert!(bus.has_event("simulation.model_initialized.v1"));
    }

    #[tokio::test]
    async fn events_for_simulation_filters_by_aggregate() {
        let bus = InMemoryEventBus::new();
        let first = SimulationId::new();
        let second = SimulationId::new();

        bus.publish(envelope("simulation.reset.v1", first)).await.unwrap();
        bus.publish(envelope("simulation.reset.v1", second)).await.unwrap();
        bus.publish(envelope("simulation.kpi_updated.v1", first)).await.unwrap();

        assert_eq!(bus.events_for_simulation(first).len(), 2);
        assert_eq!(bus.events_of_type("simulation.reset.v1").len(), 2);
    }

    #[tokio::test]
    async fn subscribers_receive_matching_types_only() {
        let bus = InMemoryEventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe_all(
            &["simulation.decision_made.v1", "simulation.tension_resolved.v1"],
            Arc::new(Counter(count.clone())),
        );
        let sim = SimulationId::new();

        bus.publish(envelope("simulation.decision_made.v1", sim)).await.unwrap();
        bus.publish(envelope("simulation.tension_resolved.v1", sim)).await.unwrap();
        bus.publish(envelope("simulation.reset.v1", sim)).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_failure_is_reported_but_event_is_kept() {
        let bus = InMemoryEventBus::new();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe("simulation.reset.v1", Arc::new(Failing));
        bus.subscribe("simulation.reset.v1", Arc::new(Counter(count.clone())));

        let err = bus
            .publish(envelope("simulation.reset.v1", SimulationId::new()))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::PublishFailed);
        assert!(err.message.contains("Failing: [INTERNAL_ERROR] projection offline"));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_count(), 1);
    }

    #[tokio::test]
    async fn clear_forgets_events() {
        let bus = InMemoryEventBus::new();
        bus.publish(envelope("simulation.reset.v1", SimulationId::new())).await.unwrap();
        bus.clear();
        assert_eq!(bus.event_count(), 0);
    }
}
