//! EventPublisher port - Interface for publishing simulation events.
//!
//! The simulation hands every successful operation's event to this port
//! without knowing where it goes (a test bus, a log, a UI channel).

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing simulation events.
///
/// Implementations must:
/// - Deliver envelopes in the order they are published
/// - Report delivery failures as `PublishFailed` or `InternalError`
///
/// # Example
///
/// ```ignore
/// let envelope = event.to_envelope()?;
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single envelope.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several envelopes in order, stopping at the first failure.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;
    use std::sync::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl EventPublisher for Recorder {
        async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
            if self.fail_on == Some(event.event_type.as_str()) {
                return Err(DomainError::new(ErrorCode::PublishFailed, "refused"));
            }
            self.seen.lock().unwrap().push(event.event_type);
            Ok(())
        }
    }

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, "sim-1", "Simulation", json!({}))
    }

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn EventPublisher) {}

    #[tokio::test]
    async fn publish_all_keeps_order() {
        let recorder = Recorder {
            seen: Mutex::new(Vec::new()),
            fail_on: None,
        };

        recorder
            .publish_all(vec![envelope("a.v1"), envelope("b.v1")])
            .await
            .unwrap();

        assert_eq!(*recorder.seen.lock().unwrap(), vec!["a.v1", "b.v1"]);
    }

    #[tokio::test]
    async fn publish_all_stops_at_first_failure() {
        let recorder = Recorder {
            seen: Mutex::new(Vec::new()),
            fail_on: Some("b.v1"),
        };

        let result = recorder
            .publish_all(vec![envelope("a.v1"), envelope("b.v1"), envelope("c.v1")])
            .await;

        assert_eq!(result.unwrap_err().code, ErrorCode::PublishFailed);
        assert_eq!(*recorder.seen.lock().unwrap(), vec!["a.v1"]);
    }
}
