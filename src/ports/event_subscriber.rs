//! EventSubscriber port - Interface for reacting to simulation events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler invoked for each matching envelope.
///
/// Handlers should be quick; an error is reported back to the publisher
/// but does not stop other handlers from running.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Name used in error messages and logs.
    fn name(&self) -> &'static str;
}

/// Port for registering handlers by event type.
pub trait EventSubscriber: Send + Sync {
    /// Subscribe a handler to one event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        for event_type in event_types {
            self.subscribe(event_type, Arc::clone(&handler));
        }
    }
}

/// A bus that both publishes and dispatches to subscribers.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
