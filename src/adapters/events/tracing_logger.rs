//! Event handler that writes each envelope to the `tracing` log.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Logs every envelope it receives at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLogger;

#[async_trait]
impl EventHandler for TracingEventLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        debug!(
            event_id = %event.event_id,
            event_type = %event.event_type,
            simulation_id = %event.aggregate_id,
            payload = %event.payload,
            "simulation event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "TracingEventLogger"
    }
}
