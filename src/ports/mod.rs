//! Ports - Interfaces between the simulator and its surroundings.
//!
//! - `EventPublisher` - Outbound delivery of simulation events
//! - `EventSubscriber` / `EventHandler` - Reacting to delivered events

mod event_publisher;
mod event_subscriber;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
