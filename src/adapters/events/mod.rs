//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus that records envelopes and dispatches to handlers
//! - `TracingEventLogger` - Handler that writes every envelope to the log

mod in_memory;
mod tracing_logger;

pub use in_memory::InMemoryEventBus;
pub use tracing_logger::TracingEventLogger;
