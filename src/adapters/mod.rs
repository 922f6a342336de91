//! Adapters - Implementations of the ports.
//!
//! - `events` - In-memory event bus and a tracing-backed event logger

pub mod events;
