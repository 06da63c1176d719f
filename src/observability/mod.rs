//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Flows produce:
//!     → Logger (explicit handle, cloned into spawned tasks)
//!     → LogSink::emit(LogRecord)
//!
//! Sinks:
//!     → TracingSink → tracing events → tracing-subscriber fmt layer (stdout)
//!     → CaptureSink → in-memory Vec, inspected by tests
//! ```
//!
//! # Design Decisions
//! - Structured attributes stay separate from the message
//! - Subscriber installed once in `main`; flows never touch it

pub mod logging;
pub mod sink;

#[cfg(test)]
pub(crate) mod test_writer;

pub use sink::{CaptureSink, LogRecord, LogSink, Logger, TracingSink, Value};
