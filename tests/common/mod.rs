//! Shared helpers for flow tests.

use std::sync::Arc;

use spawnwait::observability::{CaptureSink, LogRecord, Logger};

/// A logger that records every line in emission order.
pub fn capture_logger() -> (Logger, Arc<CaptureSink>) {
    let sink = CaptureSink::new();
    (Logger::new(sink.clone()), sink)
}

/// Position of the first record with `message`.
pub fn position_of(records: &[LogRecord], message: &str) -> Option<usize> {
    records.iter().position(|r| r.message() == message)
}

/// Positions of every spawned-task line.
pub fn task_positions(records: &[LogRecord]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.message().starts_with("go routine"))
        .map(|(i, _)| i)
        .collect()
}
