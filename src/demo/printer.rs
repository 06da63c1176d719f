//! The counting loop run by every spawned task.

use crate::observability::{LogRecord, Logger};

/// How the loop index reaches the log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStyle {
    /// `"go routine 7"`
    Interpolated,
    /// `"go routine"` with `index=7`
    Attribute,
}

pub const TASK_MESSAGE: &str = "go routine";

/// Emit one line per index in `0..iterations`, in order.
pub fn print_numbers(logger: &Logger, iterations: usize, style: IndexStyle) {
    for i in 0..iterations {
        let record = match style {
            IndexStyle::Interpolated => LogRecord::info(format!("{} {}", TASK_MESSAGE, i)),
            IndexStyle::Attribute => LogRecord::info(TASK_MESSAGE).with_attr("index", i),
        };
        logger.log(record);
    }
}
