//! Fire-and-forget spawn.
//!
//! The launching flow logs, spawns the printer and returns at once. Nothing
//! orders the spawned lines against the end line, and if the runtime shuts
//! down right after `run` returns the task may never finish.

use tokio::task::JoinHandle;

use crate::demo::printer::{print_numbers, IndexStyle};
use crate::demo::{current_runtime, DemoError, END_MESSAGE, START_MESSAGE};
use crate::observability::Logger;

/// Run the unsynchronized flow.
///
/// The handle is returned for callers that want to observe the task; this
/// flow never awaits it.
pub fn run(logger: &Logger, iterations: usize) -> Result<JoinHandle<()>, DemoError> {
    let runtime = current_runtime()?;

    logger.info(START_MESSAGE);

    let task_logger = logger.clone();
    let handle = runtime.spawn(async move {
        print_numbers(&task_logger, iterations, IndexStyle::Interpolated);
    });

    logger.info(END_MESSAGE);
    Ok(handle)
}
