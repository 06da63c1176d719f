//! Spawn and wait on a join barrier.
//!
//! # Ordering
//! ```text
//! start → [go routine index=0 .. index=n-1] → end
//! ```
//! The end line is only logged after the barrier is signaled, and the
//! barrier is only signaled after the printer returns.

use crate::demo::printer::{print_numbers, IndexStyle};
use crate::demo::{current_runtime, DemoError, END_MESSAGE, START_MESSAGE};
use crate::lifecycle::JoinBarrier;
use crate::observability::Logger;

/// Run the synchronized flow.
pub async fn run(logger: &Logger, iterations: usize) -> Result<(), DemoError> {
    current_runtime()?;

    logger.info(START_MESSAGE);

    let barrier = JoinBarrier::new(1);
    let task_logger = logger.clone();
    // The handle is not needed: completion is observed through the barrier.
    let _task = barrier.spawn(async move {
        print_numbers(&task_logger, iterations, IndexStyle::Attribute);
    })?;

    barrier.wait().await;

    logger.info(END_MESSAGE);
    Ok(())
}
