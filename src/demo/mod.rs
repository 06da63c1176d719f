//! Demonstration flows.
//!
//! # Data Flow
//! ```text
//! detached::run:
//!     start → spawn(printer) → end → return (task may still be running)
//!
//! joined::run:
//!     start → JoinBarrier(1) → spawn(printer, guard) → wait → end
//! ```
//!
//! The two flows share nothing but the logger they are handed.

pub mod detached;
pub mod joined;
pub mod printer;

use thiserror::Error;
use tokio::runtime::Handle;

use crate::lifecycle::BarrierError;

pub const START_MESSAGE: &str = "main routine start";
pub const END_MESSAGE: &str = "main routine end";

/// Errors that abort a flow.
///
/// `NoRuntime` is detected before any line is logged; a `Barrier` error can
/// only follow the start line.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Tasks can only be spawned from inside a Tokio runtime.
    #[error("no Tokio runtime available to spawn on")]
    NoRuntime,

    #[error(transparent)]
    Barrier(#[from] BarrierError),
}

fn current_runtime() -> Result<Handle, DemoError> {
    Handle::try_current().map_err(|_| DemoError::NoRuntime)
}
