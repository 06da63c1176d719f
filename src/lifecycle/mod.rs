//! Task lifecycle coordination.
//!
//! # Data Flow
//! ```text
//! Launching flow:
//!     JoinBarrier::new(n) → guard()/spawn() per task → wait()
//!
//! Spawned task:
//!     runs body → CompletionGuard dropped → counter decremented
//!     → last decrement wakes every waiter
//! ```
//!
//! # Design Decisions
//! - Barrier state is atomics plus `tokio::sync::Notify`, no lock
//! - Completion is tied to guard drop, not to an explicit call

pub mod barrier;

pub use barrier::{BarrierError, CompletionGuard, JoinBarrier};
