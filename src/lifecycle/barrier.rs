//! Counting join barrier.
//!
//! # States
//! - Pending: `remaining > 0`, waiters stay parked
//! - Signaled: `remaining == 0`, every waiter resumes
//!
//! # State Transitions
//! ```text
//! Pending(n) → Pending(n - 1): one completion signal, n > 1
//! Pending(1) → Signaled:       last completion signal
//! ```
//!
//! # Design Decisions
//! - Slots are reserved up front (`guard`), so a barrier can never be
//!   signaled more times than it was armed with
//! - A reserved slot is released on drop, a panicking task still frees the waiter
//! - No re-arming, no timeout, no cancellation

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Errors raised by barrier misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarrierError {
    /// More completions were requested than the barrier was armed with.
    #[error("join barrier armed for {armed} task(s) was signaled again")]
    OverSignaled { armed: usize },
}

#[derive(Debug)]
struct Inner {
    armed: usize,
    /// Slots not yet handed out to a guard.
    unclaimed: AtomicUsize,
    /// Completions still outstanding.
    remaining: AtomicUsize,
    notify: Notify,
}

impl Inner {
    fn complete(&self) {
        let prev = self.remaining.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "completion without a reserved slot");
        if prev == 1 {
            self.notify.notify_waiters();
        }
    }
}

/// A countdown latch that blocks waiters until `armed` tasks have completed.
///
/// Cloning shares the same counter.
#[derive(Debug, Clone)]
pub struct JoinBarrier {
    inner: Arc<Inner>,
}

impl JoinBarrier {
    /// Create a barrier expecting `armed` completion signals.
    ///
    /// A barrier armed with zero is already signaled.
    pub fn new(armed: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                armed,
                unclaimed: AtomicUsize::new(armed),
                remaining: AtomicUsize::new(armed),
                notify: Notify::new(),
            }),
        }
    }

    /// Number of completions the barrier was created with.
    pub fn armed(&self) -> usize {
        self.inner.armed
    }

    /// Completions still outstanding.
    pub fn remaining(&self) -> usize {
        self.inner.remaining.load(Ordering::Acquire)
    }

    pub fn is_signaled(&self) -> bool {
        self.remaining() == 0
    }

    /// Reserve one completion slot.
    ///
    /// The returned guard signals the barrier exactly once, when it is dropped.
    pub fn guard(&self) -> Result<CompletionGuard, BarrierError> {
        let mut prev = self.inner.unclaimed.load(Ordering::Relaxed);
        loop {
            if prev == 0 {
                return Err(BarrierError::OverSignaled {
                    armed: self.inner.armed,
                });
            }
            match self.inner.unclaimed.compare_exchange_weak(
                prev,
                prev - 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(x) => prev = x,
            }
        }
        Ok(CompletionGuard {
            inner: self.inner.clone(),
        })
    }

    /// Signal one completion immediately.
    pub fn signal(&self) -> Result<(), BarrierError> {
        drop(self.guard()?);
        Ok(())
    }

    /// Spawn `future` on the current Tokio runtime as one of the barrier's tasks.
    ///
    /// The slot is released when the future finishes or unwinds.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, like [`tokio::spawn`].
    pub fn spawn<F>(&self, future: F) -> Result<JoinHandle<F::Output>, BarrierError>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let guard = self.guard()?;
        Ok(tokio::spawn(async move {
            let _done = guard;
            future.await
        }))
    }

    /// Wait until every armed completion has been signaled.
    pub async fn wait(&self) {
        loop {
            // Register before checking, so a signal landing in between is not lost.
            let notified = self.inner.notify.notified();
            if self.is_signaled() {
                return;
            }
            notified.await;
        }
    }
}

/// One reserved completion slot of a [`JoinBarrier`].
#[derive(Debug)]
pub struct CompletionGuard {
    inner: Arc<Inner>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.inner.complete();
    }
}
