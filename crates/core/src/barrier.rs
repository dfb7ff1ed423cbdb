//! Execution barrier
//!
//! A single-slot gate that serializes "exclusive" backend calls. While an
//! exclusive call holds the barrier, every call issued after it (exclusive or
//! not) is deferred until the holder finishes. Deferred calls resume in the
//! order they were issued; nothing is rejected and there is no timeout.
//!
//! Built on tokio's fair `RwLock`: holders take the write half for the whole
//! call, other calls pass through the read half without keeping it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{OwnedRwLockWriteGuard, RwLock};
use tracing::trace;

/// Observable state of the barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierState {
    Open,
    Held,
}

/// Shared handle to the barrier. Clones refer to the same gate.
#[derive(Debug, Clone, Default)]
pub struct ExecutionBarrier {
    gate: Arc<RwLock<()>>,
    held: Arc<AtomicBool>,
}

impl ExecutionBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> BarrierState {
        if self.held.load(Ordering::Acquire) {
            BarrierState::Held
        } else {
            BarrierState::Open
        }
    }

    /// Wait until no exclusive call issued before this one is in flight.
    pub async fn wait_open(&self) {
        let _pass = self.gate.read().await;
    }

    /// Claim the barrier for an exclusive call.
    ///
    /// Queues behind an exclusive call that is already in flight. The
    /// barrier opens again when the returned guard is dropped.
    pub async fn acquire(&self) -> BarrierGuard {
        let guard = Arc::clone(&self.gate).write_owned().await;
        self.held.store(true, Ordering::Release);
        trace!("execution barrier held");
        BarrierGuard { _guard: guard, held: Arc::clone(&self.held) }
    }
}

/// Keeps the barrier held until dropped.
#[must_use = "the barrier opens as soon as the guard is dropped"]
#[derive(Debug)]
pub struct BarrierGuard {
    _guard: OwnedRwLockWriteGuard<()>,
    held: Arc<AtomicBool>,
}

impl Drop for BarrierGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
        trace!("execution barrier released");
    }
}
