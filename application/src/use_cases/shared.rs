//! Shared utilities for use cases.
//!
//! Contains the per-handler busy flag that keeps a handler from starting a
//! second request while its first one is still in flight, and the guard that
//! puts a handler's controls back once its call settles.

use std::sync::atomic::{AtomicBool, Ordering};

/// Re-entrancy guard owned by one handler.
///
/// Independent of any control's enabled state: a caller that bypasses the
/// disabled control still cannot start an overlapping request.
#[derive(Debug, Default)]
pub(crate) struct BusyFlag {
    busy: AtomicBool,
}

impl BusyFlag {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Mark the handler busy. Returns `None` if it already is.
    pub(crate) fn try_enter(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: self })
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Clears the busy flag when dropped, including on early return or panic.
#[derive(Debug)]
pub(crate) struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.busy.store(false, Ordering::Release);
    }
}

/// Runs a restore closure when dropped.
///
/// Holds a handler's "put the controls back" step, so it also runs when the
/// request panics or the handler's future is dropped mid-flight.
pub(crate) struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    pub(crate) fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}
