//! Rate limiters - debounce and throttle wrappers.
//!
//! Both wrap an arbitrary callback and control how often it runs:
//!
//! - [`Debounce`] - only the last call in a burst runs, after a quiet
//!   period, with the most recent arguments
//! - [`Throttle`] - at most one call per window, the first call runs
//!   immediately
//!
//! Debounce schedules through [`ScheduledTask::once`], so rescheduling is
//! exactly "cancel the pending one-shot, start a new one".

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::timer::ScheduledTask;

// =============================================================================
// Debounce
// =============================================================================

/// Debounced callback wrapper.
pub struct Debounce<A> {
    callback: Arc<Mutex<dyn FnMut(A) + Send>>,
    wait: Duration,
    pending: Option<ScheduledTask>,
}

impl<A: Send + 'static> Debounce<A> {
    /// Wrap `callback` so it only runs after `wait` of quiescence.
    pub fn new<F>(callback: F, wait: Duration) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self {
            callback: Arc::new(Mutex::new(callback)),
            wait,
            pending: None,
        }
    }

    /// Record a call. Any pending invocation is cancelled and the
    /// callback is rescheduled with these arguments.
    pub fn call(&mut self, arg: A) {
        if let Some(mut task) = self.pending.take() {
            task.cancel();
        }

        let callback = self.callback.clone();
        self.pending = Some(ScheduledTask::once(self.wait, move || {
            if let Ok(mut f) = callback.lock() {
                f(arg);
            }
        }));
    }

    /// Drop any pending invocation without running it.
    pub fn cancel(&mut self) {
        if let Some(mut task) = self.pending.take() {
            task.cancel();
        }
    }

    /// Whether an invocation is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(ScheduledTask::is_active)
    }
}

// =============================================================================
// Throttle
// =============================================================================

/// Throttled callback wrapper.
pub struct Throttle<A> {
    callback: Box<dyn FnMut(A) + Send>,
    limit: Duration,
    last_run: Option<Instant>,
}

impl<A> Throttle<A> {
    /// Wrap `callback` so it runs at most once per `limit`.
    pub fn new<F>(callback: F, limit: Duration) -> Self
    where
        F: FnMut(A) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
            limit,
            last_run: None,
        }
    }

    /// Invoke the callback if the window has elapsed.
    ///
    /// The first call always runs. Returns true when the callback ran.
    pub fn call(&mut self, arg: A) -> bool {
        let now = Instant::now();
        let eligible = self
            .last_run
            .is_none_or(|last| now.duration_since(last) >= self.limit);

        if eligible {
            self.last_run = Some(now);
            (self.callback)(arg);
        }
        eligible
    }
}

// =============================================================================
// Tests
// =============================================================================
