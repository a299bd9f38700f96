//! Timer Module - cancellable scheduled tasks
//!
//! Controllers own at most one [`ScheduledTask`] each. A task is a
//! background thread gated by a shared running flag:
//!
//! - [`ScheduledTask::every`] - periodic tick until cancelled, or until
//!   the tick itself returns false (completion from inside the tick)
//! - [`ScheduledTask::once`] - one-shot callback after a delay
//!
//! Cancellation is idempotent and never joins; the thread observes the
//! cleared flag on its next wake and exits.
//!
//! # Example
//!
//! ```ignore
//! use chalkboard::timer::ScheduledTask;
//! use std::time::Duration;
//!
//! let mut task = ScheduledTask::every(Duration::from_millis(50), || {
//!     // advance some state
//!     true // keep ticking
//! });
//!
//! task.cancel(); // safe to call any number of times
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A cancellable scheduled task backed by one thread.
pub struct ScheduledTask {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledTask {
    /// Spawn a periodic task.
    ///
    /// `tick` runs every `period` until the task is cancelled or `tick`
    /// returns false. The first tick fires after one full period.
    pub fn every<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = thread::spawn(move || {
            while flag.load(Ordering::SeqCst) {
                thread::sleep(period);
                if !flag.load(Ordering::SeqCst) {
                    break;
                }
                if !tick() {
                    flag.store(false, Ordering::SeqCst);
                    break;
                }
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Spawn a one-shot task that runs `f` after `delay`.
    ///
    /// Cancelling before the delay elapses suppresses the callback.
    pub fn once<F>(delay: Duration, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = running.clone();

        let handle = thread::spawn(move || {
            thread::sleep(delay);
            // swap so the callback also marks the task finished
            if flag.swap(false, Ordering::SeqCst) {
                f();
            }
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Cancel the task. Idempotent; safe when the task already finished.
    ///
    /// Does not join - the thread exits on its next wake when it checks
    /// the flag.
    pub fn cancel(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.handle.take();
    }

    /// Whether the task is still scheduled to run.
    pub fn is_active(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_every_ticks_until_cancelled() {
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let mut task = ScheduledTask::every(Duration::from_millis(5), move || {
            c.fetch_add(1, Ordering::SeqCst);
            true
        });

        thread::sleep(Duration::from_millis(60));
        task.cancel();
        let at_cancel = count.load(Ordering::SeqCst);
        assert!(at_cancel >= 2, "expected ticks before cancel");

        // No more ticks after cancellation settles
        thread::sleep(Duration::from_millis(30));
        let settled = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), settled);
    }

    #[test]
    fn test_every_stops_when_tick_returns_false() {
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        let task = ScheduledTask::every(Duration::from_millis(5), move || {
            c.fetch_add(1, Ordering::SeqCst) < 2
        });

        thread::sleep(Duration::from_millis(80));
        assert!(!task.is_active());
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_once_fires_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let f = fired.clone();
        let task = ScheduledTask::once(Duration::from_millis(10), move || {
            f.store(true, Ordering::SeqCst);
        });

        assert!(task.is_active());
        thread::sleep(Duration::from_millis(60));
        assert!(fired.load(Ordering::SeqCst));
        assert!(!task.is_active());
    }

    #[test]
    fn test_once_cancel_suppresses_callback() {
        let fired = Arc::new(AtomicBool::new(false));
        let f = fired.clone();
        let mut task = ScheduledTask::once(Duration::from_millis(50), move || {
            f.store(true, Ordering::SeqCst);
        });

        task.cancel();
        thread::sleep(Duration::from_millis(100));
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut task = ScheduledTask::every(Duration::from_millis(5), || true);
        task.cancel();
        task.cancel();
        task.cancel();
        assert!(!task.is_active());
    }

    #[test]
    fn test_drop_cancels() {
        let count = Arc::new(AtomicU32::new(0));
        let c = count.clone();
        {
            let _task = ScheduledTask::every(Duration::from_millis(5), move || {
                c.fetch_add(1, Ordering::SeqCst);
                true
            });
            thread::sleep(Duration::from_millis(20));
        }
        thread::sleep(Duration::from_millis(30));
        let settled = count.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), settled);
    }
}
