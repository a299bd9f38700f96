//! Loading bar - Idle/Loading/Complete/Stopped progress machine.
//!
//! A periodic task adds a random increment to an atomic progress value;
//! crossing 100 completes the run and the task stops itself by returning
//! false from its tick. Phase lives in an AtomicU8 so the tick thread and
//! user-facing calls agree on it without a lock.
//!
//! [`LoadingBar::advance`] drives one tick synchronously, so the whole
//! machine is testable without sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use rand::Rng;

use crate::surface::{StyleProperty, Surface};
use crate::timer::ScheduledTask;
use crate::types::{LOADING_TICK, Marker};

/// Per-tick progress increment range.
const INCREMENT_RANGE: std::ops::Range<u32> = 5..20;

/// Loading bar phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LoadingPhase {
    Idle = 0,
    Loading = 1,
    Complete = 2,
    Stopped = 3,
}

impl LoadingPhase {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Loading,
            2 => Self::Complete,
            3 => Self::Stopped,
            _ => Self::Idle,
        }
    }
}

/// Progress bar over one surface.
pub struct LoadingBar {
    surface: Arc<dyn Surface>,
    phase: Arc<AtomicU8>,
    progress: Arc<AtomicU32>,
    task: Option<ScheduledTask>,
}

impl LoadingBar {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            phase: Arc::new(AtomicU8::new(LoadingPhase::Idle as u8)),
            progress: Arc::new(AtomicU32::new(0)),
            task: None,
        }
    }

    pub fn phase(&self) -> LoadingPhase {
        LoadingPhase::from_u8(self.phase.load(Ordering::SeqCst))
    }

    /// Progress value, clamped for display at 100.
    pub fn progress(&self) -> u32 {
        self.progress.load(Ordering::SeqCst).min(100)
    }

    /// Whether the tick task is currently live.
    pub fn has_active_task(&self) -> bool {
        self.task.as_ref().is_some_and(ScheduledTask::is_active)
    }

    /// Begin loading. No-op while already loading; restarting after
    /// Complete or Stopped begins a fresh run.
    pub fn start(&mut self) {
        if self.phase() == LoadingPhase::Loading {
            return;
        }

        tracing::debug!("loading start");
        self.progress.store(0, Ordering::SeqCst);
        self.phase
            .store(LoadingPhase::Loading as u8, Ordering::SeqCst);
        self.surface.set_marker(Marker::LOADING, true);
        self.surface.apply_style(StyleProperty::BarWidth(0));
        self.surface.set_text("Loading...");

        let surface = self.surface.clone();
        let phase = self.phase.clone();
        let progress = self.progress.clone();
        self.task = Some(ScheduledTask::every(LOADING_TICK, move || {
            step(surface.as_ref(), &phase, &progress)
        }));
    }

    /// Drive one tick synchronously. Returns the phase afterwards.
    ///
    /// The demo's periodic task calls the same step; this entry point
    /// exists for headless use and tests.
    pub fn advance(&mut self) -> LoadingPhase {
        if self.phase() == LoadingPhase::Loading {
            step(self.surface.as_ref(), &self.phase, &self.progress);
        }
        let phase = self.phase();
        if phase != LoadingPhase::Loading {
            // Terminal transitions leave no live timer.
            if let Some(mut task) = self.task.take() {
                task.cancel();
            }
        }
        phase
    }

    /// User-initiated cancellation. Loading becomes Stopped; any other
    /// phase is left alone. Idempotent, always clears the task handle.
    pub fn stop(&mut self) {
        if self.phase() == LoadingPhase::Loading {
            self.phase
                .store(LoadingPhase::Stopped as u8, Ordering::SeqCst);
            self.surface.set_text("Stopped");
            tracing::debug!("loading stopped by user");
        }
        self.surface.set_marker(Marker::LOADING, false);
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }
}

impl Drop for LoadingBar {
    fn drop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }
}

/// One progress tick. Returns false once loading is over so the periodic
/// task stops itself.
fn step(surface: &dyn Surface, phase: &AtomicU8, progress: &AtomicU32) -> bool {
    if LoadingPhase::from_u8(phase.load(Ordering::SeqCst)) != LoadingPhase::Loading {
        return false;
    }

    let increment = rand::rng().random_range(INCREMENT_RANGE);
    let total = progress.fetch_add(increment, Ordering::SeqCst) + increment;
    surface.apply_style(StyleProperty::BarWidth(total.min(100) as u8));

    if total >= 100 {
        phase.store(LoadingPhase::Complete as u8, Ordering::SeqCst);
        surface.set_marker(Marker::LOADING, false);
        surface.set_text("Complete!");
        tracing::debug!("loading complete");
        return false;
    }
    true
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn setup() -> (Arc<MemorySurface>, LoadingBar) {
        let surface = Arc::new(MemorySurface::new());
        let bar = LoadingBar::new(surface.clone());
        (surface, bar)
    }

    #[test]
    fn test_advance_to_completion() {
        let (surface, mut bar) = setup();
        bar.start();

        // 5..20 per tick: 100 is crossed within 20 ticks
        let mut ticks = 0;
        while bar.advance() == LoadingPhase::Loading {
            ticks += 1;
            assert!(ticks <= 20, "never completed");
        }

        assert_eq!(bar.phase(), LoadingPhase::Complete);
        assert!(!bar.has_active_task());
        assert_eq!(bar.progress(), 100);

        let state = surface.snapshot();
        assert_eq!(state.text, "Complete!");
        assert_eq!(state.bar_width, 100);
        assert!(!state.markers.contains(Marker::LOADING));
    }

    #[test]
    fn test_start_while_loading_is_noop() {
        let (_, mut bar) = setup();
        bar.start();
        bar.advance();
        let before = bar.progress();

        bar.start();
        assert_eq!(bar.progress(), before, "restart must not reset progress");
        assert_eq!(bar.phase(), LoadingPhase::Loading);

        bar.stop();
    }

    #[test]
    fn test_stop_before_completion() {
        let (surface, mut bar) = setup();
        bar.start();
        bar.advance();
        bar.stop();

        assert_eq!(bar.phase(), LoadingPhase::Stopped);
        assert!(!bar.has_active_task());
        assert_eq!(surface.snapshot().text, "Stopped");
        assert!(!surface.has_marker(Marker::LOADING));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (_, mut bar) = setup();
        bar.stop();
        assert_eq!(bar.phase(), LoadingPhase::Idle);

        bar.start();
        bar.stop();
        bar.stop();
        assert_eq!(bar.phase(), LoadingPhase::Stopped);
        assert!(!bar.has_active_task());
    }

    #[test]
    fn test_restart_after_terminal_phase() {
        let (_, mut bar) = setup();
        bar.start();
        bar.stop();

        bar.start();
        assert_eq!(bar.phase(), LoadingPhase::Loading);
        assert_eq!(bar.progress(), 0);
        bar.stop();
    }

    #[test]
    fn test_tick_task_makes_progress() {
        let (_, mut bar) = setup();
        bar.start();

        // Let the periodic task run a few ticks on its own thread.
        std::thread::sleep(LOADING_TICK * 3 + std::time::Duration::from_millis(100));
        assert!(bar.progress() > 0, "timer task never advanced progress");
        bar.stop();
    }

    #[test]
    fn test_progress_display_clamped() {
        let (surface, mut bar) = setup();
        bar.start();
        while bar.advance() == LoadingPhase::Loading {}

        // Raw counter may overshoot; the surface and accessor never do.
        assert!(surface.snapshot().bar_width <= 100);
        assert!(bar.progress() <= 100);
    }
}
