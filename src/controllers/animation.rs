//! Animation controller - Idle/Animating rotation ticks.
//!
//! Owns one surface and at most one periodic task. While animating, the
//! task advances a shared rotation angle modulo 360 every tick and applies
//! it as a rotation style, the same split the blink clock uses: the thread
//! only touches the atomic and the (Sync) surface.

use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};

use crate::surface::{StyleProperty, Surface};
use crate::timer::ScheduledTask;
use crate::types::{ANIMATION_TICK, Marker, Rgba};

/// Degrees advanced per tick (one revolution every 3 seconds at 50ms).
const ROTATION_STEP: u16 = 6;

/// Rotation animation over one surface.
pub struct AnimationController {
    surface: Arc<dyn Surface>,
    angle: Arc<AtomicU16>,
    task: Option<ScheduledTask>,
}

impl AnimationController {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            angle: Arc::new(AtomicU16::new(0)),
            task: None,
        }
    }

    /// Whether a tick task is currently live.
    pub fn is_animating(&self) -> bool {
        self.task.as_ref().is_some_and(ScheduledTask::is_active)
    }

    /// Current rotation angle in degrees.
    pub fn angle(&self) -> u16 {
        self.angle.load(Ordering::SeqCst)
    }

    /// Begin animating. No-op while already animating.
    pub fn start(&mut self) {
        if self.is_animating() {
            return;
        }

        tracing::debug!("animation start");
        self.surface.set_marker(Marker::ANIMATING, true);

        let surface = self.surface.clone();
        let angle = self.angle.clone();
        self.task = Some(ScheduledTask::every(ANIMATION_TICK, move || {
            let next = (angle.load(Ordering::SeqCst) + ROTATION_STEP) % 360;
            angle.store(next, Ordering::SeqCst);
            surface.apply_style(StyleProperty::Rotation(next));
            true
        }));
    }

    /// Stop animating. Safe from any state, idempotent, always clears
    /// the task handle.
    pub fn stop(&mut self) {
        self.surface.set_marker(Marker::ANIMATING, false);
        if let Some(mut task) = self.task.take() {
            task.cancel();
            tracing::debug!("animation stop");
        }
    }

    /// Stop and restore the canonical default transform and background.
    pub fn reset(&mut self) {
        self.stop();
        self.angle.store(0, Ordering::SeqCst);
        self.surface.apply_style(StyleProperty::Rotation(0));
        self.surface
            .apply_style(StyleProperty::Background(Rgba::DEFAULT_BACKGROUND));
    }
}

impl Drop for AnimationController {
    fn drop(&mut self) {
        self.stop();
    }
}

// =============================================================================
// Tests
// =============================================================================
