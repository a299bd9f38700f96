//! Modal - open with an entrance animation, close with a delayed hide.
//!
//! Closing applies the exit animation immediately and hides the surface
//! only after [`CLOSE_DELAY`], so the animation is visible before the
//! element leaves the visual flow. Repeated closes replace the pending
//! one-shot instead of stacking hides.

use std::sync::Arc;

use crate::surface::{StyleProperty, Surface};
use crate::timer::ScheduledTask;
use crate::types::{AnimationName, CLOSE_DELAY, Marker};

/// Modal dialog over one surface.
pub struct Modal {
    surface: Arc<dyn Surface>,
    is_open: bool,
    pending_close: Option<ScheduledTask>,
}

impl Modal {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        // Modals start outside the visual flow.
        surface.apply_style(StyleProperty::Visibility(false));
        Self {
            surface,
            is_open: false,
            pending_close: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Show the modal: make it visible, commit so the visibility change
    /// is rendered, then play the entrance animation.
    pub fn open(&mut self) {
        if let Some(mut task) = self.pending_close.take() {
            task.cancel();
        }

        tracing::debug!("modal open");
        self.surface.apply_style(StyleProperty::Visibility(true));
        self.surface.commit();
        self.surface
            .apply_style(StyleProperty::Animation(Some(AnimationName::SlideIn)));
        self.surface.set_marker(Marker::MODAL_OPEN, true);
        self.is_open = true;
    }

    /// Play the exit animation now; hide after [`CLOSE_DELAY`].
    pub fn close(&mut self) {
        tracing::debug!("modal close");
        self.surface
            .apply_style(StyleProperty::Animation(Some(AnimationName::SlideOut)));
        self.surface.set_marker(Marker::MODAL_OPEN, false);
        self.is_open = false;

        if let Some(mut task) = self.pending_close.take() {
            task.cancel();
        }
        let surface = self.surface.clone();
        self.pending_close = Some(ScheduledTask::once(CLOSE_DELAY, move || {
            surface.apply_style(StyleProperty::Visibility(false));
            surface.apply_style(StyleProperty::Animation(None));
        }));
    }
}

impl Drop for Modal {
    fn drop(&mut self) {
        if let Some(mut task) = self.pending_close.take() {
            task.cancel();
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemorySurface, SurfaceOp};
    use std::thread;
    use std::time::Duration;

    fn setup() -> (Arc<MemorySurface>, Modal) {
        let surface = Arc::new(MemorySurface::new());
        let modal = Modal::new(surface.clone());
        (surface, modal)
    }

    #[test]
    fn test_starts_hidden() {
        let (surface, modal) = setup();
        assert!(!modal.is_open());
        assert!(!surface.snapshot().visible);
    }

    #[test]
    fn test_open_commits_visibility_before_animation() {
        let (surface, mut modal) = setup();
        surface.clear_ops();
        modal.open();

        let ops = surface.ops();
        let commit_pos = ops.iter().position(|op| *op == SurfaceOp::Commit);
        let anim_pos = ops.iter().position(|op| {
            matches!(
                op,
                SurfaceOp::Style(StyleProperty::Animation(Some(AnimationName::SlideIn)))
            )
        });
        assert!(commit_pos.is_some());
        assert!(anim_pos.is_some());
        assert!(commit_pos < anim_pos, "visibility must land first");

        let state = surface.snapshot();
        assert!(state.visible);
        assert!(state.markers.contains(Marker::MODAL_OPEN));
        assert!(modal.is_open());
    }

    #[test]
    fn test_close_hides_after_delay() {
        let (surface, mut modal) = setup();
        modal.open();
        modal.close();

        // Exit animation is on immediately, surface still visible
        let state = surface.snapshot();
        assert_eq!(state.animation, Some(AnimationName::SlideOut));
        assert!(state.visible);
        assert!(!modal.is_open());

        thread::sleep(CLOSE_DELAY + Duration::from_millis(100));
        let state = surface.snapshot();
        assert!(!state.visible);
        assert!(state.animation.is_none());
    }

    #[test]
    fn test_reopen_cancels_pending_hide() {
        let (surface, mut modal) = setup();
        modal.open();
        modal.close();
        modal.open();

        thread::sleep(CLOSE_DELAY + Duration::from_millis(100));
        // The pending hide was cancelled by the reopen
        assert!(surface.snapshot().visible);
        assert!(modal.is_open());
    }

    #[test]
    fn test_repeated_close_replaces_pending() {
        let (surface, mut modal) = setup();
        modal.open();
        modal.close();
        modal.close();
        modal.close();

        thread::sleep(CLOSE_DELAY + Duration::from_millis(100));
        assert!(!surface.snapshot().visible);
    }
}
