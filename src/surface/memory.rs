//! MemorySurface - headless render target for tests and demos.
//!
//! Holds a [`VisualState`] behind a mutex and records every operation in
//! order, so tests can assert both the final state and the sequence of
//! mutations (e.g. "visibility was committed before the entrance
//! animation was applied").

use std::sync::Mutex;

use crate::types::Marker;

use super::target::{StyleProperty, Surface, VisualState};

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Marker(Marker, bool),
    Style(StyleProperty),
    Text(String),
    Commit,
}

/// In-memory surface. Cheap to create, safe to share with task threads.
#[derive(Debug, Default)]
pub struct MemorySurface {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    state: VisualState,
    ops: Vec<SurfaceOp>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations applied so far, in order.
    pub fn ops(&self) -> Vec<SurfaceOp> {
        self.inner.lock().map(|i| i.ops.clone()).unwrap_or_default()
    }

    /// Number of operations applied so far.
    pub fn op_count(&self) -> usize {
        self.inner.lock().map(|i| i.ops.len()).unwrap_or(0)
    }

    /// Drop the recorded operation log (state is kept).
    pub fn clear_ops(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.ops.clear();
        }
    }
}

impl Surface for MemorySurface {
    fn set_marker(&self, marker: Marker, on: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.state.markers.set(marker, on);
            inner.ops.push(SurfaceOp::Marker(marker, on));
        }
    }

    fn has_marker(&self, marker: Marker) -> bool {
        self.inner
            .lock()
            .map(|i| i.state.markers.contains(marker))
            .unwrap_or(false)
    }

    fn apply_style(&self, prop: StyleProperty) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.state.apply(prop);
            inner.ops.push(SurfaceOp::Style(prop));
        }
    }

    fn set_text(&self, text: &str) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.state.text = text.to_string();
            inner.ops.push(SurfaceOp::Text(text.to_string()));
        }
    }

    fn commit(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.ops.push(SurfaceOp::Commit);
        }
    }

    fn snapshot(&self) -> VisualState {
        self.inner
            .lock()
            .map(|i| i.state.clone())
            .unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    #[test]
    fn test_records_ops_in_order() {
        let surface = MemorySurface::new();
        surface.set_marker(Marker::FLIPPED, true);
        surface.set_text("hello");
        surface.commit();

        assert_eq!(
            surface.ops(),
            vec![
                SurfaceOp::Marker(Marker::FLIPPED, true),
                SurfaceOp::Text("hello".to_string()),
                SurfaceOp::Commit,
            ]
        );
    }

    #[test]
    fn test_snapshot_reflects_styles() {
        let surface = MemorySurface::new();
        surface.apply_style(StyleProperty::Background(Rgba::rgb(10, 20, 30)));
        surface.apply_style(StyleProperty::Rotation(90));

        let state = surface.snapshot();
        assert_eq!(state.background, Rgba::rgb(10, 20, 30));
        assert_eq!(state.rotation, 90);
    }

    #[test]
    fn test_marker_set_and_clear() {
        let surface = MemorySurface::new();
        surface.set_marker(Marker::LOADING, true);
        assert!(surface.has_marker(Marker::LOADING));
        surface.set_marker(Marker::LOADING, false);
        assert!(!surface.has_marker(Marker::LOADING));
    }

    #[test]
    fn test_clear_ops_keeps_state() {
        let surface = MemorySurface::new();
        surface.set_text("kept");
        surface.clear_ops();
        assert_eq!(surface.op_count(), 0);
        assert_eq!(surface.snapshot().text, "kept");
    }
}
