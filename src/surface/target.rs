//! Surface trait - the minimal render target controllers draw on.
//!
//! The capability set is deliberately tiny: markers (presence/absence
//! flags), typed style properties, and a text line. Controller logic never
//! touches a concrete backend, so the whole state-machine layer is
//! testable against [`MemorySurface`](super::MemorySurface).
//!
//! Surfaces use interior mutability and are `Send + Sync` because
//! scheduled tasks apply styles from their own thread.

use crate::types::{AnimationName, Marker, Rgba};

// =============================================================================
// Style properties
// =============================================================================

/// A typed style mutation applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleProperty {
    /// Rotation angle in degrees (always < 360).
    Rotation(u16),
    /// Background color.
    Background(Rgba),
    /// Progress bar width in percent (0-100).
    BarWidth(u8),
    /// Named entrance/exit animation, or None to clear it.
    Animation(Option<AnimationName>),
    /// Whether the surface is part of the visual flow.
    Visibility(bool),
}

// =============================================================================
// Visual state
// =============================================================================

/// Snapshot of everything a surface currently shows.
///
/// Returned by [`Surface::snapshot`] so tests and renderers see one
/// consistent view instead of issuing a getter per field.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub markers: Marker,
    pub rotation: u16,
    pub background: Rgba,
    pub bar_width: u8,
    pub animation: Option<AnimationName>,
    pub visible: bool,
    pub text: String,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            markers: Marker::empty(),
            rotation: 0,
            background: Rgba::DEFAULT_BACKGROUND,
            bar_width: 0,
            animation: None,
            visible: true,
            text: String::new(),
        }
    }
}

impl VisualState {
    /// Apply a single style property in place.
    pub fn apply(&mut self, prop: StyleProperty) {
        match prop {
            StyleProperty::Rotation(deg) => self.rotation = deg % 360,
            StyleProperty::Background(color) => self.background = color,
            StyleProperty::BarWidth(pct) => self.bar_width = pct.min(100),
            StyleProperty::Animation(name) => self.animation = name,
            StyleProperty::Visibility(v) => self.visible = v,
        }
    }
}

// =============================================================================
// Surface trait
// =============================================================================

/// Minimal render target: markers, style properties, text.
pub trait Surface: Send + Sync {
    /// Set or clear a marker.
    fn set_marker(&self, marker: Marker, on: bool);

    /// Check whether a marker is set.
    fn has_marker(&self, marker: Marker) -> bool;

    /// Apply a typed style property.
    fn apply_style(&self, prop: StyleProperty);

    /// Replace the surface's text line.
    fn set_text(&self, text: &str);

    /// Flush pending output so prior mutations are visible before the
    /// next one lands. No-op for surfaces that render eagerly.
    fn commit(&self);

    /// Consistent snapshot of the current visual state.
    fn snapshot(&self) -> VisualState;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_rotation_wraps() {
        let mut state = VisualState::default();
        state.apply(StyleProperty::Rotation(365));
        assert_eq!(state.rotation, 5);
    }

    #[test]
    fn test_apply_bar_width_clamps() {
        let mut state = VisualState::default();
        state.apply(StyleProperty::BarWidth(250));
        assert_eq!(state.bar_width, 100);
    }

    #[test]
    fn test_default_state() {
        let state = VisualState::default();
        assert!(state.visible);
        assert_eq!(state.background, Rgba::DEFAULT_BACKGROUND);
        assert!(state.animation.is_none());
        assert!(state.markers.is_empty());
    }
}
