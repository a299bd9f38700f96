//! Flip card - binary toggle state machine.
//!
//! No timer involved: flip inverts the state, reset forces the front
//! face, and the surface carries the FLIPPED marker while the back face
//! is showing.

use std::sync::Arc;

use crate::surface::Surface;
use crate::types::Marker;

/// Two-sided card over one surface.
pub struct FlipCard {
    surface: Arc<dyn Surface>,
    is_flipped: bool,
}

impl FlipCard {
    pub fn new(surface: Arc<dyn Surface>) -> Self {
        Self {
            surface,
            is_flipped: false,
        }
    }

    pub fn is_flipped(&self) -> bool {
        self.is_flipped
    }

    /// Toggle between front and back face.
    pub fn flip(&mut self) {
        self.is_flipped = !self.is_flipped;
        self.surface.set_marker(Marker::FLIPPED, self.is_flipped);
    }

    /// Force the front face, regardless of current state.
    pub fn reset(&mut self) {
        self.is_flipped = false;
        self.surface.set_marker(Marker::FLIPPED, false);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_flip_toggles() {
        let surface = Arc::new(MemorySurface::new());
        let mut card = FlipCard::new(surface.clone());

        card.flip();
        assert!(card.is_flipped());
        assert!(surface.has_marker(Marker::FLIPPED));

        card.flip();
        assert!(!card.is_flipped());
        assert!(!surface.has_marker(Marker::FLIPPED));
    }

    #[test]
    fn test_reset_forces_front_face() {
        let surface = Arc::new(MemorySurface::new());
        let mut card = FlipCard::new(surface.clone());

        card.reset();
        assert!(!card.is_flipped());

        card.flip();
        card.reset();
        assert!(!card.is_flipped());
        assert!(!surface.has_marker(Marker::FLIPPED));
    }
}
