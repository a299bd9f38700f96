//! Core types for chalkboard.
//!
//! These types flow between the pure ops, the controllers, and the surface
//! implementations: a small RGB color type, the marker set controllers
//! toggle on their surfaces, and the named entrance/exit animations.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels (0-255).
///
/// Integers for exact comparison - no floating point epsilon needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Default surface background (a neutral slate).
    pub const DEFAULT_BACKGROUND: Self = Self::rgb(240, 240, 240);

    /// Parse a hex color string (#RGB or #RRGGBB, case-insensitive).
    ///
    /// Returns None for invalid format.
    ///
    /// # Examples
    ///
    /// ```
    /// use chalkboard::types::Rgba;
    ///
    /// let red = Rgba::from_hex("#ff0000").unwrap();
    /// assert_eq!(red, Rgba::rgb(255, 0, 0));
    ///
    /// // #RGB shorthand (expands each digit)
    /// let white = Rgba::from_hex("#fff").unwrap();
    /// assert_eq!(white, Rgba::rgb(255, 255, 255));
    ///
    /// // Without # prefix also works
    /// let blue = Rgba::from_hex("0000ff").unwrap();
    /// assert_eq!(blue, Rgba::rgb(0, 0, 255));
    ///
    /// assert!(Rgba::from_hex("#gg0000").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');

        fn hex_digit(c: u8) -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        }

        fn hex_byte(s: &[u8], i: usize) -> Option<u8> {
            let high = hex_digit(s[i])?;
            let low = hex_digit(s[i + 1])?;
            Some((high << 4) | low)
        }

        let bytes = hex.as_bytes();
        match bytes.len() {
            // #RGB -> expand to #RRGGBB
            3 => {
                let r = hex_digit(bytes[0])?;
                let g = hex_digit(bytes[1])?;
                let b = hex_digit(bytes[2])?;
                Some(Self::rgb((r << 4) | r, (g << 4) | g, (b << 4) | b))
            }
            // #RRGGBB
            6 => {
                let r = hex_byte(bytes, 0)?;
                let g = hex_byte(bytes, 2)?;
                let b = hex_byte(bytes, 4)?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// =============================================================================
// Markers
// =============================================================================

bitflags! {
    /// Presence/absence markers a controller toggles on its surface.
    ///
    /// The terminal surface renders these as badges next to the region
    /// label; tests assert on them directly.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Marker: u8 {
        /// The animation controller is ticking.
        const ANIMATING  = 1 << 0;
        /// The flip card is showing its back face.
        const FLIPPED    = 1 << 1;
        /// The loading bar is in progress.
        const LOADING    = 1 << 2;
        /// The modal is open.
        const MODAL_OPEN = 1 << 3;
    }
}

// =============================================================================
// Animations
// =============================================================================

/// Named entrance/exit animations a surface can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationName {
    /// Modal entrance.
    SlideIn,
    /// Modal exit.
    SlideOut,
}

impl AnimationName {
    /// Short label used when rendering the surface.
    pub fn label(self) -> &'static str {
        match self {
            Self::SlideIn => "slide-in",
            Self::SlideOut => "slide-out",
        }
    }
}

// =============================================================================
// Timing constants
// =============================================================================

use std::time::Duration;

/// Period of the animation controller's rotation tick.
pub const ANIMATION_TICK: Duration = Duration::from_millis(50);

/// Period of the loading bar's progress tick.
pub const LOADING_TICK: Duration = Duration::from_millis(200);

/// Delay before a closing modal is hidden, so the exit animation
/// stays visible.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rrggbb() {
        assert_eq!(Rgba::from_hex("#FF8000"), Some(Rgba::rgb(255, 128, 0)));
        assert_eq!(Rgba::from_hex("ff8000"), Some(Rgba::rgb(255, 128, 0)));
    }

    #[test]
    fn test_from_hex_shorthand() {
        assert_eq!(Rgba::from_hex("#abc"), Some(Rgba::rgb(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Rgba::from_hex("").is_none());
        assert!(Rgba::from_hex("#12345").is_none());
        assert!(Rgba::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn test_to_hex_round_trip() {
        let c = Rgba::rgb(1, 2, 3);
        assert_eq!(c.to_hex(), "#010203");
        assert_eq!(Rgba::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn test_marker_toggle() {
        let mut m = Marker::empty();
        m.insert(Marker::ANIMATING);
        assert!(m.contains(Marker::ANIMATING));
        assert!(!m.contains(Marker::LOADING));
        m.remove(Marker::ANIMATING);
        assert!(m.is_empty());
    }
}
