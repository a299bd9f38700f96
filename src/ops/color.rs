//! Random color generation.
//!
//! Each hex digit is drawn independently and uniformly from the 16
//! symbols, with a non-cryptographic source. The result always matches
//! `^#[0-9A-F]{6}$` and round-trips through [`Rgba::from_hex`].

use rand::Rng;

use crate::types::Rgba;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Generate a random `#RRGGBB` color string.
pub fn random_color() -> String {
    let mut rng = rand::rng();
    let mut out = String::with_capacity(7);
    out.push('#');
    for _ in 0..6 {
        let digit = HEX_DIGITS[rng.random_range(0..16)];
        out.push(digit as char);
    }
    out
}

/// Generate a random color as an [`Rgba`] value.
pub fn random_rgba() -> Rgba {
    // random_color always produces a valid #RRGGBB string
    Rgba::from_hex(&random_color()).unwrap_or_default()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid(color: &str) -> bool {
        color.len() == 7
            && color.starts_with('#')
            && color[1..]
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    }

    #[test]
    fn test_shape_across_many_samples() {
        for _ in 0..10_000 {
            let color = random_color();
            assert!(is_valid(&color), "bad color: {color}");
        }
    }

    #[test]
    fn test_parses_as_rgba() {
        for _ in 0..1_000 {
            let color = random_color();
            assert!(Rgba::from_hex(&color).is_some(), "unparseable: {color}");
        }
    }

    #[test]
    fn test_rgba_matches_its_hex() {
        for _ in 0..1_000 {
            let rgba = random_rgba();
            assert_eq!(Rgba::from_hex(&rgba.to_hex()), Some(rgba));
        }
    }

    #[test]
    fn test_not_constant() {
        // 32 draws of a 24-bit space colliding into one value would mean
        // the source is broken
        let first = random_color();
        let varied = (0..32).any(|_| random_color() != first);
        assert!(varied);
    }
}
