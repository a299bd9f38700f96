//! Text formatter - case transformations.
//!
//! Three styles, capitalize by default. The named lookup preserves the
//! original behavior of passing text through unchanged when the style
//! name is not recognized.

/// Case transformation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    /// Uppercase everything.
    Upper,
    /// Lowercase everything.
    Lower,
    /// Uppercase the first letter of every word, leave the rest alone.
    #[default]
    Capitalize,
}

impl TextStyle {
    /// Parse a style name. Unknown names give None.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "upper" => Some(Self::Upper),
            "lower" => Some(Self::Lower),
            "capitalize" => Some(Self::Capitalize),
            _ => None,
        }
    }

    /// Cycle to the next style (demo key binding rotates through them).
    pub fn next(self) -> Self {
        match self {
            Self::Upper => Self::Lower,
            Self::Lower => Self::Capitalize,
            Self::Capitalize => Self::Upper,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Capitalize => "capitalize",
        }
    }
}

/// Transform `text` with the given style.
///
/// # Example
///
/// ```
/// use chalkboard::ops::text::{format, TextStyle};
///
/// assert_eq!(format("hello world", TextStyle::Capitalize), "Hello World");
/// ```
pub fn format(text: &str, style: TextStyle) -> String {
    match style {
        TextStyle::Upper => text.to_uppercase(),
        TextStyle::Lower => text.to_lowercase(),
        TextStyle::Capitalize => capitalize_words(text),
    }
}

/// Transform `text` with a style looked up by name.
///
/// Unrecognized names pass the text through unchanged.
pub fn format_named(text: &str, style_name: &str) -> String {
    match TextStyle::parse(style_name) {
        Some(style) => format(text, style),
        None => text.to_string(),
    }
}

/// Uppercase the first letter at every word boundary.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;

    for c in text.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !c.is_alphanumeric();
    }

    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper() {
        assert_eq!(format("hello world", TextStyle::Upper), "HELLO WORLD");
    }

    #[test]
    fn test_lower() {
        assert_eq!(format("HELLO", TextStyle::Lower), "hello");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(format("hello world", TextStyle::Capitalize), "Hello World");
    }

    #[test]
    fn test_capitalize_is_default() {
        assert_eq!(TextStyle::default(), TextStyle::Capitalize);
        assert_eq!(format("two words", TextStyle::default()), "Two Words");
    }

    #[test]
    fn test_capitalize_preserves_other_characters() {
        assert_eq!(
            format("heLLo-woRld again", TextStyle::Capitalize),
            "HeLLo-WoRld Again"
        );
    }

    #[test]
    fn test_unknown_style_passes_through() {
        assert_eq!(format_named("hello world", "sTuDLy"), "hello world");
        assert_eq!(format_named("hello world", ""), "hello world");
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(format_named("hello", "upper"), "HELLO");
        assert_eq!(format_named("HELLO", "lower"), "hello");
        assert_eq!(format_named("hello world", "capitalize"), "Hello World");
    }

    #[test]
    fn test_style_cycle_covers_all() {
        let start = TextStyle::Upper;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format("", TextStyle::Capitalize), "");
    }
}
