//! TermSurface - one labeled terminal row as a render target.
//!
//! Each surface owns a fixed row and redraws the whole row on every
//! mutation. Output goes through crossterm so task threads can draw
//! without fighting the main thread for escape-sequence state (stdout is
//! locked per redraw).
//!
//! Row layout:
//!
//! ```text
//! label        [marker][marker] ∠deg° |██████░░░░| text
//! ```

use std::io::{Write, stdout};
use std::sync::Mutex;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::types::{Marker, Rgba};

use super::target::{StyleProperty, Surface, VisualState};

/// Width of the rendered progress bar in cells.
const BAR_CELLS: u8 = 20;

/// Column where the state portion of the row starts.
const LABEL_WIDTH: usize = 14;

/// Terminal-backed surface bound to one row.
pub struct TermSurface {
    label: &'static str,
    row: u16,
    state: Mutex<VisualState>,
}

impl TermSurface {
    /// Create a surface for `row`, rendered with `label` as its prefix.
    pub fn new(label: &'static str, row: u16) -> Self {
        Self {
            label,
            row,
            state: Mutex::new(VisualState::default()),
        }
    }

    /// Render the row from a state snapshot. Best effort: a failed write
    /// never takes the controller down with it.
    fn redraw(&self, state: &VisualState) {
        let mut out = stdout();
        let _ = queue!(
            out,
            MoveTo(0, self.row),
            Clear(ClearType::CurrentLine),
            SetBackgroundColor(to_term_color(state.background)),
            Print(render_row(self.label, state)),
            ResetColor,
        );
        let _ = out.flush();
    }

    fn mutate(&self, f: impl FnOnce(&mut VisualState)) {
        if let Ok(mut state) = self.state.lock() {
            f(&mut state);
            self.redraw(&state);
        }
    }
}

impl Surface for TermSurface {
    fn set_marker(&self, marker: Marker, on: bool) {
        self.mutate(|state| state.markers.set(marker, on));
    }

    fn has_marker(&self, marker: Marker) -> bool {
        self.state
            .lock()
            .map(|s| s.markers.contains(marker))
            .unwrap_or(false)
    }

    fn apply_style(&self, prop: StyleProperty) {
        self.mutate(|state| state.apply(prop));
    }

    fn set_text(&self, text: &str) {
        self.mutate(|state| state.text = text.to_string());
    }

    fn commit(&self) {
        // Rendering is eager; committing just forces one more flush so a
        // visibility change is on screen before the next style lands.
        if let Ok(state) = self.state.lock() {
            self.redraw(&state);
        }
    }

    fn snapshot(&self) -> VisualState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

/// Convert our color type to a crossterm color.
fn to_term_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Build the textual row content for a state snapshot.
fn render_row(label: &str, state: &VisualState) -> String {
    if !state.visible {
        return format!("{label:<LABEL_WIDTH$} (hidden)");
    }

    let mut row = format!("{label:<LABEL_WIDTH$}");

    for (marker, badge) in [
        (Marker::ANIMATING, "[animating]"),
        (Marker::FLIPPED, "[flipped]"),
        (Marker::LOADING, "[loading]"),
        (Marker::MODAL_OPEN, "[open]"),
    ] {
        if state.markers.contains(marker) {
            row.push_str(badge);
        }
    }

    if let Some(animation) = state.animation {
        row.push_str(&format!("[{}]", animation.label()));
    }

    if state.rotation != 0 {
        row.push_str(&format!(" \u{2220}{}\u{00B0}", state.rotation));
    }

    if state.bar_width > 0 {
        let filled = (u16::from(state.bar_width) * u16::from(BAR_CELLS) / 100) as u8;
        row.push_str(" |");
        for _ in 0..filled {
            row.push('\u{2588}');
        }
        for _ in filled..BAR_CELLS {
            row.push('\u{2591}');
        }
        row.push('|');
    }

    if !state.text.is_empty() {
        row.push(' ');
        row.push_str(&state.text);
    }

    row
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnimationName;

    #[test]
    fn test_render_row_hidden() {
        let mut state = VisualState::default();
        state.visible = false;
        state.text = "ignored".to_string();
        assert!(render_row("modal", &state).contains("(hidden)"));
    }

    #[test]
    fn test_render_row_markers_and_text() {
        let mut state = VisualState::default();
        state.markers.insert(Marker::LOADING);
        state.text = "Loading...".to_string();
        let row = render_row("loading", &state);
        assert!(row.contains("[loading]"));
        assert!(row.ends_with("Loading..."));
    }

    #[test]
    fn test_render_row_bar_fill() {
        let mut state = VisualState::default();
        state.bar_width = 50;
        let row = render_row("loading", &state);
        let filled = row.matches('\u{2588}').count();
        let empty = row.matches('\u{2591}').count();
        assert_eq!(filled, 10);
        assert_eq!(empty, 10);
    }

    #[test]
    fn test_render_row_rotation_and_animation() {
        let mut state = VisualState::default();
        state.rotation = 42;
        state.animation = Some(AnimationName::SlideIn);
        let row = render_row("card", &state);
        assert!(row.contains("\u{2220}42\u{00B0}"));
        assert!(row.contains("[slide-in]"));
    }
}
