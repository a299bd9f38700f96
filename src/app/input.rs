//! Input conversion - crossterm events to demo events.
//!
//! Bridges crossterm's event system to the handful of inputs the demo
//! cares about. Only key presses and mouse downs are interesting; drags,
//! moves and releases map to [`DemoEvent::None`].

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    MouseEventKind, poll, read,
};
use std::time::Duration;

/// Unified event type for the demo loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    /// Printable character pressed.
    Char(char),
    Enter,
    Backspace,
    Escape,
    /// Mouse button pressed at (column, row).
    Click(u16, u16),
    /// Ctrl+C.
    Quit,
    /// Terminal resized.
    Resize,
    /// Anything the demo ignores.
    None,
}

/// Convert a crossterm key event.
pub fn convert_key_event(event: CrosstermKeyEvent) -> DemoEvent {
    // Only presses dispatch; repeat/release are ignored
    if event.kind != KeyEventKind::Press {
        return DemoEvent::None;
    }

    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return DemoEvent::Quit;
    }

    match event.code {
        KeyCode::Char(c) => DemoEvent::Char(c),
        KeyCode::Enter => DemoEvent::Enter,
        KeyCode::Backspace => DemoEvent::Backspace,
        KeyCode::Esc => DemoEvent::Escape,
        _ => DemoEvent::None,
    }
}

/// Poll for an event with timeout. Returns None if nothing arrived.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<DemoEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<DemoEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)),
        CrosstermEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(_) => Ok(DemoEvent::Click(mouse.column, mouse.row)),
            _ => Ok(DemoEvent::None),
        },
        CrosstermEvent::Resize(_, _) => Ok(DemoEvent::Resize),
        _ => Ok(DemoEvent::None),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_char() {
        let event = key(KeyCode::Char('a'), KeyModifiers::empty(), KeyEventKind::Press);
        assert_eq!(convert_key_event(event), DemoEvent::Char('a'));
    }

    #[test]
    fn test_convert_special_keys() {
        for (code, expected) in [
            (KeyCode::Enter, DemoEvent::Enter),
            (KeyCode::Backspace, DemoEvent::Backspace),
            (KeyCode::Esc, DemoEvent::Escape),
        ] {
            let event = key(code, KeyModifiers::empty(), KeyEventKind::Press);
            assert_eq!(convert_key_event(event), expected);
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = key(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyEventKind::Press);
        assert_eq!(convert_key_event(event), DemoEvent::Quit);
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = key(KeyCode::Char('a'), KeyModifiers::empty(), kind);
            assert_eq!(convert_key_event(event), DemoEvent::None);
        }
    }

    #[test]
    fn test_unhandled_keys_map_to_none() {
        let event = key(KeyCode::F(5), KeyModifiers::empty(), KeyEventKind::Press);
        assert_eq!(convert_key_event(event), DemoEvent::None);
    }
}
