//! # Key Bindings
//!
//! Maps terminal key presses to page interactions. Text inputs consume
//! printable keys; everything else treats Enter and Space as activation.

use crate::todo::dom::{ElementKind, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrevious,
    /// Click a button or label, flip a checkbox
    Activate,
    InsertChar(char),
    DeleteChar,
    /// Deliver a key-up to the focused text input without editing it
    KeyUp(Key),
    Ignore,
}

/// Decide what a key press means given the kind of the focused element
pub fn map_key(key: &KeyEvent, focused: Option<ElementKind>) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::Ignore,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => return KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => return KeyAction::FocusPrevious,
        _ => {}
    }

    match focused {
        Some(ElementKind::TextInput) => match key.code {
            KeyCode::Char(c) => KeyAction::InsertChar(c),
            KeyCode::Backspace => KeyAction::DeleteChar,
            KeyCode::Enter => KeyAction::KeyUp(Key::Enter),
            KeyCode::Esc => KeyAction::KeyUp(Key::Escape),
            _ => KeyAction::KeyUp(Key::Other),
        },
        Some(kind) if kind.is_interactive() => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
            _ => KeyAction::Ignore,
        },
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn ctrl_c_and_ctrl_q_should_quit_anywhere() {
        for c in ['c', 'q'] {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
            assert_eq!(map_key(&key, Some(ElementKind::TextInput)), KeyAction::Quit);
            assert_eq!(map_key(&key, None), KeyAction::Quit);
        }
    }

    #[test]
    fn navigation_keys_should_move_focus_even_in_text_inputs() {
        let focused = Some(ElementKind::TextInput);
        assert_eq!(map_key(&press(KeyCode::Tab), focused), KeyAction::FocusNext);
        assert_eq!(map_key(&press(KeyCode::Down), focused), KeyAction::FocusNext);
        assert_eq!(map_key(&press(KeyCode::BackTab), focused), KeyAction::FocusPrevious);
        assert_eq!(map_key(&press(KeyCode::Up), focused), KeyAction::FocusPrevious);
    }

    #[test]
    fn text_inputs_should_take_printable_keys() {
        let focused = Some(ElementKind::TextInput);
        assert_eq!(map_key(&press(KeyCode::Char(' ')), focused), KeyAction::InsertChar(' '));
        assert_eq!(map_key(&press(KeyCode::Char('q')), focused), KeyAction::InsertChar('q'));
        assert_eq!(map_key(&press(KeyCode::Backspace), focused), KeyAction::DeleteChar);
        assert_eq!(map_key(&press(KeyCode::Enter), focused), KeyAction::KeyUp(Key::Enter));
        assert_eq!(map_key(&press(KeyCode::Esc), focused), KeyAction::KeyUp(Key::Escape));
    }

    #[test]
    fn enter_and_space_should_activate_other_controls() {
        for kind in [ElementKind::Button, ElementKind::Checkbox, ElementKind::Label] {
            assert_eq!(map_key(&press(KeyCode::Enter), Some(kind)), KeyAction::Activate);
            assert_eq!(map_key(&press(KeyCode::Char(' ')), Some(kind)), KeyAction::Activate);
            assert_eq!(map_key(&press(KeyCode::Char('x')), Some(kind)), KeyAction::Ignore);
        }
    }

    #[test]
    fn nothing_focused_should_ignore_activation() {
        assert_eq!(map_key(&press(KeyCode::Enter), None), KeyAction::Ignore);
    }

    #[test]
    fn key_release_should_be_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key, Some(ElementKind::Button)), KeyAction::Ignore);
    }
}
