//! Key bindings.
//!
//! Keys map to an [`Action`]; anything that changes the drawing becomes a
//! [`rosette::Command`] so the TUI has a single redraw path.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rosette::Command;

/// Characters accepted into a form field.
const NUMERIC_CHARS: &str = "0123456789.-+eE";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Command(Command),
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter => Action::Command(Command::Generate),
        KeyCode::Char('#') => Action::Command(Command::ToggleGrid),
        KeyCode::PageUp | KeyCode::Char('>') => Action::Command(Command::ZoomIn),
        KeyCode::PageDown | KeyCode::Char('<') => Action::Command(Command::ZoomOut),
        KeyCode::Char(']') => Action::Command(Command::IncreaseThickness),
        KeyCode::Char('[') => Action::Command(Command::DecreaseThickness),
        KeyCode::Tab | KeyCode::Down => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrev,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) if NUMERIC_CHARS.contains(c) => Action::Insert(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn buttons_become_commands() {
        assert_eq!(map_key(key(KeyCode::Enter)), Action::Command(Command::Generate));
        assert_eq!(map_key(key(KeyCode::Char('#'))), Action::Command(Command::ToggleGrid));
        assert_eq!(map_key(key(KeyCode::Char('>'))), Action::Command(Command::ZoomIn));
        assert_eq!(map_key(key(KeyCode::PageDown)), Action::Command(Command::ZoomOut));
        assert_eq!(map_key(key(KeyCode::Char('['))), Action::Command(Command::DecreaseThickness));
    }

    #[test]
    fn numeric_text_is_typed() {
        for c in "0123456789.-+eE".chars() {
            assert_eq!(map_key(key(KeyCode::Char(c))), Action::Insert(c));
        }
        assert_eq!(map_key(key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(map_key(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }
}
