//! Keyboard event handling for the date picker.

use crossterm::event::KeyEvent;

use crate::picker::KeyMap;

use super::Action;

/// Handle keyboard events and return the appropriate action.
///
/// Bindings are checked in a fixed order so overlapping custom bindings
/// resolve predictably. Unbound keys map to `Action::None`.
pub fn handle_key_event(keys: &KeyMap, key: KeyEvent) -> Action {
    if keys.go_to_start.matches(&key) {
        Action::GoToStart
    } else if keys.go_to_end.matches(&key) {
        Action::GoToEnd
    } else if keys.up.matches(&key) {
        Action::MoveUp
    } else if keys.down.matches(&key) {
        Action::MoveDown
    } else if keys.select.matches(&key) {
        Action::ToggleSelect
    } else if keys.validate.matches(&key) {
        Action::Validate
    } else if keys.quit.matches(&key) {
        Action::Quit
    } else if keys.help.matches(&key) {
        Action::ToggleHelp
    } else {
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_default_bindings() {
        let keys = KeyMap::default();
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('j'))), Action::MoveDown);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Down)), Action::MoveDown);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('k'))), Action::MoveUp);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Up)), Action::MoveUp);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char(' '))), Action::ToggleSelect);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('?'))), Action::ToggleHelp);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Enter)), Action::Validate);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('g'))), Action::GoToStart);
        assert_eq!(
            handle_key_event(&keys, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(&keys, KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            Action::MoveUp
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let keys = KeyMap::default();
        assert_eq!(handle_key_event(&keys, press(KeyCode::Char('x'))), Action::None);
        assert_eq!(handle_key_event(&keys, press(KeyCode::Tab)), Action::None);
    }
}
