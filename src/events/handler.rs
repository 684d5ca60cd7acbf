//! Central event handler that turns terminal events into actions.

use crossterm::event::{Event, KeyEventKind};

use crate::picker::KeyMap;

use super::Action;
use super::keyboard::handle_key_event;

/// Central event handler for the picker.
pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event and return an action.
    ///
    /// Only key presses drive the picker; releases, repeats, mouse, paste
    /// and resize events produce `Action::None` (a resize still triggers a
    /// redraw in the event loop).
    pub fn handle_event(keys: &KeyMap, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(keys, *key),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_release_is_ignored() {
        let keys = KeyMap::default();
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle_event(&keys, &Event::Key(release)), Action::None);
        assert_eq!(EventHandler::handle_event(&keys, &Event::Resize(80, 24)), Action::None);
    }

    #[test]
    fn test_press_is_mapped() {
        let keys = KeyMap::default();
        let press = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(EventHandler::handle_event(&keys, &press), Action::Validate);
    }
}
