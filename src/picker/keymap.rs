//! Key binding table for the date picker.
//!
//! Each logical action owns a [`Binding`]: the keys that trigger it plus the
//! label shown in the help line.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key chord, e.g. `j`, `down` or `ctrl+n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPattern {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyPattern {
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// Check whether a key event is this chord.
    ///
    /// Shift is ignored: terminals report `G` as `Char('G')` with SHIFT set,
    /// and the uppercase char already carries that information.
    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.code == key.code
            && key.modifiers.difference(KeyModifiers::SHIFT)
                == self.modifiers.difference(KeyModifiers::SHIFT)
    }
}

/// Keys for one action plus its help entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPattern>,
    help_key: &'static str,
    help_desc: &'static str,
}

impl Binding {
    pub fn new(keys: Vec<KeyPattern>, help_key: &'static str, help_desc: &'static str) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        self.keys.iter().any(|pattern| pattern.matches(key))
    }

    pub fn help_key(&self) -> &'static str {
        self.help_key
    }

    pub fn help_desc(&self) -> &'static str {
        self.help_desc
    }
}

/// The picker's key bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    pub go_to_start: Binding,
    pub go_to_end: Binding,
    pub down: Binding,
    pub up: Binding,
    pub select: Binding,
    pub help: Binding,
    pub quit: Binding,
    pub validate: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            go_to_start: Binding::new(vec![KeyPattern::plain(KeyCode::Char('g'))], "g", "start"),
            go_to_end: Binding::new(vec![KeyPattern::plain(KeyCode::Char('G'))], "G", "end"),
            down: Binding::new(
                vec![
                    KeyPattern::plain(KeyCode::Char('j')),
                    KeyPattern::plain(KeyCode::Down),
                    KeyPattern::ctrl('n'),
                ],
                "j",
                "down",
            ),
            up: Binding::new(
                vec![
                    KeyPattern::plain(KeyCode::Char('k')),
                    KeyPattern::plain(KeyCode::Up),
                    KeyPattern::ctrl('p'),
                ],
                "k",
                "up",
            ),
            select: Binding::new(vec![KeyPattern::plain(KeyCode::Char(' '))], "space", "select"),
            help: Binding::new(vec![KeyPattern::plain(KeyCode::Char('?'))], "?", "help"),
            quit: Binding::new(
                vec![
                    KeyPattern::plain(KeyCode::Char('q')),
                    KeyPattern::plain(KeyCode::Esc),
                    KeyPattern::ctrl('c'),
                ],
                "q",
                "quit",
            ),
            validate: Binding::new(vec![KeyPattern::plain(KeyCode::Enter)], "enter", "validate"),
        }
    }
}

impl KeyMap {
    /// Bindings shown in the collapsed help line.
    pub fn short_help(&self) -> Vec<&Binding> {
        vec![&self.help, &self.quit]
    }

    /// Bindings shown when help is expanded, one group per line.
    pub fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.up, &self.down, &self.go_to_start, &self.go_to_end],
            vec![&self.help, &self.quit, &self.validate, &self.select],
        ]
    }
}
