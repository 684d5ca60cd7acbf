use ratatui::style::{Modifier, Style};

use crate::tui::theme::*;

/// Visual attributes used when rendering the picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Styles {
    pub cursor: Style,
    pub date: Style,
    pub selected: Style,
    pub delta: Style,
    pub help_key: Style,
    pub help_desc: Style,
    pub help_separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            cursor: Style::new().fg(ACCENT_PINK),
            date: Style::new(),
            selected: Style::new().fg(ACCENT_PINK).add_modifier(Modifier::BOLD),
            delta: Style::new().fg(DELTA_GRAY),
            help_key: Style::new().fg(TEXT_WHITE),
            help_desc: Style::new().fg(TEXT_DIM),
            help_separator: Style::new().fg(SEPARATOR_GRAY),
        }
    }
}
