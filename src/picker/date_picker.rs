//! Date picker state machine.
//!
//! The picker shows a window of seven consecutive days starting at
//! `anchor + offset`. Moving past either edge of the window shifts the offset
//! by one day and re-derives the window, which gives the list its infinite
//! scroll.

use chrono::{Local, NaiveDate, TimeDelta};
use ratatui::text::{Line, Span, Text};

use crate::error::SelectionError;
use crate::events::Action;

use super::keymap::{Binding, KeyMap};
use super::selection::Selection;
use super::styles::Styles;
use super::format_date;

/// Number of days visible at once.
pub const WINDOW_SIZE: usize = 7;

/// ISO layout used until a display layout is configured.
pub const ISO_LAYOUT: &str = "%Y-%m-%d";

const CURSOR_MARKER: &str = "▶";

/// How a picker session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user confirmed the selection
    Validated,
    /// The user quit; the selection was discarded
    Cancelled,
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Continue,
    Terminate(SessionEnd),
}

/// Interactive date picker state.
#[derive(Debug, Clone)]
pub struct DatePicker {
    anchor: NaiveDate,
    dates: [NaiveDate; WINDOW_SIZE],
    cursor: usize,
    offset: i64,
    selected: Selection,
    help_expanded: bool,

    pub keys: KeyMap,
    pub styles: Styles,
    pub layout: String,
}

impl DatePicker {
    /// Create a picker whose first row is `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: today,
            dates: std::array::from_fn(|i| today + TimeDelta::days(i as i64)),
            cursor: 0,
            offset: 0,
            selected: Selection::default(),
            help_expanded: false,
            keys: KeyMap::default(),
            styles: Styles::default(),
            layout: ISO_LAYOUT.to_string(),
        }
    }

    /// Create a picker anchored on the local date.
    pub fn starting_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn window(&self) -> &[NaiveDate; WINDOW_SIZE] {
        &self.dates
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn selection(&self) -> &Selection {
        &self.selected
    }

    pub fn help_expanded(&self) -> bool {
        self.help_expanded
    }

    /// Date currently under the cursor.
    pub fn current(&self) -> NaiveDate {
        self.dates[self.cursor]
    }

    /// Selected dates in ascending order. Empty after a quit.
    pub fn selected_dates(&self) -> Result<Vec<NaiveDate>, SelectionError> {
        self.selected.dates()
    }

    /// Apply one action.
    pub fn update(&mut self, action: Action) -> Command {
        match action {
            Action::MoveUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                } else {
                    self.scroll(-1);
                }
            }
            Action::MoveDown => {
                if self.cursor < WINDOW_SIZE - 1 {
                    self.cursor += 1;
                } else {
                    self.scroll(1);
                }
            }
            Action::ToggleSelect => {
                let date = self.current();
                self.selected.toggle(date);
            }
            Action::ToggleHelp => self.help_expanded = !self.help_expanded,
            Action::Validate => return Command::Terminate(SessionEnd::Validated),
            Action::Quit => {
                self.selected.clear();
                return Command::Terminate(SessionEnd::Cancelled);
            }
            // Bound and listed in the help, but no jump target is defined yet.
            Action::GoToStart | Action::GoToEnd => {}
            Action::None => {}
        }
        Command::Continue
    }

    /// Shift the window by `delta` days, leaving the cursor where it is.
    ///
    /// The window is rebuilt from `anchor + offset`; a shift that would leave
    /// chrono's date range is dropped.
    fn scroll(&mut self, delta: i64) {
        let offset = self.offset + delta;
        if let Some(dates) = window_at(self.anchor, offset) {
            self.offset = offset;
            self.dates = dates;
        }
    }

    /// Number of terminal rows the view needs.
    pub fn height(&self) -> u16 {
        let help_rows = if self.help_expanded {
            self.keys.full_help().len()
        } else {
            1
        };
        (WINDOW_SIZE + 1 + help_rows) as u16
    }

    /// Render the picker as styled text: one row per day, a blank line, then
    /// the help.
    pub fn view(&self) -> Text<'static> {
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(WINDOW_SIZE + 3);

        for (i, date) in self.dates.iter().enumerate() {
            let delta = date.signed_duration_since(self.anchor).num_days();
            let cursor = if i == self.cursor { CURSOR_MARKER } else { " " };
            let date_style = if self.selected.contains(*date) {
                self.styles.selected
            } else {
                self.styles.date
            };

            lines.push(Line::from(vec![
                Span::styled(format!("{:>2}", delta), self.styles.delta),
                Span::raw(" "),
                Span::styled(cursor, self.styles.cursor),
                Span::raw(" "),
                Span::styled(format_date(*date, &self.layout), date_style),
            ]));
        }

        lines.push(Line::default());

        if self.help_expanded {
            for group in self.keys.full_help() {
                lines.push(self.help_line(&group));
            }
        } else {
            lines.push(self.help_line(&self.keys.short_help()));
        }

        Text::from(lines)
    }

    fn help_line(&self, bindings: &[&Binding]) -> Line<'static> {
        let mut spans = vec![];
        for (i, binding) in bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", self.styles.help_separator));
            }
            spans.push(Span::styled(binding.help_key(), self.styles.help_key));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(binding.help_desc(), self.styles.help_desc));
        }
        Line::from(spans)
    }
}

fn window_at(anchor: NaiveDate, offset: i64) -> Option<[NaiveDate; WINDOW_SIZE]> {
    let mut dates = [anchor; WINDOW_SIZE];
    for (i, slot) in dates.iter_mut().enumerate() {
        let days = TimeDelta::try_days(offset.checked_add(i as i64)?)?;
        *slot = anchor.checked_add_signed(days)?;
    }
    Some(dates)
}
