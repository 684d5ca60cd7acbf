//! Date picker module
//!
//! Holds the picker state machine, its key bindings and styles, and the
//! selection set the session result is extracted from.

mod date_picker;
mod keymap;
mod selection;
mod styles;

use std::fmt::Write;

use chrono::NaiveDate;

pub use date_picker::{Command, DatePicker, SessionEnd};
pub use keymap::KeyMap;
pub use selection::DateKey;

/// Format a date with a chrono strftime layout, if the layout applies to a
/// plain date.
///
/// Layouts asking for time fields (`%H`) or containing bad specifiers fail.
pub fn try_format_date(date: NaiveDate, layout: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(layout)).ok()?;
    Some(out)
}

/// Format a date with `layout`, falling back to the ISO form.
pub fn format_date(date: NaiveDate, layout: &str) -> String {
    try_format_date(date, layout).unwrap_or_else(|| DateKey::from(date).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_with_layout() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert_eq!(format_date(date, "%a, %d %b %y"), "Fri, 02 Jan 26");
        assert_eq!(format_date(date, "%d/%m/%Y"), "02/01/2026");
    }

    #[test]
    fn test_invalid_layout_falls_back_to_iso() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        assert!(try_format_date(date, "%H:%M").is_none());
        assert!(try_format_date(date, "%Q").is_none());
        assert_eq!(format_date(date, "%H:%M"), "2026-01-02");
    }
}
