//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the date picker to
/// update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // === Navigation ===
    /// Move the cursor up, scrolling one day earlier at the top
    MoveUp,
    /// Move the cursor down, scrolling one day later at the bottom
    MoveDown,
    /// Reserved, bound to `g`
    GoToStart,
    /// Reserved, bound to `G`
    GoToEnd,

    // === Selection ===
    /// Toggle the date under the cursor
    ToggleSelect,

    // === UI ===
    /// Expand or collapse the help line
    ToggleHelp,

    // === Session ===
    /// Finish and keep the selection
    Validate,
    /// Finish and discard the selection
    Quit,

    /// No action (event was handled but no state change needed)
    None,
}

impl Action {
    /// Returns true if this action ends the picker session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Action::Validate | Action::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_actions() {
        assert!(Action::Validate.is_terminal());
        assert!(Action::Quit.is_terminal());
        assert!(!Action::ToggleSelect.is_terminal());
        assert!(!Action::None.is_terminal());
    }
}
