//! Terminal front-end: setup, the picker event loop, and rendering.

pub mod theme;
pub mod ui;

use std::io::{IsTerminal, Stdout, stdout};

use crossterm::{
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;

use crate::error::{Result, WhenNextError};
use crate::events::{Action, EventHandler};
use crate::log;
use crate::picker::{Command, DatePicker, SessionEnd};

/// Run one picker session on the real terminal.
///
/// The terminal is restored before returning, whatever the outcome.
pub async fn run_session(picker: &mut DatePicker) -> Result<SessionEnd> {
    if !std::io::stdin().is_terminal() {
        return Err(WhenNextError::Terminal("stdin is not a terminal".to_string()));
    }

    let mut terminal = setup_terminal()?;
    let result = run_picker(&mut terminal, picker).await;

    let restored = restore_terminal().and_then(|()| terminal.show_cursor());
    finish_session(result, restored)
}

/// Combine the loop outcome with the terminal restore.
///
/// A loop error always wins; a restore failure is logged and only reported
/// when the loop itself succeeded.
fn finish_session(result: Result<SessionEnd>, restored: std::io::Result<()>) -> Result<SessionEnd> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            log::log(&format!("Failed to restore terminal: {}", restore_err));
            Err(e)
        }
        (result, Ok(())) => result,
        (Ok(_), Err(restore_err)) => {
            log::log(&format!("Failed to restore terminal: {}", restore_err));
            Err(restore_err.into())
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Leave raw mode and the alternate screen.
pub fn restore_terminal() -> std::io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)
}

async fn run_picker<B: Backend>(terminal: &mut Terminal<B>, picker: &mut DatePicker) -> Result<SessionEnd>
where
    WhenNextError: From<B::Error>,
{
    let mut event_stream = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &*picker))?;

        let event = match event_stream.next().await {
            Some(event) => event?,
            None => {
                // Input is gone; end the session the way a quit would.
                log::log("Event stream closed");
                picker.update(Action::Quit);
                return Ok(SessionEnd::Cancelled);
            }
        };

        let action = EventHandler::handle_event(&picker.keys, &event);
        if action != Action::None {
            log::log_action(&format!(
                "{:?} at {} (offset {})",
                action,
                picker.current(),
                picker.offset()
            ));
        }
        if action.is_terminal() {
            log::log(&format!("Session ending with {} dates selected", picker.selection().len()));
        }

        if let Command::Terminate(end) = picker.update(action) {
            return Ok(end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Error;

    #[test]
    fn test_loop_error_survives_restore_failure() {
        let result = finish_session(
            Err(WhenNextError::Terminal("event stream failed".to_string())),
            Err(Error::other("restore failed")),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("event stream failed"));
    }

    #[test]
    fn test_restore_failure_reported_after_clean_session() {
        let result = finish_session(
            Ok(SessionEnd::Validated),
            Err(Error::other("restore failed")),
        );
        assert!(matches!(result, Err(WhenNextError::Io(_))));
    }

    #[test]
    fn test_clean_session_and_restore() {
        let result = finish_session(Ok(SessionEnd::Cancelled), Ok(()));
        assert_eq!(result.unwrap(), SessionEnd::Cancelled);
    }
}
