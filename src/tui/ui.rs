use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::picker::DatePicker;
use super::theme::*;

pub fn render(frame: &mut Frame, picker: &DatePicker) {
    let area = frame.area();

    // Vertical layout: header, picker, rest
    let main_layout = Layout::vertical([
        Constraint::Length(2),                // Header + spacing
        Constraint::Length(picker.height()),  // Dates + help
        Constraint::Min(0),
    ])
    .split(area);

    render_header(frame, main_layout[0], picker);
    frame.render_widget(Paragraph::new(picker.view()), main_layout[1]);
}

fn render_header(frame: &mut Frame, area: Rect, picker: &DatePicker) {
    let count = picker.selection().len();
    let mut spans = vec![Span::styled("Pick dates", Style::new().fg(ACCENT_PINK).add_modifier(Modifier::BOLD))];
    if count > 0 {
        spans.push(Span::styled(
            format!("  {} selected", count),
            Style::new().fg(TEXT_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::events::Action;

    #[test]
    fn test_render_picker() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let mut picker = DatePicker::new(today);
        picker.update(Action::ToggleSelect);

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| render(frame, &picker)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        };
        assert_eq!(row(0), "Pick dates  1 selected");
        assert_eq!(row(2), " 0 ▶ 2026-10-16");
        assert_eq!(row(8), " 6   2026-10-22");
        assert_eq!(row(10), "? help • q quit");
    }
}
