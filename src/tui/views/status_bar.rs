//! Status bar view
//!
//! Key hints for the focused panel

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Focus};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints: &[(&str, &str)] = match (app.focus, app.is_editing()) {
        (Focus::Form, true) => &[
            ("Enter", "save"),
            ("Tab", "next field"),
            ("Esc", "cancel edit"),
            ("F2", "summary"),
        ],
        (Focus::Form, false) => &[
            ("Enter", "add"),
            ("Tab", "next field"),
            ("Esc", "to table"),
            ("F2", "summary"),
        ],
        (Focus::Table, _) => &[
            ("j/k", "move"),
            ("e", "edit"),
            ("d", "remove"),
            ("s", "summary"),
            ("a", "add"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(format!(" {}  ", action)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
