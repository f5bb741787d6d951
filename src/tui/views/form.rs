//! Expense form view

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::tui::app::{App, Focus};
use crate::tui::layout::form_rows;

/// Render the four labelled inputs
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let title = match &app.session {
        Some(session) => format!(" Edit Expense #{} ", session.position()),
        None => " Add Expense ".to_string(),
    };
    let border_color = if app.focus == Focus::Form {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.form;
    let [date, category, amount, description] = form_rows(inner);
    frame.render_widget(&form.date, date);
    frame.render_widget(&form.category, category);
    frame.render_widget(&form.amount, amount);
    frame.render_widget(&form.description, description);
}
