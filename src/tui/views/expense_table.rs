//! Expense table view

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::format_amount_cell;
use crate::tui::app::{App, Focus};

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.focus == Focus::Table {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Expenses ({}) ", app.records.len()))
        .border_style(Style::default().fg(border_color));

    if app.records.is_empty() {
        let empty = Paragraph::new("No expenses yet. Fill in the form and press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["#", "Date", "Category", "Amount", "Description"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let editing = app.session.as_ref().map(|s| s.position());
    let rows = app.records.iter().enumerate().map(|(i, record)| {
        let style = if editing == Some(i + 1) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from((i + 1).to_string()),
            Cell::from(record.date.as_str()),
            Cell::from(record.category.as_str()),
            Cell::from(format!(
                "{} {}",
                format_amount_cell(record, 10),
                app.currency
            )),
            Cell::from(record.description.as_str()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Length(15),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default();
    if app.focus == Focus::Table {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
