//! Category summary popup

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::CategoryTotals;
use crate::tui::layout::centered_rect_fixed;

/// Show totals per category, in order of first appearance
pub fn render(frame: &mut Frame, totals: &CategoryTotals, currency: &str) {
    let height = (totals.len() as u16).saturating_add(7);
    let area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Summary by Category ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::from("")];
    if totals.is_empty() {
        lines.push(Line::from(Span::styled(
            "No data to summarize.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        for (category, total) in totals.iter() {
            lines.push(Line::from(format!(
                " {:<20} {:>12.2} {}",
                category, total, currency
            )));
        }
        lines.push(Line::from(Span::styled(
            format!(
                " {:<20} {:>12.2} {}",
                "Total",
                totals.grand_total(),
                currency
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Esc/Enter to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
