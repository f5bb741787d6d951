//! Remove confirmation dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::format_amount_cell;
use crate::models::Record;
use crate::tui::layout::centered_rect_fixed;

/// Ask whether to remove the expense at `position`
pub fn render(frame: &mut Frame, position: usize, record: &Record, currency: &str) {
    let area = centered_rect_fixed(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Remove Expense ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from(format!("Remove expense #{}?", position)),
        Line::from(Span::styled(
            format!(
                "{} | {} | {} {} | {}",
                record.date,
                record.category,
                format_amount_cell(record, 0),
                currency,
                record.description
            ),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
