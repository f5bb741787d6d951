//! Layout definitions for the TUI
//!
//! The form sits on top, the expense table fills the middle and a one-line
//! key hint bar closes the screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the form block: four inputs plus borders
const FORM_HEIGHT: u16 = 6;

/// Screen regions
pub struct AppLayout {
    pub form: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            form: chunks[0],
            table: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// One row per form input inside the form block
pub fn form_rows(inner: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// A rect in the top-right corner for toast notifications
pub fn toast_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
