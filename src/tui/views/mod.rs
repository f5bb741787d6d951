//! TUI views
//!
//! Draws the form, the expense table, the key hint bar, then any open
//! dialog and the current notification on top.

pub mod expense_table;
pub mod form;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    expense_table::render(frame, app, layout.table);
    status_bar::render(frame, app, layout.status_bar);

    match &app.dialog {
        ActiveDialog::Summary(totals) => dialogs::summary::render(frame, totals, &app.currency),
        ActiveDialog::ConfirmRemove { position, record } => {
            dialogs::confirm::render(frame, *position, record, &app.currency)
        }
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
