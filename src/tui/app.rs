//! Application state for the expense form
//!
//! The App holds the form, the loaded table of expenses, the open editing
//! session (if any) and pending notifications. Every action goes through
//! [`ExpenseService`] and reports its result as a notification; no error
//! ends the session.

use crate::config::EntryPoint;
use crate::error::LedgerError;
use crate::models::{CategoryTotals, Record};
use crate::services::ExpenseService;
use crate::storage::EditSession;

use super::form::FormState;
use super::widgets::{Notification, NotificationQueue};

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    Table,
}

/// Currently open popup
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveDialog {
    #[default]
    None,
    Summary(CategoryTotals),
    ConfirmRemove {
        position: usize,
        record: Record,
    },
}

/// Main application state
pub struct App<'a> {
    pub service: &'a ExpenseService<'a>,
    pub currency: String,
    pub should_quit: bool,
    pub focus: Focus,
    pub form: FormState,
    /// Expenses as last loaded, in ledger order
    pub records: Vec<Record>,
    /// Index into `records` of the highlighted row
    pub selected: usize,
    /// Set while the form edits an existing expense
    pub session: Option<EditSession>,
    pub dialog: ActiveDialog,
    pub notifications: NotificationQueue,
}

impl<'a> App<'a> {
    pub fn new(service: &'a ExpenseService<'a>, currency: impl Into<String>) -> Self {
        let mut app = Self {
            service,
            currency: currency.into(),
            should_quit: false,
            focus: Focus::Form,
            form: FormState::for_add(service.date_format(EntryPoint::FormAdd)),
            records: Vec::new(),
            selected: 0,
            session: None,
            dialog: ActiveDialog::None,
            notifications: NotificationQueue::new(),
        };
        app.refresh();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog != ActiveDialog::None
    }

    pub fn close_dialog(&mut self) {
        self.dialog = ActiveDialog::None;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.form.set_active(focus == Focus::Form);
    }

    /// Reload the table from the ledger
    pub fn refresh(&mut self) {
        match self.service.list() {
            Ok(records) => self.records = records,
            Err(LedgerError::NotFound(_)) => self.records.clear(),
            Err(e) => {
                self.records.clear();
                self.notify(Notification::error(e.to_string()));
            }
        }
        self.selected = self.selected.min(self.records.len().saturating_sub(1));
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.records.get(self.selected)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    /// Add a new expense, or save the open edit
    pub fn submit(&mut self) {
        if self.is_editing() {
            self.save_edit();
        } else {
            self.add();
        }
    }

    fn add(&mut self) {
        let input = self.form.values();
        match self.service.add(EntryPoint::FormAdd, &input) {
            Ok(_) => {
                self.notify(Notification::success("Expense added successfully!"));
                self.form.clear();
                self.refresh();
                self.selected = self.records.len().saturating_sub(1);
            }
            Err(LedgerError::InvalidInput(_)) => {
                let hint = self.form.date_format().hint();
                self.notify(Notification::error(format!(
                    "Please enter a valid date ({}) and amount.",
                    hint
                )));
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    fn save_edit(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let edit = self.form.edit_against(session.snapshot());
        if edit.is_empty() {
            self.notify(Notification::warning("Nothing to change."));
            self.cancel_edit();
            return;
        }

        match self
            .service
            .save_edit(EntryPoint::FormEdit, &session, &edit)
        {
            Ok(outcome) => {
                if outcome.amount_retained() {
                    self.notify(Notification::warning(
                        "Invalid amount. Keeping previous value.",
                    ));
                }
                self.notify(Notification::success("Expense updated successfully."));
                self.cancel_edit();
                self.refresh();
            }
            Err(LedgerError::InvalidInput(_)) => {
                let hint = self.form.date_format().hint();
                self.notify(Notification::error(format!(
                    "Invalid date. Please use {}.",
                    hint
                )));
            }
            Err(e @ (LedgerError::StaleSelection { .. } | LedgerError::OutOfRange { .. })) => {
                self.notify(Notification::error(e.to_string()));
                self.cancel_edit();
                self.refresh();
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Load the highlighted expense into the form for editing
    pub fn edit_selected(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            self.notify(Notification::warning("Please select an expense to edit."));
            return;
        };
        let format = self.service.date_format(EntryPoint::FormEdit);
        self.form = FormState::for_edit(&record, format);
        self.session = Some(EditSession::new(self.selected + 1, record));
        self.set_focus(Focus::Form);
    }

    /// Leave edit mode and return to an empty add form
    pub fn cancel_edit(&mut self) {
        self.session = None;
        self.form = FormState::for_add(self.service.date_format(EntryPoint::FormAdd));
        self.form.set_active(self.focus == Focus::Form);
    }

    /// Ask for confirmation before removing the highlighted expense
    pub fn request_remove(&mut self) {
        let Some(record) = self.selected_record().cloned() else {
            self.notify(Notification::warning("Please select an expense to remove."));
            return;
        };
        self.dialog = ActiveDialog::ConfirmRemove {
            position: self.selected + 1,
            record,
        };
    }

    pub fn confirm_remove(&mut self) {
        let ActiveDialog::ConfirmRemove { position, .. } = std::mem::take(&mut self.dialog)
        else {
            return;
        };

        match self.service.remove(position) {
            Ok(_) => {
                self.notify(Notification::success("Expense removed successfully."));
                // positions after the removed row have shifted
                if self
                    .session
                    .as_ref()
                    .is_some_and(|s| s.position() >= position)
                {
                    self.cancel_edit();
                }
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
        self.refresh();
    }

    pub fn show_summary(&mut self) {
        match self.service.summary() {
            Ok(totals) => self.dialog = ActiveDialog::Summary(totals),
            Err(LedgerError::NotFound(_)) => {
                self.notify(Notification::warning("No expenses file found."))
            }
            Err(LedgerError::InvalidFormat(_)) => self.notify(Notification::error(
                "CSV file format is invalid. Please check headers.",
            )),
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::ExpenseInput;
    use crate::storage::ExpenseStore;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        store.initialize().unwrap();
        (temp_dir, store)
    }

    fn fill(app: &mut App, date: &str, category: &str, amount: &str) {
        app.form.clear();
        app.form.date.set_value(date);
        app.form.category.set_value(category);
        app.form.amount.set_value(amount);
    }

    #[test]
    fn test_add_from_form() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let mut app = App::new(&service, "TL");
        assert!(app.records.is_empty());

        fill(&mut app, "15-01-2025", "Food", "10");
        app.submit();

        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].amount, "10.0");
        assert_eq!(app.form.values(), ExpenseInput::default());
        assert_eq!(
            app.notifications.latest().unwrap().message,
            "Expense added successfully!"
        );
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let mut app = App::new(&service, "TL");

        fill(&mut app, "2025-01-15", "Food", "10");
        app.submit();

        assert!(app.records.is_empty());
        assert!(app
            .notifications
            .latest()
            .unwrap()
            .message
            .contains("DD-MM-YYYY"));
        assert_eq!(app.form.category.value(), "Food");
    }

    #[test]
    fn test_edit_selected_and_save() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        service
            .add(
                EntryPoint::FormAdd,
                &ExpenseInput::new("15-01-2025", "Food", "10", "lunch"),
            )
            .unwrap();
        let mut app = App::new(&service, "TL");

        app.edit_selected();
        assert!(app.is_editing());
        assert_eq!(app.form.category.value(), "Food");

        app.form.amount.set_value("12.5");
        app.submit();

        assert!(!app.is_editing());
        assert_eq!(
            app.records[0],
            Record::new("15-01-2025", "Food", "12.5", "lunch")
        );
    }

    #[test]
    fn test_edit_bad_amount_keeps_previous() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        service
            .add(
                EntryPoint::FormAdd,
                &ExpenseInput::new("15-01-2025", "Food", "10", ""),
            )
            .unwrap();
        let mut app = App::new(&service, "TL");

        app.edit_selected();
        app.form.amount.set_value("ten");
        app.form.category.set_value("Dining");
        app.submit();

        assert_eq!(app.records[0].amount, "10.0");
        assert_eq!(app.records[0].category, "Dining");
        let messages: Vec<_> = app
            .notifications
            .current()
            .into_iter()
            .map(|n| n.message.clone())
            .collect();
        assert_eq!(messages, vec!["Invalid amount. Keeping previous value."]);
    }

    #[test]
    fn test_stale_edit_is_refused() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        for (category, amount) in [("Food", "10"), ("Bus", "2")] {
            service
                .add(
                    EntryPoint::FormAdd,
                    &ExpenseInput::new("15-01-2025", category, amount, ""),
                )
                .unwrap();
        }
        let mut app = App::new(&service, "TL");
        app.move_down();
        app.edit_selected();

        // another process rewrites the row under the session
        service
            .edit(
                EntryPoint::FormEdit,
                2,
                &crate::models::RecordEdit::amount("99"),
            )
            .unwrap();

        app.form.category.set_value("Taxi");
        app.submit();

        assert!(!app.is_editing());
        assert_eq!(app.records[1].category, "Bus");
        assert_eq!(
            app.notifications.latest().unwrap().kind,
            crate::tui::widgets::NotificationKind::Error
        );
    }

    #[test]
    fn test_remove_with_confirmation() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        service
            .add(
                EntryPoint::FormAdd,
                &ExpenseInput::new("15-01-2025", "Food", "10", ""),
            )
            .unwrap();
        let mut app = App::new(&service, "TL");

        app.request_remove();
        assert!(matches!(
            app.dialog,
            ActiveDialog::ConfirmRemove { position: 1, .. }
        ));

        app.confirm_remove();
        assert!(!app.has_dialog());
        assert!(app.records.is_empty());
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_actions_without_selection_warn() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let mut app = App::new(&service, "TL");

        app.request_remove();
        app.edit_selected();

        assert!(!app.has_dialog());
        assert!(!app.is_editing());
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_summary_popup() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        for amount in ["10", "5"] {
            service
                .add(
                    EntryPoint::FormAdd,
                    &ExpenseInput::new("15-01-2025", "Food", amount, ""),
                )
                .unwrap();
        }
        let mut app = App::new(&service, "TL");

        app.show_summary();
        match &app.dialog {
            ActiveDialog::Summary(totals) => assert_eq!(totals.get("Food"), Some(15.0)),
            other => panic!("unexpected dialog {:?}", other),
        }
    }
}
