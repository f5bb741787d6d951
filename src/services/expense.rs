//! Expense service
//!
//! Wraps [`ExpenseStore`] with per-entry-point validation. The text menu and
//! the form disagree on date ordering; the service asks the settings which
//! format applies instead of guessing.

use crate::config::{EntryPoint, Settings};
use crate::error::LedgerResult;
use crate::models::{CategoryTotals, DateFormat, EditOutcome, NewRecord, Record, RecordEdit};
use crate::storage::{EditSession, ExpenseStore};

/// Raw field text for a new expense
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
    settings: &'a Settings,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &ExpenseStore {
        self.store
    }

    /// The date format expected at an entry point
    pub fn date_format(&self, entry: EntryPoint) -> DateFormat {
        self.settings.date_formats.for_entry(entry)
    }

    /// Validate and append a new expense
    pub fn add(&self, entry: EntryPoint, input: &ExpenseInput) -> LedgerResult<NewRecord> {
        let new = NewRecord::parse(
            &input.date,
            &input.category,
            &input.amount,
            &input.description,
            self.date_format(entry),
        )?;
        self.store.append(&new)?;
        Ok(new)
    }

    /// All expenses in ledger order
    pub fn list(&self) -> LedgerResult<Vec<Record>> {
        self.store.list_all()
    }

    /// Totals per category
    pub fn summary(&self) -> LedgerResult<CategoryTotals> {
        self.store.summarize_by_category()
    }

    /// Remove the expense at a 1-based position
    pub fn remove(&self, position: usize) -> LedgerResult<Record> {
        self.store.remove_at(position)
    }

    /// Open an editing session on a position
    pub fn begin_edit(&self, position: usize) -> LedgerResult<EditSession> {
        self.store.begin_edit(position)
    }

    /// Save an edit made through a session
    ///
    /// A replacement date must match the entry point's format; nothing is
    /// written if it does not. A bad amount keeps the old one (see
    /// [`EditOutcome`]).
    pub fn save_edit(
        &self,
        entry: EntryPoint,
        session: &EditSession,
        edit: &RecordEdit,
    ) -> LedgerResult<EditOutcome> {
        self.validate_edit(entry, edit)?;
        self.store.save_edit(session, edit)
    }

    /// Edit the expense at a position without a prior selection
    pub fn edit(
        &self,
        entry: EntryPoint,
        position: usize,
        edit: &RecordEdit,
    ) -> LedgerResult<EditOutcome> {
        self.validate_edit(entry, edit)?;
        self.store.edit_at(position, edit)
    }

    fn validate_edit(&self, entry: EntryPoint, edit: &RecordEdit) -> LedgerResult<()> {
        if let Some(date) = &edit.date {
            self.date_format(entry).parse(date)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.csv"));
        store.initialize().unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_add_uses_entry_point_format() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);

        let day_first = ExpenseInput::new("15-01-2025", "Food", "10", "");
        let year_first = ExpenseInput::new("2025-01-15", "Food", "10", "");

        assert!(service.add(EntryPoint::MenuAdd, &day_first).is_ok());
        assert!(service
            .add(EntryPoint::MenuAdd, &year_first)
            .unwrap_err()
            .is_invalid_input());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_bad_amount_without_writing() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        let before = std::fs::read(store.path()).unwrap();

        let input = ExpenseInput::new("15-01-2025", "Food", "ten", "");
        assert!(service
            .add(EntryPoint::FormAdd, &input)
            .unwrap_err()
            .is_invalid_input());
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_edit_validates_date_for_entry_point() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        service
            .add(
                EntryPoint::MenuAdd,
                &ExpenseInput::new("15-01-2025", "Food", "10", ""),
            )
            .unwrap();

        let edit = RecordEdit {
            date: Some("16-01-2025".into()),
            ..RecordEdit::default()
        };
        assert!(service
            .edit(EntryPoint::MenuEdit, 1, &edit)
            .unwrap_err()
            .is_invalid_input());

        let edit = RecordEdit {
            date: Some("2025-01-16".into()),
            ..RecordEdit::default()
        };
        service.edit(EntryPoint::MenuEdit, 1, &edit).unwrap();
        assert_eq!(service.list().unwrap()[0].date, "2025-01-16");
    }

    #[test]
    fn test_session_round_trip() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        service
            .add(
                EntryPoint::FormAdd,
                &ExpenseInput::new("15-01-2025", "Food", "10", "lunch"),
            )
            .unwrap();

        let session = service.begin_edit(1).unwrap();
        let outcome = service
            .save_edit(EntryPoint::FormEdit, &session, &RecordEdit::amount("oops"))
            .unwrap();

        assert!(outcome.amount_retained());
        assert_eq!(service.list().unwrap()[0].amount, "10.0");
    }

    #[test]
    fn test_remove_and_summary() {
        let (_temp_dir, store) = create_test_store();
        let settings = Settings::default();
        let service = ExpenseService::new(&store, &settings);
        for (category, amount) in [("Food", "10"), ("Bus", "2"), ("Food", "5")] {
            service
                .add(
                    EntryPoint::MenuAdd,
                    &ExpenseInput::new("15-01-2025", category, amount, ""),
                )
                .unwrap();
        }

        let removed = service.remove(2).unwrap();
        assert_eq!(removed.category, "Bus");

        let totals = service.summary().unwrap();
        assert_eq!(totals.get("Food"), Some(15.0));
        assert_eq!(totals.get("Bus"), None);
    }
}
