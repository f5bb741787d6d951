//! Expense entry form state
//!
//! Four labelled inputs shared by add and edit. In edit mode the inputs are
//! prefilled from the selected record, and only fields that differ from it
//! are sent as replacements.

use crate::models::{DateFormat, Record, RecordEdit};
use crate::services::ExpenseInput;

use super::widgets::TextInput;

/// Which input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Amount,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Description,
            Self::Description => Self::Date,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Description,
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Description => Self::Amount,
        }
    }
}

/// State of the entry form
#[derive(Debug, Clone)]
pub struct FormState {
    pub focused: FormField,
    pub date: TextInput,
    pub category: TextInput,
    pub amount: TextInput,
    pub description: TextInput,
    date_format: DateFormat,
}

impl FormState {
    /// An empty form for a new expense
    pub fn for_add(date_format: DateFormat) -> Self {
        let mut form = Self {
            focused: FormField::Date,
            date: TextInput::new(format!("Date ({})", date_format.hint()))
                .placeholder(date_format.hint()),
            category: TextInput::new("Category").placeholder("e.g. Food"),
            amount: TextInput::new("Amount").placeholder("0.00"),
            description: TextInput::new("Description"),
            date_format,
        };
        form.sync_focus();
        form
    }

    /// A form prefilled from an existing record
    pub fn for_edit(record: &Record, date_format: DateFormat) -> Self {
        let mut form = Self::for_add(date_format);
        form.date.set_value(record.date.as_str());
        form.category.set_value(record.category.as_str());
        form.amount.set_value(record.amount.as_str());
        form.description.set_value(record.description.as_str());
        form
    }

    pub fn date_format(&self) -> DateFormat {
        self.date_format
    }

    /// Current field text as input for a new expense
    pub fn values(&self) -> ExpenseInput {
        ExpenseInput::new(
            self.date.value(),
            self.category.value(),
            self.amount.value(),
            self.description.value(),
        )
    }

    /// Replacements for the fields that differ from `snapshot`
    ///
    /// A field cleared by the user is a replacement with empty text, so a
    /// description can be removed. An emptied amount is then rejected and
    /// the previous amount kept.
    pub fn edit_against(&self, snapshot: &Record) -> RecordEdit {
        fn changed(value: &str, current: &str) -> Option<String> {
            (value != current).then(|| value.to_string())
        }

        RecordEdit {
            date: changed(self.date.value(), &snapshot.date),
            category: changed(self.category.value(), &snapshot.category),
            amount: changed(self.amount.value(), &snapshot.amount),
            description: changed(self.description.value(), &snapshot.description),
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused {
            FormField::Date => &mut self.date,
            FormField::Category => &mut self.category,
            FormField::Amount => &mut self.amount,
            FormField::Description => &mut self.description,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = self.focused.next();
        self.sync_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused = self.focused.prev();
        self.sync_focus();
    }

    /// Show or hide the cursor, e.g. when focus moves to the table
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.sync_focus();
        } else {
            for input in self.inputs_mut() {
                input.focused = false;
            }
        }
    }

    pub fn clear(&mut self) {
        for input in self.inputs_mut() {
            input.clear();
        }
        self.focused = FormField::Date;
        self.sync_focus();
    }

    fn inputs_mut(&mut self) -> [&mut TextInput; 4] {
        [
            &mut self.date,
            &mut self.category,
            &mut self.amount,
            &mut self.description,
        ]
    }

    fn sync_focus(&mut self) {
        let focused = self.focused;
        self.date.focused = focused == FormField::Date;
        self.category.focused = focused == FormField::Category;
        self.amount.focused = focused == FormField::Amount;
        self.description.focused = focused == FormField::Description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.focused_input_mut().insert(c);
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Description.next(), FormField::Date);
        assert_eq!(FormField::Date.prev(), FormField::Description);

        let mut form = FormState::for_add(DateFormat::DayMonthYear);
        assert!(form.date.focused);
        form.next_field();
        assert!(form.category.focused);
        assert!(!form.date.focused);
    }

    #[test]
    fn test_values_from_typing() {
        let mut form = FormState::for_add(DateFormat::DayMonthYear);
        type_into(&mut form, "15-01-2025");
        form.next_field();
        type_into(&mut form, "Food");
        form.next_field();
        type_into(&mut form, "10");

        assert_eq!(
            form.values(),
            ExpenseInput::new("15-01-2025", "Food", "10", "")
        );
        assert!(form.date.label.contains("DD-MM-YYYY"));
    }

    #[test]
    fn test_edit_against_sends_only_changes() {
        let record = Record::new("2025-01-15", "Food", "10.0", "lunch");
        let mut form = FormState::for_edit(&record, DateFormat::YearMonthDay);
        assert_eq!(form.amount.value(), "10.0");
        assert!(form.edit_against(&record).is_empty());

        form.focused = FormField::Category;
        form.focused_input_mut().clear();
        type_into(&mut form, "Dining");
        form.description.clear();

        let edit = form.edit_against(&record);
        assert_eq!(edit.category.as_deref(), Some("Dining"));
        assert_eq!(edit.description.as_deref(), Some(""));
        assert!(edit.date.is_none());
        assert!(edit.amount.is_none());
    }

    #[test]
    fn test_clear_and_inactive() {
        let record = Record::new("2025-01-15", "Food", "10.0", "lunch");
        let mut form = FormState::for_edit(&record, DateFormat::YearMonthDay);
        form.next_field();
        form.set_active(false);
        assert!(!form.category.focused);

        form.clear();
        assert_eq!(form.values(), ExpenseInput::default());
        assert_eq!(form.focused, FormField::Date);
        assert!(form.date.focused);
    }
}
