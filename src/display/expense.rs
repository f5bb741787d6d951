//! Expense display formatting
//!
//! Amounts are shown with two decimals followed by the currency label.
//! A stored amount that does not parse is shown as stored.

use crate::models::{CategoryTotals, Record};

const LIST_RULE: usize = 50;
const NUMBERED_RULE: usize = 60;
const SUMMARY_RULE: usize = 35;

/// Format an amount for display, falling back to the stored text
pub fn format_amount_cell(record: &Record, width: usize) -> String {
    match record.amount_value() {
        Some(amount) => format!("{:>width$.2}", amount, width = width),
        None => format!("{:>width$}", record.amount, width = width),
    }
}

/// Format a single expense line
pub fn format_expense_row(record: &Record, currency: &str) -> String {
    format!(
        "{} | {:<10} | {} {} | {}",
        record.date,
        record.category,
        format_amount_cell(record, 8),
        currency,
        record.description
    )
}

/// Format all expenses
pub fn format_expense_list(records: &[Record], currency: &str) -> String {
    if records.is_empty() {
        return "No expenses found!\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Your Expenses:\n");
    output.push_str(&"-".repeat(LIST_RULE));
    output.push('\n');

    for record in records {
        output.push_str(&format_expense_row(record, currency));
        output.push('\n');
    }

    output.push_str(&"-".repeat(LIST_RULE));
    output.push('\n');
    output
}

/// Format expenses with their 1-based positions, for picking one
pub fn format_numbered_list(records: &[Record], currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Expenses:\n");
    output.push_str(&"-".repeat(NUMBERED_RULE));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{}. {}\n",
            i + 1,
            format_expense_row(record, currency)
        ));
    }

    output.push_str(&"-".repeat(NUMBERED_RULE));
    output.push('\n');
    output
}

/// Format per-category totals
pub fn format_summary(totals: &CategoryTotals, currency: &str) -> String {
    if totals.is_empty() {
        return "No expenses to summarize.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Summary by Category:\n");
    output.push_str(&"-".repeat(SUMMARY_RULE));
    output.push('\n');

    for (category, total) in totals.iter() {
        output.push_str(&format!(
            "{:<15} : {:>8.2} {}\n",
            category, total, currency
        ));
    }

    output.push_str(&"-".repeat(SUMMARY_RULE));
    output.push('\n');
    output.push_str(&format!(
        "{:<15} : {:>8.2} {}\n",
        "Total",
        totals.grand_total(),
        currency
    ));
    output
}

/// Confirmation line for a removed expense
pub fn format_removed(record: &Record, currency: &str) -> String {
    format!(
        "Removed: {} | {} | {} {} | {}",
        record.date, record.category, record.amount, currency, record.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_expense_row() {
        let record = Record::new("15-01-2025", "Food", "12.5", "lunch");
        assert_eq!(
            format_expense_row(&record, "TL"),
            "15-01-2025 | Food       |    12.50 TL | lunch"
        );
    }

    #[test]
    fn test_unparseable_amount_shown_as_stored() {
        let record = Record::new("15-01-2025", "Food", "oops", "");
        assert!(format_expense_row(&record, "TL").contains("    oops TL"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_expense_list(&[], "TL"), "No expenses found!\n");
    }

    #[test]
    fn test_numbered_list_positions() {
        let records = vec![
            Record::new("01-01-2025", "Rent", "500", ""),
            Record::new("02-01-2025", "Food", "10", ""),
        ];
        let output = format_numbered_list(&records, "TL");
        assert!(output.contains("1. 01-01-2025 | Rent"));
        assert!(output.contains("2. 02-01-2025 | Food"));
    }

    #[test]
    fn test_format_summary() {
        let mut totals = CategoryTotals::new();
        totals.add("Food", 15.0);
        totals.add("Bus", 2.5);

        let output = format_summary(&totals, "TL");
        assert!(output.contains("Food            :    15.00 TL"));
        assert!(output.contains("Bus             :     2.50 TL"));
        assert!(output.ends_with("---\nTotal           :    17.50 TL\n"));
        assert_eq!(
            format_summary(&CategoryTotals::new(), "TL"),
            "No expenses to summarize.\n"
        );
    }
}
