//! Expense record model
//!
//! A `Record` is one data row of the ledger table. Its fields are kept as
//! the text found on disk so that rows written by hand (or by older tools)
//! survive a rewrite unchanged, even when their amount does not parse.

use std::fmt;

use super::date_format::DateFormat;
use crate::error::{LedgerError, LedgerResult};

/// One expense entry
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub date: String,
    pub category: String,
    /// Amount as stored; see [`Record::amount_value`]
    pub amount: String,
    pub description: String,
}

impl Record {
    /// Create a record from its four fields
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

    /// The parsed amount, if the stored text is a finite number
    pub fn amount_value(&self) -> Option<f64> {
        parse_amount(&self.amount)
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; 4] {
        [&self.date, &self.category, &self.amount, &self.description]
    }

    /// Apply an edit, returning the edited record
    ///
    /// Absent fields keep their current value. A supplied amount that does
    /// not parse is dropped and the current amount kept; the outcome says so.
    pub fn apply(&self, edit: &RecordEdit) -> (Record, EditOutcome) {
        let mut outcome = EditOutcome::Applied;

        let amount = match edit.amount.as_deref() {
            Some(raw) => match parse_amount(raw) {
                Some(value) => format_amount(value),
                None => {
                    outcome = EditOutcome::AmountRetained {
                        rejected: raw.to_string(),
                    };
                    self.amount.clone()
                }
            },
            None => self.amount.clone(),
        };

        let edited = Record {
            date: edit.date.clone().unwrap_or_else(|| self.date.clone()),
            category: edit
                .category
                .clone()
                .unwrap_or_else(|| self.category.clone()),
            amount,
            description: edit
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
        };

        (edited, outcome)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date, self.category, self.amount, self.description
        )
    }
}

/// A record whose date and amount have been validated
///
/// The only way to build one is [`NewRecord::parse`], so the store can append
/// it without checking again.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    record: Record,
    amount: f64,
}

impl NewRecord {
    /// Validate raw field text against the given date format
    ///
    /// The date is stored as entered (trimmed). The amount is stored in its
    /// normalized numeric form, so `"12"` is written as `12.0`.
    pub fn parse(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
        date_format: DateFormat,
    ) -> LedgerResult<Self> {
        let date = date.trim();
        date_format.parse(date)?;

        let value = parse_amount(amount).ok_or_else(|| LedgerError::invalid_amount(amount))?;

        Ok(Self {
            record: Record::new(date, category, format_amount(value), description),
            amount: value,
        })
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// The validated amount
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}

/// Replacement values for an edit; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEdit {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl RecordEdit {
    /// Build an edit from prompt answers, where a blank answer keeps the old value
    pub fn from_answers(date: &str, category: &str, amount: &str, description: &str) -> Self {
        fn keep_if_blank(value: &str) -> Option<String> {
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }

        Self {
            date: keep_if_blank(date),
            category: keep_if_blank(category),
            amount: keep_if_blank(amount),
            description: keep_if_blank(description),
        }
    }

    /// Replace only the amount
    pub fn amount(amount: impl Into<String>) -> Self {
        Self {
            amount: Some(amount.into()),
            ..Self::default()
        }
    }

    /// Check if the edit changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
    }
}

/// What an edit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Every supplied field was written
    Applied,
    /// The supplied amount did not parse; the previous amount was kept
    AmountRetained { rejected: String },
}

impl EditOutcome {
    pub fn amount_retained(&self) -> bool {
        matches!(self, Self::AmountRetained { .. })
    }
}

/// Parse an amount, accepting any finite number with surrounding whitespace
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
}

/// Format an amount the way it is stored on disk
///
/// Integral values keep one decimal place (`10.0`); everything else uses the
/// shortest text that parses back to the same value. Magnitudes of `1e16`
/// and above, or below `1e-4`, switch to exponent form with a signed,
/// two-digit exponent (`1e+20`, `1.5e-07`).
pub fn format_amount(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{:e}", value);
        return match scientific.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => scientific,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
