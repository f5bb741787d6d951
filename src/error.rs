//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the ledger using thiserror.
//! Every variant is recoverable: adapters turn them into a message for the
//! user and carry on.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Settings serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A date or amount supplied by the user did not parse
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The ledger header is missing or altered
    #[error("Invalid ledger format: {0}")]
    InvalidFormat(String),

    /// The ledger file does not exist
    #[error("Ledger file not found: {0}")]
    NotFound(String),

    /// A position outside the current rows
    #[error("Position {position} is out of range (ledger has {count} expenses)")]
    OutOfRange { position: usize, count: usize },

    /// The row under an editing session changed since it was opened
    #[error("Expense #{position} changed since it was selected; reload and try again")]
    StaleSelection { position: usize },
}

impl LedgerError {
    /// Create an "invalid input" error for a date that failed to parse
    pub fn invalid_date(value: &str, hint: &str) -> Self {
        Self::InvalidInput(format!(
            "invalid date '{}', expected {}",
            value, hint
        ))
    }

    /// Create an "invalid input" error for an amount that failed to parse
    pub fn invalid_amount(value: &str) -> Self {
        Self::InvalidInput(format!("invalid amount '{}', expected a number", value))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an out-of-range selection
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
