//! Date formats accepted at the ledger's entry points

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LedgerError, LedgerResult};

/// Ordering of a textual date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// `DD-MM-YYYY`
    #[serde(rename = "DD-MM-YYYY")]
    DayMonthYear,
    /// `YYYY-MM-DD`
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
}

impl DateFormat {
    /// The strftime pattern for this format
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "%d-%m-%Y",
            Self::YearMonthDay => "%Y-%m-%d",
        }
    }

    /// Human-readable hint shown in prompts and error messages
    pub fn hint(&self) -> &'static str {
        match self {
            Self::DayMonthYear => "DD-MM-YYYY",
            Self::YearMonthDay => "YYYY-MM-DD",
        }
    }

    /// Parse a date in this format
    pub fn parse(&self, value: &str) -> LedgerResult<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), self.pattern())
            .map_err(|_| LedgerError::invalid_date(value, self.hint()))
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_first() {
        let date = DateFormat::DayMonthYear.parse("15-01-2025").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_year_first() {
        let date = DateFormat::YearMonthDay.parse("2025-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_formats_are_not_interchangeable() {
        assert!(DateFormat::DayMonthYear.parse("2025-01-15").is_err());
        assert!(DateFormat::YearMonthDay.parse("15-01-2025").is_err());
    }

    #[test]
    fn test_rejects_impossible_dates() {
        let err = DateFormat::DayMonthYear.parse("31-02-2025").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("DD-MM-YYYY"));
    }

    #[test]
    fn test_serde_uses_hint() {
        let json = serde_json::to_string(&DateFormat::YearMonthDay).unwrap();
        assert_eq!(json, "\"YYYY-MM-DD\"");
        let back: DateFormat = serde_json::from_str("\"DD-MM-YYYY\"").unwrap();
        assert_eq!(back, DateFormat::DayMonthYear);
    }
}
