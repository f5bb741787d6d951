//! User settings for the expense ledger
//!
//! Manages the currency label, the expected date format of each entry point,
//! and an optional override of the ledger file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::models::DateFormat;

/// The places a user can type a date
///
/// The text menu and the form historically disagree on date ordering, and
/// the edit prompts disagree with the add prompts. Each entry point keeps its
/// own format instead of being unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    MenuAdd,
    MenuEdit,
    FormAdd,
    FormEdit,
}

/// Expected date format per entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormats {
    #[serde(default = "day_first")]
    pub menu_add: DateFormat,
    #[serde(default = "year_first")]
    pub menu_edit: DateFormat,
    #[serde(default = "day_first")]
    pub form_add: DateFormat,
    #[serde(default = "year_first")]
    pub form_edit: DateFormat,
}

fn day_first() -> DateFormat {
    DateFormat::DayMonthYear
}

fn year_first() -> DateFormat {
    DateFormat::YearMonthDay
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            menu_add: day_first(),
            menu_edit: year_first(),
            form_add: day_first(),
            form_edit: year_first(),
        }
    }
}

impl DateFormats {
    /// Get the date format expected at an entry point
    pub fn for_entry(&self, entry: EntryPoint) -> DateFormat {
        match entry {
            EntryPoint::MenuAdd => self.menu_add,
            EntryPoint::MenuEdit => self.menu_edit,
            EntryPoint::FormAdd => self.form_add,
            EntryPoint::FormEdit => self.form_edit,
        }
    }
}

/// User settings for the expense ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Label printed after amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format expected at each entry point
    #[serde(default)]
    pub date_formats: DateFormats,

    /// Ledger file location; defaults to `data/expenses.csv` under the base dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "TL".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            date_formats: DateFormats::default(),
            ledger_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                LedgerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Not persisted until the caller asks for it
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            LedgerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            LedgerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the ledger file path
    pub fn ledger_path(&self, paths: &LedgerPaths) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| paths.expenses_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "TL");
        assert_eq!(
            settings.date_formats.for_entry(EntryPoint::MenuAdd),
            DateFormat::DayMonthYear
        );
        assert_eq!(
            settings.date_formats.for_entry(EntryPoint::FormEdit),
            DateFormat::YearMonthDay
        );
        assert!(settings.ledger_file.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "EUR".into();
        settings.date_formats.menu_edit = DateFormat::DayMonthYear;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "EUR");
        assert_eq!(loaded.date_formats.menu_edit, DateFormat::DayMonthYear);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "$"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.date_formats, DateFormats::default());
    }

    #[test]
    fn test_ledger_path_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        assert_eq!(settings.ledger_path(&paths), paths.expenses_file());

        settings.ledger_file = Some(temp_dir.path().join("elsewhere.csv"));
        assert_eq!(
            settings.ledger_path(&paths),
            temp_dir.path().join("elsewhere.csv")
        );
    }
}
