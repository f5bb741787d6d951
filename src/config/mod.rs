//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (currency, date format per entry point)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{DateFormats, EntryPoint, Settings};
