//! Expense Ledger - a personal expense log kept in a CSV file
//!
//! Records dated, categorized expenses in a single flat table and offers two
//! interactive front-ends over it: a numbered text menu and a terminal form.
//! Every store operation is also available as a subcommand.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and settings
//! - `error`: Custom error types
//! - `models`: Expense records, edits, date formats and category totals
//! - `storage`: The CSV-backed expense store
//! - `services`: Per-entry-point validation over the store
//! - `display`: Text formatting shared by the menu and subcommands
//! - `cli`: Subcommands and the interactive text menu
//! - `tui`: The terminal form
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::{EntryPoint, LedgerPaths, Settings};
//! use expense_ledger::services::{ExpenseInput, ExpenseService};
//! use expense_ledger::storage::ExpenseStore;
//!
//! let paths = LedgerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = ExpenseStore::new(settings.ledger_path(&paths));
//! let service = ExpenseService::new(&store, &settings);
//! service.add(EntryPoint::MenuAdd, &ExpenseInput::new("15-01-2025", "Food", "10", ""))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::LedgerError;
