//! CLI command handlers
//!
//! This module contains the clap subcommands and the interactive text menu,
//! both bridging user input to the expense service.

pub mod expense;
pub mod menu;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use menu::run_menu;
