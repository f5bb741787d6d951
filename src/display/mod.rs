//! Display formatting for terminal output
//!
//! Fixed-width text used by the menu and the subcommands.

pub mod expense;

pub use expense::{
    format_amount_cell, format_expense_list, format_expense_row, format_numbered_list,
    format_removed, format_summary,
};
