//! Service layer for the expense ledger
//!
//! The service is the seam both front-ends call: it applies the date format
//! of the caller's entry point before handing work to the store.

pub mod expense;

pub use expense::{ExpenseInput, ExpenseService};
