//! Windowed expense form
//!
//! A terminal form built on ratatui: four labelled inputs, the expense
//! table, a summary popup and remove confirmation. All ledger access goes
//! through [`ExpenseService`](crate::services::ExpenseService).

pub mod app;
pub mod dialogs;
pub mod event;
pub mod form;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_form;
