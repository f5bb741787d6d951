//! Storage layer for the expense ledger
//!
//! The ledger is a single CSV table. Every operation opens the file, does its
//! work, and closes it again; nothing is cached between calls.
//!
//! Mutations read the whole table, change it in memory, and rewrite the whole
//! file in place. There is no locking, so two processes editing the same
//! ledger can lose each other's updates, and a crash during a rewrite can
//! leave a truncated file. Positions handed out by [`ExpenseStore::list_all`]
//! are only meaningful until the next mutation.

pub mod expenses;
pub mod file_io;
pub mod session;

pub use expenses::ExpenseStore;
pub use file_io::HEADER;
pub use session::EditSession;
