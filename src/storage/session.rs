//! Editing sessions
//!
//! An `EditSession` is the explicit "which row am I editing" value. It pairs
//! the selected position with the record as it looked when selected, and is
//! handed back to [`ExpenseStore::save_edit`](super::ExpenseStore::save_edit).
//! The save is refused if the row at that position no longer matches the
//! snapshot, which catches most selections made stale by an intervening
//! remove or edit.

use crate::models::Record;

/// A selected row and the record it held when selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    position: usize,
    snapshot: Record,
}

impl EditSession {
    /// Open a session from a record shown at a 1-based position
    pub fn new(position: usize, snapshot: Record) -> Self {
        Self { position, snapshot }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The record as it was when the session was opened
    pub fn snapshot(&self) -> &Record {
        &self.snapshot
    }
}
