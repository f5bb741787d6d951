//! Core data models for the expense ledger
//!
//! A ledger is an ordered list of records. Records carry their fields as
//! text exactly as stored; amounts are parsed on demand.

pub mod date_format;
pub mod record;
pub mod summary;

pub use date_format::DateFormat;
pub use record::{format_amount, parse_amount, EditOutcome, NewRecord, Record, RecordEdit};
pub use summary::CategoryTotals;
