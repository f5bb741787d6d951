//! Expense store over the CSV ledger
//!
//! Implements initialize, append, list, per-category summary, and
//! positional remove/edit on top of the primitives in `file_io`.

use std::path::{Path, PathBuf};

use csv::StringRecord;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{CategoryTotals, EditOutcome, NewRecord, Record, RecordEdit};

use super::file_io::{
    append_row, header_row, is_canonical_header, is_missing_or_empty, read_rows, write_rows,
    HEADER,
};
use super::session::EditSession;

/// The whole table held in memory for one read-modify-write cycle
struct Table {
    header: Option<StringRecord>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Map a 1-based position to a row index
    fn index_of(&self, position: usize) -> LedgerResult<usize> {
        if position == 0 || position > self.rows.len() {
            return Err(LedgerError::OutOfRange {
                position,
                count: self.rows.len(),
            });
        }
        Ok(position - 1)
    }

    fn all_rows(&self) -> impl Iterator<Item = &StringRecord> {
        self.header.iter().chain(self.rows.iter())
    }
}

/// Store for expense records backed by a single CSV file
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store for the ledger at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the ledger exists and starts with the header
    ///
    /// Creates the file (and its parent directory) when it is missing or
    /// empty. A non-empty file is never touched. Returns `true` if the file
    /// was created.
    pub fn initialize(&self) -> LedgerResult<bool> {
        if !is_missing_or_empty(&self.path)? {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    LedgerError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        write_rows(&self.path, &[header_row()])?;
        log::info!("created ledger {}", self.path.display());
        Ok(true)
    }

    /// Append a validated record as the last row
    pub fn append(&self, new: &NewRecord) -> LedgerResult<()> {
        self.initialize()?;

        let record = new.record();
        append_row(&self.path, &record.fields())?;
        log::info!(
            "appended expense {} {} {}",
            record.date,
            record.category,
            record.amount
        );
        Ok(())
    }

    /// All data rows in file order
    pub fn list_all(&self) -> LedgerResult<Vec<Record>> {
        let table = self.load_table()?;
        Ok(table.rows.iter().map(record_from_row).collect())
    }

    /// Sum amounts per category
    ///
    /// Refuses to run unless the first row is the canonical header. Rows whose
    /// amount does not parse are skipped.
    pub fn summarize_by_category(&self) -> LedgerResult<CategoryTotals> {
        let table = self.load_table()?;

        match &table.header {
            Some(header) if is_canonical_header(header) => {}
            Some(header) => {
                return Err(LedgerError::InvalidFormat(format!(
                    "expected header {}, found {}",
                    HEADER.join(","),
                    header.iter().collect::<Vec<_>>().join(",")
                )))
            }
            None => {
                return Err(LedgerError::InvalidFormat(format!(
                    "expected header {}, found an empty file",
                    HEADER.join(",")
                )))
            }
        }

        let mut totals = CategoryTotals::new();
        for (i, row) in table.rows.iter().enumerate() {
            let record = record_from_row(row);
            match record.amount_value() {
                Some(amount) => totals.add(&record.category, amount),
                None => log::warn!(
                    "skipping expense #{} with unparseable amount '{}'",
                    i + 1,
                    record.amount
                ),
            }
        }

        Ok(totals)
    }

    /// Remove the record at a 1-based position
    ///
    /// Later records move up one position. Returns the removed record.
    pub fn remove_at(&self, position: usize) -> LedgerResult<Record> {
        let mut table = self.load_table()?;
        let index = table.index_of(position)?;

        let removed = record_from_row(&table.rows.remove(index));
        self.replace_all(&table)?;

        log::info!("removed expense #{}: {}", position, removed);
        Ok(removed)
    }

    /// Edit the record at a 1-based position
    ///
    /// Absent fields keep their value. An amount that does not parse keeps
    /// the previous amount and is reported through the outcome, not as an
    /// error.
    pub fn edit_at(&self, position: usize, edit: &RecordEdit) -> LedgerResult<EditOutcome> {
        self.rewrite_row(position, None, edit)
    }

    /// Open an editing session on the record at a 1-based position
    pub fn begin_edit(&self, position: usize) -> LedgerResult<EditSession> {
        let table = self.load_table()?;
        let index = table.index_of(position)?;
        Ok(EditSession::new(position, record_from_row(&table.rows[index])))
    }

    /// Save an edit through a session
    ///
    /// Fails with `StaleSelection` if the row at the session's position no
    /// longer matches its snapshot.
    pub fn save_edit(&self, session: &EditSession, edit: &RecordEdit) -> LedgerResult<EditOutcome> {
        self.rewrite_row(session.position(), Some(session.snapshot()), edit)
    }

    fn rewrite_row(
        &self,
        position: usize,
        expected: Option<&Record>,
        edit: &RecordEdit,
    ) -> LedgerResult<EditOutcome> {
        let mut table = self.load_table()?;
        let index = table.index_of(position)?;

        let current = record_from_row(&table.rows[index]);
        if let Some(expected) = expected {
            if *expected != current {
                return Err(LedgerError::StaleSelection { position });
            }
        }

        let (edited, outcome) = current.apply(edit);
        if let EditOutcome::AmountRetained { rejected } = &outcome {
            log::warn!(
                "invalid amount '{}' for expense #{}, keeping {}",
                rejected,
                position,
                current.amount
            );
        }

        table.rows[index] = StringRecord::from(edited.fields().to_vec());
        self.replace_all(&table)?;

        log::info!("edited expense #{}: {}", position, edited);
        Ok(outcome)
    }

    fn load_table(&self) -> LedgerResult<Table> {
        let mut rows = read_rows(&self.path)?.into_iter();
        let header = rows.next();
        Ok(Table {
            header,
            rows: rows.collect(),
        })
    }

    fn replace_all(&self, table: &Table) -> LedgerResult<()> {
        write_rows(&self.path, table.all_rows())
    }
}

/// Build a record from a raw row, padding missing fields with empty text
fn record_from_row(row: &StringRecord) -> Record {
    let field = |i: usize| row.get(i).unwrap_or("").to_string();
    Record {
        date: field(0),
        category: field(1),
        amount: field(2),
        description: field(3),
    }
}
