//! CSV file primitives
//!
//! Load-all, append-one and replace-all over the ledger table. Rows are
//! handled as raw `StringRecord`s so malformed rows are carried through a
//! rewrite untouched.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{LedgerError, LedgerResult};

/// The canonical first row of the ledger table
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Description"];

#[cfg(windows)]
const LINE_TERMINATOR: Terminator = Terminator::CRLF;

#[cfg(not(windows))]
const LINE_TERMINATOR: Terminator = Terminator::Any(b'\n');

#[cfg(windows)]
const LINE_BREAK: &[u8] = b"\r\n";

#[cfg(not(windows))]
const LINE_BREAK: &[u8] = b"\n";

/// Check whether the file is absent or has zero length
pub fn is_missing_or_empty(path: &Path) -> LedgerResult<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len() == 0),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(LedgerError::Io(format!(
            "Failed to stat {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Read every row of the table, header included
pub fn read_rows(path: &Path) -> LedgerResult<Vec<StringRecord>> {
    if !path.exists() {
        return Err(LedgerError::NotFound(path.display().to_string()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LedgerError::Csv(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut rows = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| {
            LedgerError::Csv(format!(
                "Failed to read {} at row {}: {}",
                path.display(),
                line + 1,
                e
            ))
        })?;
        rows.push(row);
    }

    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Check whether a non-empty file's last byte is a line feed
fn ends_with_line_break(path: &Path) -> LedgerResult<bool> {
    let mut file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Append a single row to the end of the table
///
/// A file whose last line was left unterminated (usually by a hand edit)
/// gets a line break first, so the new row never joins the previous one.
pub fn append_row(path: &Path, fields: &[&str]) -> LedgerResult<()> {
    let needs_break = path.exists() && !ends_with_line_break(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    if needs_break {
        log::debug!("terminating last line of {}", path.display());
        file.write_all(LINE_BREAK)?;
    }

    let mut writer = WriterBuilder::new()
        .terminator(LINE_TERMINATOR)
        .from_writer(file);
    writer.write_record(fields)?;
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Replace the whole table with the given rows
///
/// Truncates and writes in place. Not crash-safe.
pub fn write_rows<'a, I>(path: &Path, rows: I) -> LedgerResult<()>
where
    I: IntoIterator<Item = &'a StringRecord>,
{
    let file = File::create(path)
        .map_err(|e| LedgerError::Io(format!("Failed to create {}: {}", path.display(), e)))?;

    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(LINE_TERMINATOR)
        .from_writer(file);

    let mut count = 0usize;
    for row in rows {
        writer.write_record(row)?;
        count += 1;
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    log::debug!("rewrote {} rows to {}", count, path.display());
    Ok(())
}

/// Check if a row is exactly the canonical header
pub fn is_canonical_header(row: &StringRecord) -> bool {
    row.len() == HEADER.len() && row.iter().zip(HEADER.iter()).all(|(a, b)| a == *b)
}

/// The canonical header as a row
pub fn header_row() -> StringRecord {
    StringRecord::from(HEADER.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        assert!(is_missing_or_empty(&path).unwrap());

        fs::write(&path, "").unwrap();
        assert!(is_missing_or_empty(&path).unwrap());

        fs::write(&path, "Date,Category,Amount,Description\n").unwrap();
        assert!(!is_missing_or_empty(&path).unwrap());
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_rows(&temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_append_quotes_embedded_delimiters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        append_row(&path, &HEADER).unwrap();
        append_row(&path, &["15-01-2025", "Food", "10.0", "bread, milk"]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"bread, milk\""));

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][3], "bread, milk");
    }

    #[test]
    fn test_append_after_unterminated_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        fs::write(&path, "Date,Category,Amount,Description").unwrap();

        append_row(&path, &["15-01-2025", "Food", "10.0", ""]).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(is_canonical_header(&rows[0]));
        assert_eq!(&rows[1][0], "15-01-2025");
    }

    #[test]
    fn test_write_rows_keeps_ragged_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");

        let rows = vec![
            header_row(),
            StringRecord::from(vec!["15-01-2025", "Food"]),
            StringRecord::from(vec!["16-01-2025", "Bus", "2.5", "", "extra"]),
        ];
        write_rows(&path, &rows).unwrap();

        let back = read_rows(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_canonical_header() {
        assert!(is_canonical_header(&header_row()));
        assert!(!is_canonical_header(&StringRecord::from(vec![
            "date", "category", "amount", "description"
        ])));
        assert!(!is_canonical_header(&StringRecord::from(vec![
            "Date", "Category", "Amount"
        ])));
    }
}
