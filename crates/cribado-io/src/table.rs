//! Raw table model and I/O error types
//!
//! A `RawTable` is the interchange form between file formats and the
//! record mapper: one header row plus string data rows, no typing.

use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing table files
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("Workbook contains no sheets: {0}")]
    EmptyWorkbook(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for table I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// An untyped table: one header row plus data rows.
///
/// All cells are strings; absent cells are empty strings. Rows are padded
/// to the header width so every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Read a table file, auto-detecting the format from the extension.
///
/// `.csv` and `.txt` go through the delimited reader; `.xls`, `.xlsx`,
/// `.xlsb` and `.ods` through the spreadsheet reader.
pub fn read_table(path: &Path) -> IoResult<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" | "txt" => crate::csv_table::read_csv_table(path),
        "xls" | "xlsx" | "xlsb" | "ods" => crate::sheet_table::read_sheet_table(path),
        _ => Err(IoError::UnsupportedExtension(ext)),
    }
}
