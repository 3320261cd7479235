//! Spreadsheet table reader (XLS, XLSX, XLSB, ODS)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use tracing::debug;

use crate::table::{IoError, IoResult, RawTable};

/// Read the first worksheet of a workbook into a raw table.
///
/// Bibliographic database exports carry a single sheet; additional sheets
/// are ignored. The first row is the header row.
pub fn read_sheet_table(path: &Path) -> IoResult<RawTable> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let mut workbook =
        open_workbook_auto(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| IoError::EmptyWorkbook(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_to_string).collect::<Vec<_>>(),
        None => Vec::new(),
    };

    let mut table = RawTable::new(headers);
    for row in rows {
        table.push_row(row.iter().map(cell_to_string).collect());
    }

    debug!(
        path = %path.display(),
        sheet = %first,
        rows = table.num_rows(),
        columns = table.num_columns(),
        "read worksheet"
    );
    Ok(table)
}

/// Stringify a cell. Whole-number floats come out without a decimal point,
/// so a year cell stored as `2020.0` reads as `"2020"`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            }
        }
        Data::Int(n) => n.to_string(),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::Error(e) => format!("#{:?}", e),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}
