//! Delimited-text table reader and writer

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::table::{IoError, IoResult, RawTable};

/// UTF-8 byte-order mark, written at the start of every exported file so
/// spreadsheet tools open the CSV with the right encoding.
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Read a comma-delimited file into a raw table.
///
/// The first row is the header row. A leading UTF-8 BOM is stripped by
/// the csv reader, so files written by [`write_csv_table`] read back
/// unchanged. Ragged rows are padded to the header width.
pub fn read_csv_table(path: &Path) -> IoResult<RawTable> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut table = RawTable::new(headers);
    for result in reader.records() {
        let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        table.push_row(record.iter().map(|s| s.to_string()).collect());
    }

    debug!(
        path = %path.display(),
        rows = table.num_rows(),
        columns = table.num_columns(),
        "read delimited table"
    );
    Ok(table)
}

/// Serialize a raw table to CSV bytes, prefixed with the UTF-8 BOM.
pub fn table_to_csv_bytes(table: &RawTable) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    buf.extend_from_slice(UTF8_BOM);

    let mut writer = csv::Writer::from_writer(&mut buf);
    writer
        .write_record(&table.headers)
        .map_err(|e| IoError::Io(e.to_string()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| IoError::Io(e.to_string()))?;
    }
    writer.flush().map_err(|e| IoError::Io(e.to_string()))?;
    drop(writer);

    Ok(buf)
}

/// Write a raw table to a CSV file with a UTF-8 BOM.
pub fn write_csv_table(table: &RawTable, path: &Path) -> IoResult<()> {
    let bytes = table_to_csv_bytes(table)?;
    let mut file = File::create(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    file.write_all(&bytes).map_err(|e| IoError::Io(e.to_string()))?;

    debug!(path = %path.display(), rows = table.num_rows(), "wrote delimited table");
    Ok(())
}
