//! CSV export views for the review session
//!
//! One file per partition, fixed names, UTF-8 with byte-order mark. The
//! file names are the ones reviewers already have in their download
//! folders, so they stay Spanish.

use std::path::{Path, PathBuf};

use cribado_io::{table_to_csv_bytes, write_csv_table, IoError, RawTable};
use thiserror::Error;
use tracing::info;

use crate::domain::RecordSet;
use crate::session::{ExclusionReason, ReviewSession};

pub const INCLUDED_FILE: &str = "articulos_finales_inclusion.csv";
pub const DUPLICATES_FILE: &str = "eliminados_duplicados.csv";
pub const EXCLUDED_TITLE_FILE: &str = "excluidos_por_titulo.csv";
pub const EXCLUDED_ABSTRACT_FILE: &str = "excluidos_por_resumen.csv";
pub const EXCLUDED_INACCESSIBLE_FILE: &str = "excluidos_por_inaccesibles.csv";

/// Export error type
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),
}

/// Export file name for an exclusion category.
pub fn excluded_file_name(reason: ExclusionReason) -> &'static str {
    match reason {
        ExclusionReason::Duplicate => DUPLICATES_FILE,
        ExclusionReason::Title => EXCLUDED_TITLE_FILE,
        ExclusionReason::Abstract => EXCLUDED_ABSTRACT_FILE,
        ExclusionReason::Inaccessible => EXCLUDED_INACCESSIBLE_FILE,
    }
}

/// Tabular view of a record set: canonical columns first, then extension
/// columns; rows in insertion order. An empty set yields a header-only
/// table.
pub fn record_set_to_table(set: &RecordSet) -> RawTable {
    let columns = set.columns();
    let mut table = RawTable::new(columns.clone());
    for record in set.iter() {
        table.push_row(columns.iter().map(|c| record.field_text(c)).collect());
    }
    table
}

/// BOM-prefixed CSV bytes for a record set (download-style export).
pub fn record_set_to_csv_bytes(set: &RecordSet) -> Result<Vec<u8>, ExportError> {
    Ok(table_to_csv_bytes(&record_set_to_table(set))?)
}

/// Write one record set to a CSV file.
pub fn write_record_set(set: &RecordSet, path: &Path) -> Result<(), ExportError> {
    write_csv_table(&record_set_to_table(set), path)?;
    Ok(())
}

/// Write all five session views into a directory. Returns the written
/// paths in the order included, duplicates, title, abstract, inaccessible.
pub fn write_session(session: &ReviewSession, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::with_capacity(5);

    let included_path = dir.join(INCLUDED_FILE);
    write_record_set(&session.snapshot_included(), &included_path)?;
    written.push(included_path);

    for reason in ExclusionReason::ALL {
        let path = dir.join(excluded_file_name(reason));
        write_record_set(&session.snapshot_excluded(reason), &path)?;
        written.push(path);
    }

    info!(dir = %dir.display(), files = written.len(), "exported session");
    Ok(written)
}
