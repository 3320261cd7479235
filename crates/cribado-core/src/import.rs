//! Ingestion pipelines: new-project unification and session resume

use std::path::{Path, PathBuf};

use cribado_io::{read_csv_table, read_table, IoError, RawTable};
use thiserror::Error;
use tracing::info;

use crate::deduplication::partition_duplicates;
use crate::domain::RecordSet;
use crate::mapping::{map_table, maps_bibliographic_columns, records_from_table, FieldMap};
use crate::merge::merge_sources;
use crate::session::{ExclusionReason, ReviewSession};

/// Import error type
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// A session-resume file lacks canonical columns. The whole restore of
    /// that category is rejected; nothing was applied.
    #[error("Malformed {target} import: missing columns {missing:?}")]
    MalformedImport {
        target: String,
        missing: Vec<String>,
    },
}

/// A named source table queued for unification.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Originating file name; becomes every row's `source` field.
    pub name: String,
    pub table: RawTable,
}

impl SourceTable {
    pub fn new(name: impl Into<String>, table: RawTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    /// Read a source file, auto-detecting the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ImportError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, read_table(path)?))
    }
}

/// Result of a new-project ingestion.
#[derive(Debug)]
pub struct IngestResult {
    pub session: ReviewSession,
    /// Records merged across all sources, before duplicate removal.
    pub records_merged: usize,
    pub warnings: Vec<String>,
}

/// Unify source tables into a fresh review session.
///
/// Pipeline: field-map each table, concatenate in the given order, detect
/// duplicates, populate the session. Zero sources produce an empty
/// session, not an error.
pub fn ingest_tables(sources: Vec<SourceTable>, map: &FieldMap) -> IngestResult {
    let mut warnings = Vec::new();
    let mut mapped = Vec::new();

    for source in &sources {
        if !maps_bibliographic_columns(&source.table, map) {
            warnings.push(format!(
                "{}: no title/doi/authors/year column mapped; canonical fields are empty",
                source.name
            ));
        }
        mapped.push(map_table(&source.table, &source.name, map));
    }

    let merged = merge_sources(mapped);
    let records_merged = merged.len();
    let session = ReviewSession::from_partition(partition_duplicates(merged));

    let counts = session.counts();
    info!(
        sources = sources.len(),
        merged = records_merged,
        unique = counts.included,
        duplicates = counts.duplicate,
        "ingested source tables"
    );

    IngestResult {
        session,
        records_merged,
        warnings,
    }
}

/// New-project ingestion from files.
///
/// Spreadsheet exports are processed before delimited ones, each group in
/// the order given, so the merged order is reproducible.
pub fn ingest_files(
    sheet_files: &[PathBuf],
    delimited_files: &[PathBuf],
) -> Result<IngestResult, ImportError> {
    let mut sources = Vec::new();
    for path in sheet_files.iter().chain(delimited_files) {
        sources.push(SourceTable::from_file(path)?);
    }
    Ok(ingest_tables(sources, &FieldMap::standard()))
}

/// The per-category files of a previously exported session. Absent files
/// leave the corresponding set unchanged.
#[derive(Debug, Clone, Default)]
pub struct ResumeFiles {
    pub included: Option<PathBuf>,
    pub excluded_title: Option<PathBuf>,
    pub excluded_abstract: Option<PathBuf>,
    pub excluded_inaccessible: Option<PathBuf>,
}

/// Restore session state from previously exported CSVs.
///
/// Every supplied file is read and validated before anything is applied,
/// so a malformed file leaves the whole session untouched. Each loaded
/// set replaces its partition wholesale.
pub fn resume_session(
    session: &mut ReviewSession,
    files: &ResumeFiles,
) -> Result<(), ImportError> {
    let included = load_resume_set(files.included.as_deref(), "included")?;
    let title = load_resume_set(files.excluded_title.as_deref(), "title")?;
    let abstract_ = load_resume_set(files.excluded_abstract.as_deref(), "abstract")?;
    let inaccessible =
        load_resume_set(files.excluded_inaccessible.as_deref(), "inaccessible")?;

    if let Some(records) = included {
        session.restore_included(records);
    }
    if let Some(records) = title {
        session.restore_excluded(ExclusionReason::Title, records);
    }
    if let Some(records) = abstract_ {
        session.restore_excluded(ExclusionReason::Abstract, records);
    }
    if let Some(records) = inaccessible {
        session.restore_excluded(ExclusionReason::Inaccessible, records);
    }

    info!("session restored from exported files");
    Ok(())
}

fn load_resume_set(
    path: Option<&Path>,
    target: &str,
) -> Result<Option<RecordSet>, ImportError> {
    let Some(path) = path else {
        return Ok(None);
    };

    let table = read_csv_table(path)?;
    let missing: Vec<String> = crate::domain::CANONICAL_FIELDS
        .iter()
        .filter(|c| table.column_index(c).is_none())
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MalformedImport {
            target: target.to_string(),
            missing,
        });
    }

    Ok(Some(RecordSet::from_records(records_from_table(&table))))
}
