//! cribado-core: triage engine for PRISMA-style literature screening
//!
//! This library provides the record-unification core behind the cribado
//! screening assistant:
//! - Canonical record model (open field bag with typed canonical accessors)
//! - Field mapping from source-specific column names
//! - Ordered merging of heterogeneous sources
//! - Composite-key duplicate detection (DOI and normalized title)
//! - The review session store (classify, edit, restore, snapshot)
//! - CSV ingest/resume/export pipelines and paging helpers
//!
//! The interactive surface is an external collaborator: it calls the
//! synchronous operations here and renders whatever comes back.

pub mod deduplication;
pub mod domain;
pub mod export;
pub mod filter;
pub mod import;
pub mod mapping;
pub mod merge;
pub mod session;

// Re-export main types for convenience
pub use deduplication::{normalize_title, partition_duplicates, title_key, DuplicatePartition};
pub use domain::{
    FieldValue, Record, RecordId, RecordSet, CANONICAL_FIELDS, FIELD_ABSTRACT, FIELD_AUTHORS,
    FIELD_DOI, FIELD_SOURCE, FIELD_TITLE, FIELD_YEAR,
};
pub use export::{
    excluded_file_name, record_set_to_csv_bytes, record_set_to_table, write_record_set,
    write_session, ExportError, DUPLICATES_FILE, EXCLUDED_ABSTRACT_FILE,
    EXCLUDED_INACCESSIBLE_FILE, EXCLUDED_TITLE_FILE, INCLUDED_FILE,
};
pub use filter::{page_slice, total_pages, KeywordFilter, PAGE_SIZE};
pub use import::{
    ingest_files, ingest_tables, resume_session, ImportError, IngestResult, ResumeFiles,
    SourceTable,
};
pub use mapping::{map_table, records_from_table, FieldMap};
pub use merge::merge_sources;
pub use session::{
    ExclusionReason, ReviewSession, ScreeningCategory, SessionCounts, SessionError,
};
