//! Source merging: ordered concatenation of mapped tables

use tracing::debug;

use crate::domain::{Record, RecordSet};

/// Concatenate mapped sources into one record set.
///
/// Relative row order is preserved within and across sources; the ingest
/// pipeline passes spreadsheet-derived sources before delimited ones, each
/// group in upload order, so paging order is reproducible run to run. No
/// deduplication happens here.
pub fn merge_sources(sources: Vec<Vec<Record>>) -> RecordSet {
    let mut merged = RecordSet::new();
    for records in sources {
        for record in records {
            merged.push(record);
        }
    }

    debug!(records = merged.len(), "merged source tables");
    merged
}
