//! Composite-key duplicate detection

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{RecordSet, FIELD_DOI};

use super::normalization::title_key;

/// Order-preserving split of a merged record set into retained records
/// and detected duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuplicatePartition {
    pub unique: RecordSet,
    pub duplicates: RecordSet,
}

/// Classify every record of a merged set in merge order.
///
/// A record is a duplicate when an earlier record already claimed its
/// non-empty `doi`, or when an earlier record already claimed its
/// normalized title key. The first occurrence of a key is always the one
/// kept, regardless of which source it came from.
///
/// Key registration is per column and happens for every record, flagged
/// or not: a record flagged by title still counts as the first occurrence
/// of its DOI for later records, and vice versa.
///
/// DOI values are compared byte-exact as stored. Differently-cased copies
/// of the same DOI pass this branch unflagged and are only caught when
/// their titles normalize to the same key.
pub fn partition_duplicates(merged: RecordSet) -> DuplicatePartition {
    let mut seen_dois: HashSet<String> = HashSet::new();
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut partition = DuplicatePartition::default();

    for record in merged {
        let doi = record.field_text(FIELD_DOI);
        let key = title_key(&record);

        let doi_duplicate = !doi.is_empty() && seen_dois.contains(&doi);
        let title_duplicate = seen_titles.contains(&key);

        if !doi.is_empty() {
            seen_dois.insert(doi);
        }
        seen_titles.insert(key);

        if doi_duplicate || title_duplicate {
            partition.duplicates.push(record);
        } else {
            partition.unique.push(record);
        }
    }

    info!(
        unique = partition.unique.len(),
        duplicates = partition.duplicates.len(),
        "partitioned merged records"
    );
    partition
}
