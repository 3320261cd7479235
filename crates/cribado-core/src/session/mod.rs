//! Review session store
//!
//! Holds the working set of retained records plus the per-category
//! excluded sets, and exposes the mutations the screening surface calls:
//! classify, edit a field, wholesale restore, snapshot for export.
//!
//! Single reviewer, synchronous calls; every mutation is all-or-nothing.

mod reason;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::deduplication::DuplicatePartition;
use crate::domain::{FieldValue, RecordId, RecordSet};

pub use reason::{ExclusionReason, ScreeningCategory};

/// Errors from session mutations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The id is not in the working set: either it never existed or it
    /// was already classified out.
    #[error("Record not found in included set: {0}")]
    NotFound(RecordId),
}

/// Per-partition record counts, for progress display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounts {
    pub included: usize,
    pub duplicate: usize,
    pub title: usize,
    pub abstract_: usize,
    pub inaccessible: usize,
}

/// The top-level aggregate: one reviewer's triage state.
///
/// Every ingested record is in exactly one partition (`included` or one
/// exclusion category) at any time. Records are never destroyed, only
/// re-partitioned. Created empty; populated only by ingestion or restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSession {
    included: RecordSet,
    duplicate: RecordSet,
    title: RecordSet,
    abstract_: RecordSet,
    inaccessible: RecordSet,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial population from the duplicate detector's output.
    pub fn from_partition(partition: DuplicatePartition) -> Self {
        let mut session = Self::new();
        session.included = partition.unique;
        session.duplicate = partition.duplicates;
        session
    }

    pub fn included(&self) -> &RecordSet {
        &self.included
    }

    pub fn excluded(&self, reason: ExclusionReason) -> &RecordSet {
        match reason {
            ExclusionReason::Duplicate => &self.duplicate,
            ExclusionReason::Title => &self.title,
            ExclusionReason::Abstract => &self.abstract_,
            ExclusionReason::Inaccessible => &self.inaccessible,
        }
    }

    fn excluded_mut(&mut self, reason: ExclusionReason) -> &mut RecordSet {
        match reason {
            ExclusionReason::Duplicate => &mut self.duplicate,
            ExclusionReason::Title => &mut self.title,
            ExclusionReason::Abstract => &mut self.abstract_,
            ExclusionReason::Inaccessible => &mut self.inaccessible,
        }
    }

    /// Move a record from the working set into an exclusion category.
    ///
    /// Fails with [`SessionError::NotFound`] when the id is not currently
    /// in `included`, which also rejects a second classify of the same id.
    pub fn classify(
        &mut self,
        id: RecordId,
        category: ScreeningCategory,
    ) -> Result<(), SessionError> {
        let record = self
            .included
            .remove(id)
            .ok_or(SessionError::NotFound(id))?;

        debug!(%id, category = %category, "classified record");
        self.excluded_mut(category.reason()).push(record);
        Ok(())
    }

    /// Edit one field of one record currently in the working set.
    pub fn update_field(
        &mut self,
        id: RecordId,
        field: &str,
        value: FieldValue,
    ) -> Result<(), SessionError> {
        let record = self
            .included
            .get_mut(id)
            .ok_or(SessionError::NotFound(id))?;

        record.set_field(field, value);
        debug!(%id, field, "updated record field");
        Ok(())
    }

    /// Replace the working set wholesale (session resume).
    pub fn restore_included(&mut self, records: RecordSet) {
        debug!(records = records.len(), "restored included set");
        self.included = records;
    }

    /// Replace one exclusion category wholesale (session resume).
    pub fn restore_excluded(&mut self, reason: ExclusionReason, records: RecordSet) {
        debug!(reason = %reason, records = records.len(), "restored excluded set");
        *self.excluded_mut(reason) = records;
    }

    /// Immutable ordered snapshot of the working set for serialization.
    /// Subsequent mutations do not show through.
    pub fn snapshot_included(&self) -> RecordSet {
        self.included.clone()
    }

    /// Immutable ordered snapshot of an exclusion category.
    pub fn snapshot_excluded(&self, reason: ExclusionReason) -> RecordSet {
        self.excluded(reason).clone()
    }

    pub fn counts(&self) -> SessionCounts {
        SessionCounts {
            included: self.included.len(),
            duplicate: self.duplicate.len(),
            title: self.title.len(),
            abstract_: self.abstract_.len(),
            inaccessible: self.inaccessible.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Record, FIELD_DOI, FIELD_TITLE};

    fn session_with_titles(titles: &[&str]) -> ReviewSession {
        let mut included = RecordSet::new();
        for title in titles {
            let mut record = Record::new();
            record.set_field(FIELD_TITLE, FieldValue::text(*title));
            included.push(record);
        }
        let mut session = ReviewSession::new();
        session.restore_included(included);
        session
    }

    #[test]
    fn classify_moves_the_record_exactly_once() {
        let mut session = session_with_titles(&["a", "b"]);
        let id = session.included().records()[0].id;

        session.classify(id, ScreeningCategory::Title).unwrap();

        assert_eq!(session.included().len(), 1);
        assert_eq!(session.excluded(ExclusionReason::Title).len(), 1);
        assert!(session.excluded(ExclusionReason::Title).contains(id));

        // Already excluded: the second attempt is NotFound.
        let err = session
            .classify(id, ScreeningCategory::Inaccessible)
            .unwrap_err();
        assert!(matches!(err, SessionError::NotFound(missing) if missing == id));
        assert_eq!(session.excluded(ExclusionReason::Inaccessible).len(), 0);
    }

    #[test]
    fn classify_unknown_id_is_not_found() {
        let mut session = session_with_titles(&["a"]);
        let err = session
            .classify(uuid::Uuid::new_v4(), ScreeningCategory::Abstract)
            .unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
        assert_eq!(session.included().len(), 1);
    }

    #[test]
    fn update_field_touches_only_that_record() {
        let mut session = session_with_titles(&["a", "b"]);
        let id = session.included().records()[0].id;

        session
            .update_field(id, FIELD_DOI, FieldValue::text("10.1/new"))
            .unwrap();

        let records = session.included().records();
        assert_eq!(records[0].doi(), "10.1/new");
        assert_eq!(records[1].doi(), "");
    }

    #[test]
    fn update_field_on_excluded_record_is_not_found() {
        let mut session = session_with_titles(&["a"]);
        let id = session.included().records()[0].id;
        session.classify(id, ScreeningCategory::Abstract).unwrap();

        let err = session
            .update_field(id, FIELD_DOI, FieldValue::text("10.1/x"))
            .unwrap_err();
        assert!(matches!(err, SessionError::NotFound(_)));
    }

    #[test]
    fn snapshots_do_not_reflect_later_mutations() {
        let mut session = session_with_titles(&["a", "b"]);
        let snapshot = session.snapshot_included();
        let id = session.included().records()[0].id;

        session.classify(id, ScreeningCategory::Title).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(session.included().len(), 1);
    }

    #[test]
    fn restore_replaces_rather_than_merges() {
        let mut session = session_with_titles(&["a", "b", "c"]);

        let mut replacement = RecordSet::new();
        let mut record = Record::new();
        record.set_field(FIELD_TITLE, FieldValue::text("only"));
        replacement.push(record);
        session.restore_included(replacement);

        assert_eq!(session.included().len(), 1);
        assert_eq!(session.included().records()[0].title(), "only");
    }

    #[test]
    fn counts_track_every_partition() {
        let mut session = session_with_titles(&["a", "b", "c"]);
        let id = session.included().records()[0].id;
        session.classify(id, ScreeningCategory::Inaccessible).unwrap();

        let counts = session.counts();
        assert_eq!(counts.included, 2);
        assert_eq!(counts.inaccessible, 1);
        assert_eq!(counts.duplicate, 0);
    }
}
