//! Domain model: canonical records and ordered record sets

mod record;
mod record_set;

pub use record::{
    FieldValue, Record, RecordId, CANONICAL_FIELDS, FIELD_ABSTRACT, FIELD_AUTHORS, FIELD_DOI,
    FIELD_SOURCE, FIELD_TITLE, FIELD_YEAR,
};
pub use record_set::RecordSet;
