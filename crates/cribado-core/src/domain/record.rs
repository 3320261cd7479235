//! Canonical bibliographic record

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable surrogate record identifier (UUID v4).
///
/// Assigned when a record enters the session (ingestion or resume) and
/// stable for the session's lifetime. Mutations address records by this
/// id, never by position; positions shift as records are classified out.
pub type RecordId = Uuid;

/// Canonical field names every ingested record is normalized to.
pub const FIELD_TITLE: &str = "title";
pub const FIELD_DOI: &str = "doi";
pub const FIELD_AUTHORS: &str = "authors";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_ABSTRACT: &str = "abstract";
pub const FIELD_SOURCE: &str = "source";

/// Canonical column order for exports.
pub const CANONICAL_FIELDS: [&str; 6] = [
    FIELD_TITLE,
    FIELD_DOI,
    FIELD_AUTHORS,
    FIELD_YEAR,
    FIELD_ABSTRACT,
    FIELD_SOURCE,
];

/// Dynamic value type for record fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// True for `Empty` and for empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Empty => Ok(()),
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A bibliographic record: a stable id plus an open field bag.
///
/// The canonical subset (`title`, `doi`, `authors`, `year`, `abstract`,
/// `source`) has typed accessors; any other source column rides along in
/// the bag unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            fields: BTreeMap::new(),
        }
    }

    pub fn from_fields(fields: BTreeMap<String, FieldValue>) -> Self {
        Self {
            id: Uuid::new_v4(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// A field rendered as text; absent and `Empty` fields render as `""`.
    pub fn field_text(&self, name: &str) -> String {
        self.fields
            .get(name)
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn title(&self) -> String {
        self.field_text(FIELD_TITLE)
    }

    pub fn doi(&self) -> String {
        self.field_text(FIELD_DOI)
    }

    pub fn authors(&self) -> String {
        self.field_text(FIELD_AUTHORS)
    }

    pub fn abstract_text(&self) -> String {
        self.field_text(FIELD_ABSTRACT)
    }

    /// Provenance: the originating file name stamped at ingestion.
    pub fn source(&self) -> String {
        self.field_text(FIELD_SOURCE)
    }

    pub fn year(&self) -> Option<i64> {
        match self.fields.get(FIELD_YEAR)? {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Float(n) => Some(*n as i64),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Empty => None,
        }
    }

    /// Resolver link for the record's DOI, if it has one.
    pub fn doi_url(&self) -> Option<String> {
        let doi = self.doi();
        if doi.is_empty() {
            None
        } else {
            Some(format!("https://doi.org/{}", doi))
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}
