//! Canonical field mapping for heterogeneous source tables
//!
//! Each citation database labels its columns differently ("Article
//! Title" in Web of Science exports, "Title" in PubMed/Scopus CSVs).
//! The mapper renames the known headers to the canonical schema, leaves
//! everything else untouched, and stamps provenance on every row.

use std::collections::BTreeMap;

use cribado_io::RawTable;
use tracing::warn;

use crate::domain::{
    FieldValue, Record, FIELD_ABSTRACT, FIELD_AUTHORS, FIELD_DOI, FIELD_SOURCE, FIELD_TITLE,
    FIELD_YEAR,
};

/// Source-header to canonical-name mapping table.
#[derive(Debug, Clone)]
pub struct FieldMap {
    entries: BTreeMap<String, String>,
}

impl Default for FieldMap {
    fn default() -> Self {
        let standard = [
            ("Article Title", FIELD_TITLE),
            ("Title", FIELD_TITLE),
            ("DOI", FIELD_DOI),
            ("Authors", FIELD_AUTHORS),
            ("Year", FIELD_YEAR),
            ("Abstract", FIELD_ABSTRACT),
        ];
        Self {
            entries: standard
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl FieldMap {
    pub fn standard() -> Self {
        Self::default()
    }

    /// Add a source-specific header alias.
    pub fn with_alias(mut self, source: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.entries.insert(source.into(), canonical.into());
        self
    }

    /// Canonical name for a header; unmapped headers pass through.
    pub fn canonical<'a>(&'a self, header: &'a str) -> &'a str {
        self.entries.get(header).map(String::as_str).unwrap_or(header)
    }
}

/// Convert a raw source table into canonical records.
///
/// Headers are renamed through the mapping table, cells get per-column
/// numeric inference, and every record is stamped with `source` = the
/// originating file name. A table with none of the bibliographic columns
/// is still ingested; its canonical fields just come out empty.
pub fn map_table(table: &RawTable, source_name: &str, map: &FieldMap) -> Vec<Record> {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| map.canonical(h).to_string())
        .collect();

    if !has_bibliographic_column(&headers) {
        warn!(
            source = source_name,
            "no title/doi/authors/year column mapped; canonical fields will be empty"
        );
    }

    let mut records = typed_records(&headers, &table.rows);
    for record in &mut records {
        record.set_field(FIELD_SOURCE, FieldValue::text(source_name));
    }
    records
}

/// Records from a table whose headers are already canonical (session
/// resume). No renaming, no provenance stamping: the `source` column in
/// the file is the provenance.
pub fn records_from_table(table: &RawTable) -> Vec<Record> {
    typed_records(&table.headers, &table.rows)
}

/// Whether any bibliographic column (title/doi/authors/year) maps from
/// this table's headers.
pub(crate) fn maps_bibliographic_columns(table: &RawTable, map: &FieldMap) -> bool {
    let headers: Vec<String> = table
        .headers
        .iter()
        .map(|h| map.canonical(h).to_string())
        .collect();
    has_bibliographic_column(&headers)
}

fn has_bibliographic_column(headers: &[String]) -> bool {
    headers
        .iter()
        .any(|h| [FIELD_TITLE, FIELD_DOI, FIELD_AUTHORS, FIELD_YEAR].contains(&h.as_str()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Int,
    Float,
    Text,
}

/// Infer a column's type from its cells: all-integer columns become
/// `Int`, all-numeric become `Float`, anything else stays `Text`.
fn infer_column_type<'a>(values: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_float = true;

    for value in values.filter(|v| !v.is_empty()) {
        saw_value = true;
        if value.parse::<i64>().is_err() {
            all_int = false;
        }
        if value.parse::<f64>().is_err() {
            all_float = false;
        }
        if !all_float {
            break;
        }
    }

    if !saw_value {
        ColumnType::Text
    } else if all_int {
        ColumnType::Int
    } else if all_float {
        ColumnType::Float
    } else {
        ColumnType::Text
    }
}

fn parse_cell(raw: &str, dtype: ColumnType) -> FieldValue {
    if raw.is_empty() {
        return FieldValue::Empty;
    }
    match dtype {
        ColumnType::Int => raw
            .parse()
            .map(FieldValue::Int)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        ColumnType::Float => raw
            .parse()
            .map(FieldValue::Float)
            .unwrap_or_else(|_| FieldValue::text(raw)),
        ColumnType::Text => FieldValue::text(raw),
    }
}

fn typed_records(headers: &[String], rows: &[Vec<String>]) -> Vec<Record> {
    let column_types: Vec<ColumnType> = (0..headers.len())
        .map(|i| infer_column_type(rows.iter().filter_map(|row| row.get(i)).map(String::as_str)))
        .collect();

    rows.iter()
        .map(|row| {
            let mut fields = BTreeMap::new();
            for (i, header) in headers.iter().enumerate() {
                let raw = row.get(i).map(String::as_str).unwrap_or("");
                fields.insert(header.clone(), parse_cell(raw, column_types[i]));
            }
            Record::from_fields(fields)
        })
        .collect()
}
