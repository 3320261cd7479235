//! Keyword filter and paging over record sets
//!
//! Pure helpers for the screening surface: a case-insensitive substring
//! filter over title/authors and fixed-size page slicing. The surface
//! decides when to re-render; nothing here holds state.

use crate::domain::{Record, RecordSet, FIELD_AUTHORS, FIELD_TITLE};

/// Records shown per page on the screening surface.
pub const PAGE_SIZE: usize = 20;

/// A keyword filter over `title` and `authors`.
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    term: String,
}

impl KeywordFilter {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// An empty filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring match against title or authors.
    pub fn matches(&self, record: &Record) -> bool {
        if self.is_empty() {
            return true;
        }
        let needle = self.term.to_lowercase();
        record.field_text(FIELD_TITLE).to_lowercase().contains(&needle)
            || record
                .field_text(FIELD_AUTHORS)
                .to_lowercase()
                .contains(&needle)
    }

    /// Matching records in set order.
    pub fn apply<'a>(&self, set: &'a RecordSet) -> Vec<&'a Record> {
        set.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Number of pages the page picker offers for `count` filtered records.
///
/// Matches the picker's arithmetic: an exact multiple of the page size
/// still gets one trailing page.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count / page_size + 1
}

/// The records of a 1-based page, clamped to the available range.
pub fn page_slice<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1) * page_size;
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}
