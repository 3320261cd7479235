//! Duplicate detection for merged bibliographic records
//!
//! This module provides the title normalizer that produces comparison
//! keys and the order-preserving partition of a merged record set into
//! retained records and detected duplicates.

mod detection;
mod normalization;

pub use detection::{partition_duplicates, DuplicatePartition};
pub use normalization::{normalize_title, title_key};
