//! Exclusion categories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a record left the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionReason {
    /// Flagged by the duplicate detector during ingestion.
    Duplicate,
    /// Screened out on title.
    Title,
    /// Screened out on abstract.
    Abstract,
    /// Full text could not be obtained.
    Inaccessible,
}

impl ExclusionReason {
    pub const ALL: [ExclusionReason; 4] = [
        ExclusionReason::Duplicate,
        ExclusionReason::Title,
        ExclusionReason::Abstract,
        ExclusionReason::Inaccessible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExclusionReason::Duplicate => "duplicate",
            ExclusionReason::Title => "title",
            ExclusionReason::Abstract => "abstract",
            ExclusionReason::Inaccessible => "inaccessible",
        }
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The categories a reviewer can classify a record into.
///
/// `duplicate` is deliberately absent: only the detector assigns it, at
/// ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningCategory {
    Title,
    Abstract,
    Inaccessible,
}

impl ScreeningCategory {
    pub const ALL: [ScreeningCategory; 3] = [
        ScreeningCategory::Title,
        ScreeningCategory::Abstract,
        ScreeningCategory::Inaccessible,
    ];

    pub fn reason(&self) -> ExclusionReason {
        match self {
            ScreeningCategory::Title => ExclusionReason::Title,
            ScreeningCategory::Abstract => ExclusionReason::Abstract,
            ScreeningCategory::Inaccessible => ExclusionReason::Inaccessible,
        }
    }
}

impl fmt::Display for ScreeningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason().as_str())
    }
}
