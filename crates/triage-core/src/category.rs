//! The error category taxonomy exported by sqltriage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a driver-raised database error.
///
/// Exhaustive and disjoint: every driver error maps to exactly one variant,
/// with `Unclassified` as the catch-all for codes absent from the active
/// product's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    BadGrammar,
    DuplicateKey,
    Deadlock,
    DataIntegrityViolation,
    Unclassified,
}

impl Category {
    /// All categories that carry a code set, in classification order.
    /// `BadGrammar` wins if a deployment's table violates disjointness.
    pub const CLASSIFIED: [Self; 4] = [
        Self::BadGrammar,
        Self::DuplicateKey,
        Self::Deadlock,
        Self::DataIntegrityViolation,
    ];

    /// String form used in serialized output and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadGrammar => "bad_grammar",
            Self::DuplicateKey => "duplicate_key",
            Self::Deadlock => "deadlock",
            Self::DataIntegrityViolation => "data_integrity_violation",
            Self::Unclassified => "unclassified",
        }
    }

    /// Report heading for classified categories.
    ///
    /// `Unclassified` has no heading; it never produces a report line.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::BadGrammar => Some("Bad Grammar Exception"),
            Self::DuplicateKey => Some("Duplicate Exception"),
            Self::Deadlock => Some("Deadlock Exception"),
            Self::DataIntegrityViolation => Some("Data Integrity Violation Exception"),
            Self::Unclassified => None,
        }
    }

    /// Whether this category produces a report line.
    #[must_use]
    pub const fn is_classified(self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
