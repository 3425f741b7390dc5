//! QA flag vocabulary and the per-check report.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of an auto-QA check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckName {
    Policy,
    Leak,
    Readability,
    Ambiguity,
    Similarity,
}

impl CheckName {
    /// All checks in report order.
    pub const ALL: [CheckName; 5] = [
        CheckName::Policy,
        CheckName::Leak,
        CheckName::Readability,
        CheckName::Ambiguity,
        CheckName::Similarity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckName::Policy => "policy",
            CheckName::Leak => "leak",
            CheckName::Readability => "readability",
            CheckName::Ambiguity => "ambiguity",
            CheckName::Similarity => "similarity",
        }
    }
}

impl fmt::Display for CheckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A potential quality or safety problem raised by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QaFlag {
    /// Clue contains a banned term for its language.
    PolicyUnsafe,
    /// Clue contains the answer word.
    WordLeak,
    /// Clue contains the first four letters of the answer word.
    StemLeak,
    /// Clue is too long for its difficulty.
    ReadabilityFlag,
    /// Clue leans on a vague placeholder ("thing", "etwas", ...).
    AmbiguityFlag,
    /// Clue is a near-duplicate of a recent clue.
    SimilarityFlag,
}

impl QaFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            QaFlag::PolicyUnsafe => "policy_unsafe",
            QaFlag::WordLeak => "word_leak",
            QaFlag::StemLeak => "stem_leak",
            QaFlag::ReadabilityFlag => "readability_flag",
            QaFlag::AmbiguityFlag => "ambiguity_flag",
            QaFlag::SimilarityFlag => "similarity_flag",
        }
    }
}

impl fmt::Display for QaFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of check name to the flags that check raised.
///
/// Serializes as a JSON object keyed by check name, e.g.
/// `{"policy": [], "leak": ["word_leak"], ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QaReport(IndexMap<String, Vec<QaFlag>>);

impl QaReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one check.
    pub fn insert(&mut self, check: CheckName, flags: Vec<QaFlag>) {
        self.0.insert(check.as_str().to_string(), flags);
    }

    /// Flags raised by `check`; empty when the check passed or did not run.
    pub fn get(&self, check: CheckName) -> &[QaFlag] {
        self.0
            .get(check.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check names present in the report, in insertion order.
    pub fn checks(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Every raised flag, in check order.
    pub fn flags(&self) -> impl Iterator<Item = QaFlag> + '_ {
        self.0.values().flatten().copied()
    }

    /// True if no check raised a flag.
    pub fn is_clean(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn contains(&self, flag: QaFlag) -> bool {
        self.flags().any(|f| f == flag)
    }
}
