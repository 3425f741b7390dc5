//! Generated entry records as stored in chunk files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Language, SourceTrace, Status};
use crate::qa::QaReport;

fn first_version() -> i64 {
    1
}

/// A pilot-dataset entry, annotated with its auto-QA report.
///
/// Language and difficulty stay raw: the sampler drops records whose values
/// fall outside the supported sets instead of failing the whole chunk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PilotEntry {
    pub entry_id: String,
    pub language: String,
    pub word: String,
    #[serde(default)]
    pub difficulty: i64,
    pub clue_text: String,
    pub clue_style: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub quality_scores: IndexMap<String, f64>,
    #[serde(default)]
    pub auto_qa: QaReport,
    pub source_trace: SourceTrace,
    #[serde(default = "first_version")]
    pub version: i64,
}

impl PilotEntry {
    /// Parsed language, if supported.
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_defaults() {
        let json = r#"{
            "entry_id": "en-000001",
            "language": "en",
            "word": "tree0001",
            "clue_text": "Everyday concept connected to tree00",
            "clue_style": "neutral",
            "source_trace": {
                "source_name": "manual",
                "source_url": "internal://manual",
                "license_id": "internal",
                "imported_at": "2026-02-01T12:00:00+00:00",
                "reviewer": "pending"
            }
        }"#;

        let entry: PilotEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.difficulty, 0);
        assert_eq!(entry.status, Status::Draft);
        assert_eq!(entry.version, 1);
        assert!(entry.auto_qa.is_clean());
        assert_eq!(entry.language(), Some(Language::En));
    }
}
