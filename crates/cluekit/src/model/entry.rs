//! Content entry schema and invariant checks.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{CluekitError, Result};

use super::lifecycle::can_transition;
use super::types::{ClueStyle, Language, Status};

/// Quality-score keys every entry must carry.
pub const QUALITY_SCORE_KEYS: [&str; 4] =
    ["ambiguity", "readability", "similarity", "predicted_solve_rate"];

/// Inclusive difficulty bounds.
pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// Where an entry came from and who vouched for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceTrace {
    pub source_name: String,
    pub source_url: String,
    pub license_id: String,
    pub imported_at: DateTime<Utc>,
    pub reviewer: String,
}

impl SourceTrace {
    /// Compact "source | license" label for listings.
    pub fn label(&self) -> String {
        format!("{} | {}", self.source_name, self.license_id)
    }
}

/// A single clue/word record.
///
/// `language`, `clue_style`, `difficulty` and `version` are kept in their raw
/// form so a malformed record can still be represented and reported on by
/// [`validate_entry`]. Use [`ContentEntry::language`] and
/// [`ContentEntry::clue_style`] for the parsed view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub entry_id: String,
    pub language: String,
    pub word: String,
    pub lemma: String,
    pub pos: String,
    pub difficulty: i64,
    pub difficulty_confidence: f64,
    pub clue_text: String,
    pub clue_style: String,
    #[serde(default)]
    pub safety_flags: Vec<String>,
    #[serde(default)]
    pub quality_scores: IndexMap<String, f64>,
    pub source_trace: SourceTrace,
    #[serde(default)]
    pub status: Status,
    pub version: i64,
}

impl ContentEntry {
    /// Parsed language, if supported.
    pub fn language(&self) -> Option<Language> {
        Language::from_code(&self.language)
    }

    /// Parsed clue style, if recognized.
    pub fn clue_style(&self) -> Option<ClueStyle> {
        ClueStyle::from_token(&self.clue_style)
    }

    /// Move to `next` if the lifecycle graph allows it.
    ///
    /// On an illegal transition the entry is left untouched.
    pub fn transition_to(&mut self, next: Status) -> Result<()> {
        if !can_transition(self.status, next) {
            return Err(CluekitError::IllegalTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Bump the version after a content edit.
    pub fn record_edit(&mut self) {
        self.version = self.version.max(0) + 1;
    }

    /// Run all invariant checks on this entry.
    pub fn validate(&self) -> Vec<EntryIssue> {
        validate_entry(self)
    }
}

/// A violated entry invariant.
///
/// Renders as a stable issue code (see [`EntryIssue::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryIssue {
    LanguageNotSupported,
    DifficultyOutOfRange,
    DifficultyConfidenceOutOfRange,
    InvalidClueStyle,
    MissingQualityScore(&'static str),
    InvalidVersion,
    RequiredFieldMissing,
}

impl EntryIssue {
    /// Stable issue code.
    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryIssue::LanguageNotSupported => f.write_str("language_not_supported"),
            EntryIssue::DifficultyOutOfRange => f.write_str("difficulty_out_of_range"),
            EntryIssue::DifficultyConfidenceOutOfRange => {
                f.write_str("difficulty_confidence_out_of_range")
            }
            EntryIssue::InvalidClueStyle => f.write_str("invalid_clue_style"),
            EntryIssue::MissingQualityScore(key) => write!(f, "missing_quality_score:{key}"),
            EntryIssue::InvalidVersion => f.write_str("invalid_version"),
            EntryIssue::RequiredFieldMissing => f.write_str("required_field_missing"),
        }
    }
}

impl Serialize for EntryIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check an entry against every invariant and report all violations.
///
/// Checks are independent: one failing check never hides another. An empty
/// result means the entry is well-formed.
pub fn validate_entry(entry: &ContentEntry) -> Vec<EntryIssue> {
    let mut issues = Vec::new();

    if entry.language().is_none() {
        issues.push(EntryIssue::LanguageNotSupported);
    }

    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&entry.difficulty) {
        issues.push(EntryIssue::DifficultyOutOfRange);
    }

    // NaN fails the range test as well
    if !(0.0..=1.0).contains(&entry.difficulty_confidence) {
        issues.push(EntryIssue::DifficultyConfidenceOutOfRange);
    }

    if entry.clue_style().is_none() {
        issues.push(EntryIssue::InvalidClueStyle);
    }

    for key in QUALITY_SCORE_KEYS {
        if !entry.quality_scores.contains_key(key) {
            issues.push(EntryIssue::MissingQualityScore(key));
        }
    }

    if entry.version < 1 {
        issues.push(EntryIssue::InvalidVersion);
    }

    let blank = |s: &str| s.trim().is_empty();
    if blank(&entry.entry_id) || blank(&entry.word) || blank(&entry.clue_text) {
        issues.push(EntryIssue::RequiredFieldMissing);
    }

    issues
}


#[cfg(test)]
mod tests {
    use super::fixtures::haus;
    use super::*;

    fn codes(entry: &ContentEntry) -> Vec<String> {
        validate_entry(entry).iter().map(EntryIssue::code).collect()
    }

    #[test]
    fn test_valid_entry_has_no_issues() {
        assert!(validate_entry(&haus()).is_empty());
    }

    #[test]
    fn test_each_invariant_reports_only_its_code() {
        let cases: Vec<(Box<dyn Fn(&mut ContentEntry)>, &str)> = vec![
            (Box::new(|e: &mut ContentEntry| e.language = "it".into()), "language_not_supported"),
            (Box::new(|e: &mut ContentEntry| e.difficulty = 6), "difficulty_out_of_range"),
            (Box::new(|e: &mut ContentEntry| e.difficulty = 0), "difficulty_out_of_range"),
            (
                Box::new(|e: &mut ContentEntry| e.difficulty_confidence = 1.01),
                "difficulty_confidence_out_of_range",
            ),
            (
                Box::new(|e: &mut ContentEntry| e.difficulty_confidence = f64::NAN),
                "difficulty_confidence_out_of_range",
            ),
            (Box::new(|e: &mut ContentEntry| e.clue_style = "sarcastic".into()), "invalid_clue_style"),
            (
                Box::new(|e: &mut ContentEntry| {
                    e.quality_scores.shift_remove("readability");
                }),
                "missing_quality_score:readability",
            ),
            (Box::new(|e: &mut ContentEntry| e.version = 0), "invalid_version"),
            (Box::new(|e: &mut ContentEntry| e.entry_id = "   ".into()), "required_field_missing"),
            (Box::new(|e: &mut ContentEntry| e.word = "".into()), "required_field_missing"),
            (Box::new(|e: &mut ContentEntry| e.clue_text = "\t\n".into()), "required_field_missing"),
        ];

        for (mutate, expected) in cases {
            let mut entry = haus();
            mutate(&mut entry);
            assert_eq!(codes(&entry), vec![expected.to_string()]);
        }
    }

    #[test]
    fn test_violations_accumulate() {
        let mut entry = haus();
        entry.language = "xx".into();
        entry.difficulty = 9;
        entry.quality_scores.clear();
        entry.word = " ".into();

        let found = codes(&entry);
        assert_eq!(
            found,
            vec![
                "language_not_supported",
                "difficulty_out_of_range",
                "missing_quality_score:ambiguity",
                "missing_quality_score:readability",
                "missing_quality_score:similarity",
                "missing_quality_score:predicted_solve_rate",
                "required_field_missing",
            ]
        );
    }

    #[test]
    fn test_confidence_bounds_are_inclusive() {
        let mut entry = haus();
        entry.difficulty_confidence = 0.0;
        assert!(validate_entry(&entry).is_empty());
        entry.difficulty_confidence = 1.0;
        assert!(validate_entry(&entry).is_empty());
    }

    #[test]
    fn test_transition_to() {
        let mut entry = haus();
        entry.transition_to(Status::Reviewed).unwrap();
        entry.transition_to(Status::Approved).unwrap();

        let err = entry.transition_to(Status::Draft).unwrap_err();
        assert!(matches!(
            err,
            CluekitError::IllegalTransition {
                from: Status::Approved,
                to: Status::Draft
            }
        ));
        assert_eq!(entry.status, Status::Approved);
    }

    #[test]
    fn test_record_edit_bumps_version() {
        let mut entry = haus();
        entry.record_edit();
        assert_eq!(entry.version, 2);
    }

    #[test]
    fn test_issue_serializes_as_code() {
        let json = serde_json::to_string(&vec![EntryIssue::MissingQualityScore("similarity")])
            .unwrap();
        assert_eq!(json, r#"["missing_quality_score:similarity"]"#);
    }

    #[test]
    fn test_entry_json_roundtrip_keeps_raw_fields() {
        let mut entry = haus();
        entry.clue_style = "unknown-style".into();
        let json = serde_json::to_string(&entry).unwrap();
        let back: ContentEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
        assert!(back.clue_style().is_none());
    }
}
