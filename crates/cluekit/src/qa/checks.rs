//! Individual auto-QA heuristics.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Language;

use super::matcher::SequenceMatcher;
use super::report::{CheckName, QaFlag};

// =============================================================================
// TEXT NORMALIZATION
// =============================================================================

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trim, lowercase and collapse whitespace runs to a single space.
pub fn normalize(text: &str) -> String {
    WHITESPACE
        .replace_all(&text.trim().to_lowercase(), " ")
        .into_owned()
}

/// First `n` characters of `s` (fewer if `s` is shorter).
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

// =============================================================================
// CANDIDATE
// =============================================================================

/// A clue under review, with its normalized forms computed once.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub word: &'a str,
    pub clue_text: &'a str,
    pub language: &'a str,
    pub difficulty: i64,
    pub existing_clues: Vec<&'a str>,
    normalized_word: String,
    normalized_clue: String,
}

impl<'a> Candidate<'a> {
    pub fn new<S: AsRef<str>>(
        word: &'a str,
        clue_text: &'a str,
        language: &'a str,
        difficulty: i64,
        existing_clues: &'a [S],
    ) -> Self {
        Self {
            word,
            clue_text,
            language,
            difficulty,
            existing_clues: existing_clues.iter().map(|clue| clue.as_ref()).collect(),
            normalized_word: normalize(word),
            normalized_clue: normalize(clue_text),
        }
    }

    pub fn normalized_word(&self) -> &str {
        &self.normalized_word
    }

    pub fn normalized_clue(&self) -> &str {
        &self.normalized_clue
    }
}

/// Trait for auto-QA checks.
///
/// A check returns zero or more flags; every current rule raises at most one.
pub trait QaCheck: Send + Sync {
    /// Name under which the check reports.
    fn name(&self) -> CheckName;

    /// Run the check against a candidate clue.
    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag>;
}

// =============================================================================
// POLICY
// =============================================================================

/// Banned terms per language. Matched as substrings of the normalized clue.
fn banned_terms(language: Language) -> &'static [&'static str] {
    match language {
        Language::En => &["hate", "kill", "sex"],
        Language::De => &["hass", "töte", "sex"],
        Language::Fr => &["haine", "tuer", "sexe"],
        Language::Es => &["odio", "matar", "sexo"],
    }
}

/// Flags clues containing a banned term for their language.
pub struct PolicyCheck;

impl QaCheck for PolicyCheck {
    fn name(&self) -> CheckName {
        CheckName::Policy
    }

    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag> {
        // Unsupported languages have no banned terms.
        let Some(language) = Language::from_code(candidate.language) else {
            return Vec::new();
        };

        let clue = candidate.normalized_clue();
        if banned_terms(language).iter().any(|term| clue.contains(term)) {
            vec![QaFlag::PolicyUnsafe]
        } else {
            Vec::new()
        }
    }
}

// =============================================================================
// LEAK
// =============================================================================

/// Minimum word length (in characters) for the stem check.
const STEM_MIN_WORD_LEN: usize = 5;
const STEM_LEN: usize = 4;

/// Flags clues that give away the answer, fully or by its stem.
pub struct LeakCheck;

impl QaCheck for LeakCheck {
    fn name(&self) -> CheckName {
        CheckName::Leak
    }

    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag> {
        let word = candidate.normalized_word();
        let clue = candidate.normalized_clue();

        if clue.contains(word) {
            return vec![QaFlag::WordLeak];
        }
        if word.chars().count() >= STEM_MIN_WORD_LEN && clue.contains(char_prefix(word, STEM_LEN)) {
            return vec![QaFlag::StemLeak];
        }
        Vec::new()
    }
}

// =============================================================================
// READABILITY
// =============================================================================

/// Flags clues longer than the ceiling for their difficulty.
pub struct ReadabilityCheck {
    ceilings: IndexMap<i64, usize>,
}

impl ReadabilityCheck {
    pub fn new(ceilings: IndexMap<i64, usize>) -> Self {
        Self { ceilings }
    }
}

impl QaCheck for ReadabilityCheck {
    fn name(&self) -> CheckName {
        CheckName::Readability
    }

    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag> {
        // Difficulties without a ceiling are never flagged.
        match self.ceilings.get(&candidate.difficulty) {
            Some(&max_len) if candidate.clue_text.chars().count() > max_len => {
                vec![QaFlag::ReadabilityFlag]
            }
            _ => Vec::new(),
        }
    }
}

// =============================================================================
// AMBIGUITY
// =============================================================================

/// Placeholder words meaning "something" / "thing" across languages.
const GENERIC_MARKERS: [&str; 4] = ["etwas", "thing", "quelque", "algo"];

/// Flags clues that lean on vague placeholder words.
pub struct AmbiguityCheck;

impl QaCheck for AmbiguityCheck {
    fn name(&self) -> CheckName {
        CheckName::Ambiguity
    }

    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag> {
        let clue = candidate.normalized_clue();
        if GENERIC_MARKERS.iter().any(|marker| clue.contains(marker)) {
            vec![QaFlag::AmbiguityFlag]
        } else {
            Vec::new()
        }
    }
}

// =============================================================================
// SIMILARITY
// =============================================================================

/// Flags clues that nearly duplicate one of the caller-supplied prior clues.
pub struct SimilarityCheck {
    threshold: f64,
}

impl SimilarityCheck {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl QaCheck for SimilarityCheck {
    fn name(&self) -> CheckName {
        CheckName::Similarity
    }

    fn check(&self, candidate: &Candidate<'_>) -> Vec<QaFlag> {
        let clue = candidate.normalized_clue();
        let duplicate = candidate
            .existing_clues
            .iter()
            .any(|prior| SequenceMatcher::new(clue, &normalize(prior)).ratio() > self.threshold);

        if duplicate {
            vec![QaFlag::SimilarityFlag]
        } else {
            Vec::new()
        }
    }
}
