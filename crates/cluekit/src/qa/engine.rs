//! Auto-QA engine: runs every check against a candidate clue.

use once_cell::sync::Lazy;

use crate::config::QaConfig;

use super::checks::{
    AmbiguityCheck, Candidate, LeakCheck, PolicyCheck, QaCheck, ReadabilityCheck,
    SimilarityCheck,
};
use super::report::QaReport;

static DEFAULT_ENGINE: Lazy<AutoQa> = Lazy::new(AutoQa::new);

/// Runs the policy, leak, readability, ambiguity and similarity checks.
pub struct AutoQa {
    config: QaConfig,
    checks: Vec<Box<dyn QaCheck>>,
}

impl AutoQa {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(QaConfig::default())
    }

    /// Create an engine with custom thresholds.
    pub fn with_config(config: QaConfig) -> Self {
        let checks: Vec<Box<dyn QaCheck>> = vec![
            Box::new(PolicyCheck),
            Box::new(LeakCheck),
            Box::new(ReadabilityCheck::new(config.readability_ceilings.clone())),
            Box::new(AmbiguityCheck),
            Box::new(SimilarityCheck::new(config.similarity_threshold)),
        ];
        Self { config, checks }
    }

    pub fn config(&self) -> &QaConfig {
        &self.config
    }

    /// Run all checks. The report lists every check, flagged or not.
    pub fn run(&self, candidate: &Candidate<'_>) -> QaReport {
        let mut report = QaReport::new();
        for check in &self.checks {
            report.insert(check.name(), check.check(candidate));
        }
        report
    }
}

impl Default for AutoQa {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the default auto-QA checks on a clue.
///
/// `existing_clues` is the caller's window of recent clues for the
/// near-duplicate check; nothing outside it is consulted.
///
/// # Example
///
/// ```
/// use cluekit::qa::{run_auto_qa, CheckName, QaFlag};
///
/// let report = run_auto_qa("Haus", "Dieses Haus ist ein Ort zum Wohnen", "de", 1, &["Ort zum Wohnen"]);
/// assert_eq!(report.get(CheckName::Leak), &[QaFlag::WordLeak]);
/// ```
pub fn run_auto_qa<S: AsRef<str>>(
    word: &str,
    clue_text: &str,
    language: &str,
    difficulty: i64,
    existing_clues: &[S],
) -> QaReport {
    DEFAULT_ENGINE.run(&Candidate::new(
        word,
        clue_text,
        language,
        difficulty,
        existing_clues,
    ))
}
