//! Automated quality checks for candidate clues.
//!
//! Five independent heuristics run against each clue:
//!
//! | check | flag |
//! |---|---|
//! | policy | `policy_unsafe` |
//! | leak | `word_leak` or `stem_leak` |
//! | readability | `readability_flag` |
//! | ambiguity | `ambiguity_flag` |
//! | similarity | `similarity_flag` |
//!
//! The engine never fails: missing evidence (an unsupported language, a
//! difficulty without a length ceiling) yields no flag.

mod checks;
mod engine;
mod matcher;
mod report;

pub use checks::{
    normalize, AmbiguityCheck, Candidate, LeakCheck, PolicyCheck, QaCheck, ReadabilityCheck,
    SimilarityCheck,
};
pub use engine::{run_auto_qa, AutoQa};
pub use matcher::{ratio, Match, SequenceMatcher};
pub use report::{CheckName, QaFlag, QaReport};
