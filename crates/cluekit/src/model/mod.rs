//! Entry data model, invariant validation and status lifecycle.

mod entry;
mod lifecycle;
mod types;

pub use entry::{
    validate_entry, ContentEntry, EntryIssue, SourceTrace, MAX_DIFFICULTY, MIN_DIFFICULTY,
    QUALITY_SCORE_KEYS,
};
pub use lifecycle::{allowed_transitions, can_transition};
pub use types::{ClueStyle, Language, Status};

#[cfg(test)]
pub(crate) use entry::fixtures;
