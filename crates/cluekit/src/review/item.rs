//! Queue items and decision application.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::PilotEntry;
use crate::error::Result;
use crate::model::{ContentEntry, Language, SourceTrace, Status};
use crate::qa::QaFlag;

use super::decision::ReviewDecision;

fn reviewed() -> Status {
    Status::Reviewed
}

/// Review-queue projection of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    pub entry_id: String,
    pub language: Language,
    pub word: String,
    pub clue_text: String,

    /// Auto-QA flags raised for the clue.
    #[serde(default)]
    pub auto_flags: Vec<QaFlag>,

    /// Quality scores shown to the reviewer.
    #[serde(default)]
    pub score_summary: IndexMap<String, f64>,

    pub source_trace: SourceTrace,

    #[serde(default = "reviewed")]
    pub status: Status,
}

impl QueueItem {
    /// Create an item awaiting review.
    pub fn new(
        entry_id: impl Into<String>,
        language: Language,
        word: impl Into<String>,
        clue_text: impl Into<String>,
        source_trace: SourceTrace,
    ) -> Self {
        Self {
            entry_id: entry_id.into(),
            language,
            word: word.into(),
            clue_text: clue_text.into(),
            auto_flags: Vec::new(),
            score_summary: IndexMap::new(),
            source_trace,
            status: reviewed(),
        }
    }

    /// Attach auto-QA flags.
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = QaFlag>) -> Self {
        self.auto_flags.extend(flags);
        self
    }

    /// Attach the score summary.
    pub fn with_scores(mut self, scores: IndexMap<String, f64>) -> Self {
        self.score_summary = scores;
        self
    }

    /// Project a content entry into the queue.
    ///
    /// Fails with `UnknownValue` if the entry's language is not supported.
    pub fn from_entry(entry: &ContentEntry, flags: Vec<QaFlag>) -> Result<Self> {
        let language: Language = entry.language.parse()?;
        Ok(Self::new(
            &entry.entry_id,
            language,
            &entry.word,
            &entry.clue_text,
            entry.source_trace.clone(),
        )
        .with_flags(flags)
        .with_scores(entry.quality_scores.clone()))
    }

    /// Project a pilot entry into the queue, flattening its QA report.
    pub fn from_pilot(entry: &PilotEntry) -> Result<Self> {
        let language: Language = entry.language.parse()?;
        Ok(Self::new(
            &entry.entry_id,
            language,
            &entry.word,
            &entry.clue_text,
            entry.source_trace.clone(),
        )
        .with_flags(entry.auto_qa.flags())
        .with_scores(entry.quality_scores.clone()))
    }

    /// Apply a decision in place and return the new status.
    ///
    /// Only `status` changes. On error the item is left as it was.
    pub fn apply(&mut self, decision: &ReviewDecision) -> Result<Status> {
        decision.check()?;
        let next = decision.action.resulting_status();
        debug!(
            entry_id = %self.entry_id,
            action = %decision.action,
            from = %self.status,
            to = %next,
            "decision applied"
        );
        self.status = next;
        Ok(next)
    }

    pub fn is_pending(&self) -> bool {
        self.status == Status::Reviewed
    }
}

/// Apply a reviewer decision to a queue item.
///
/// Takes the item by value and hands back the updated one; whoever owns the
/// queue stores the result.
///
/// # Example
///
/// ```
/// use cluekit::review::{apply_decision, QueueItem, ReasonCode, ReviewAction, ReviewDecision};
/// use cluekit::model::{Language, SourceTrace, Status};
///
/// let trace = SourceTrace {
///     source_name: "manual".into(),
///     source_url: "internal://manual".into(),
///     license_id: "internal".into(),
///     imported_at: chrono::Utc::now(),
///     reviewer: "pending".into(),
/// };
/// let item = QueueItem::new("en-1", Language::En, "tree", "Tall plant", trace);
///
/// let decision = ReviewDecision::with_reason(ReviewAction::Reject, ReasonCode::Duplicate);
/// let item = apply_decision(item, &decision).unwrap();
/// assert_eq!(item.status, Status::Deprecated);
/// ```
pub fn apply_decision(mut item: QueueItem, decision: &ReviewDecision) -> Result<QueueItem> {
    item.apply(decision)?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CluekitError;
    use crate::model::fixtures::haus;
    use crate::review::{ReasonCode, ReviewAction};

    fn item() -> QueueItem {
        QueueItem::from_entry(&haus(), vec![QaFlag::StemLeak]).unwrap()
    }

    #[test]
    fn test_from_entry() {
        let item = item();
        assert_eq!(item.entry_id, "de-haus-001");
        assert_eq!(item.language, Language::De);
        assert_eq!(item.status, Status::Reviewed);
        assert_eq!(item.auto_flags, vec![QaFlag::StemLeak]);
        assert_eq!(item.score_summary["predicted_solve_rate"], 0.82);
    }

    #[test]
    fn test_from_entry_unsupported_language() {
        let mut entry = haus();
        entry.language = "it".to_string();
        let err = QueueItem::from_entry(&entry, Vec::new()).unwrap_err();
        assert!(matches!(err, CluekitError::UnknownValue { .. }));
    }

    #[test]
    fn test_action_status_mapping() {
        let cases = [
            (ReviewAction::Approve, Status::Approved),
            (ReviewAction::RequestEdit, Status::Draft),
            (ReviewAction::Escalate, Status::Reviewed),
            (ReviewAction::Reject, Status::Deprecated),
            (ReviewAction::Deprecate, Status::Deprecated),
        ];
        for (action, expected) in cases {
            let decision = ReviewDecision::with_reason(action, ReasonCode::Ambiguity);
            let updated = apply_decision(item(), &decision).unwrap();
            assert_eq!(updated.status, expected, "{action}");
        }
    }

    #[test]
    fn test_reject_without_reason_fails() {
        let mut item = item();
        let err = item.apply(&ReviewDecision::new(ReviewAction::Reject)).unwrap_err();
        assert!(matches!(err, CluekitError::MissingOrInvalidReasonCode { .. }));
        assert_eq!(item.status, Status::Reviewed);
    }

    #[test]
    fn test_reject_with_reason() {
        let decision = ReviewDecision::from_raw("reject", Some("duplicate"), "").unwrap();
        let updated = apply_decision(item(), &decision).unwrap();
        assert_eq!(updated.status, Status::Deprecated);
    }

    #[test]
    fn test_approve_without_reason() {
        let updated = apply_decision(item(), &ReviewDecision::approve()).unwrap();
        assert_eq!(updated.status, Status::Approved);
    }

    #[test]
    fn test_only_status_changes() {
        let before = item();
        let decision =
            ReviewDecision::with_reason(ReviewAction::Escalate, ReasonCode::PolicyRisk)
                .with_note("needs legal look");
        let mut after = apply_decision(before.clone(), &decision).unwrap();
        after.status = before.status;
        assert_eq!(after, before);
    }
}
