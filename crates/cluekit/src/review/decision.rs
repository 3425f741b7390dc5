//! Reviewer decisions: actions, reason codes and their validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CluekitError, Result};
use crate::model::Status;

/// What a reviewer does with a queue item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Approve,
    RequestEdit,
    Escalate,
    Reject,
    Deprecate,
}

impl ReviewAction {
    pub const ALL: [ReviewAction; 5] = [
        ReviewAction::Approve,
        ReviewAction::RequestEdit,
        ReviewAction::Escalate,
        ReviewAction::Reject,
        ReviewAction::Deprecate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "approve",
            ReviewAction::RequestEdit => "request_edit",
            ReviewAction::Escalate => "escalate",
            ReviewAction::Reject => "reject",
            ReviewAction::Deprecate => "deprecate",
        }
    }

    /// Status an item ends up in after this action.
    pub fn resulting_status(&self) -> Status {
        match self {
            ReviewAction::Approve => Status::Approved,
            ReviewAction::RequestEdit => Status::Draft,
            ReviewAction::Escalate => Status::Reviewed,
            ReviewAction::Reject | ReviewAction::Deprecate => Status::Deprecated,
        }
    }

    /// Every action except approval must be justified with a reason code.
    pub fn requires_reason(&self) -> bool {
        !matches!(self, ReviewAction::Approve)
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewAction {
    type Err = CluekitError;

    fn from_str(s: &str) -> Result<Self> {
        ReviewAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| CluekitError::InvalidAction(s.to_string()))
    }
}

/// Why a reviewer did not approve an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    PolicyRisk,
    Ambiguity,
    TooEasyOrTooHard,
    PoorLocalization,
    UnfunnyOrLowQuality,
    Duplicate,
}

impl ReasonCode {
    pub const ALL: [ReasonCode; 6] = [
        ReasonCode::PolicyRisk,
        ReasonCode::Ambiguity,
        ReasonCode::TooEasyOrTooHard,
        ReasonCode::PoorLocalization,
        ReasonCode::UnfunnyOrLowQuality,
        ReasonCode::Duplicate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::PolicyRisk => "policy_risk",
            ReasonCode::Ambiguity => "ambiguity",
            ReasonCode::TooEasyOrTooHard => "too_easy_or_too_hard",
            ReasonCode::PoorLocalization => "poor_localization",
            ReasonCode::UnfunnyOrLowQuality => "unfunny_or_low_quality",
            ReasonCode::Duplicate => "duplicate",
        }
    }

    /// Parse a reason code, returning `None` when it is not in the set.
    pub fn from_code(code: &str) -> Option<Self> {
        ReasonCode::ALL.into_iter().find(|reason| reason.as_str() == code)
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reviewer's decision on one queue item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDecision {
    pub action: ReviewAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<ReasonCode>,

    #[serde(default)]
    pub note: String,
}

impl ReviewDecision {
    /// Create a decision with no reason or note.
    pub fn new(action: ReviewAction) -> Self {
        Self {
            action,
            reason_code: None,
            note: String::new(),
        }
    }

    pub fn approve() -> Self {
        Self::new(ReviewAction::Approve)
    }

    /// Create a decision with a reason code.
    pub fn with_reason(action: ReviewAction, reason: ReasonCode) -> Self {
        Self {
            reason_code: Some(reason),
            ..Self::new(action)
        }
    }

    /// Set the reviewer's note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Build a decision from raw strings, as submitted by a review UI.
    ///
    /// Unknown actions fail with `InvalidAction`. An unrecognized reason code
    /// fails with `MissingOrInvalidReasonCode` unless the action is approve,
    /// which ignores it. A missing reason is accepted here and rejected when
    /// the decision is applied.
    pub fn from_raw(
        action: &str,
        reason_code: Option<&str>,
        note: impl Into<String>,
    ) -> Result<Self> {
        let action: ReviewAction = action.parse()?;

        let reason_code = match reason_code {
            None => None,
            Some(raw) => match ReasonCode::from_code(raw) {
                Some(reason) => Some(reason),
                None if action.requires_reason() => {
                    return Err(CluekitError::MissingOrInvalidReasonCode {
                        action: action.to_string(),
                    });
                }
                None => None,
            },
        };

        Ok(Self {
            action,
            reason_code,
            note: note.into(),
        })
    }

    /// Check the reason-code rule for this decision's action.
    pub fn check(&self) -> Result<()> {
        if self.action.requires_reason() && self.reason_code.is_none() {
            return Err(CluekitError::MissingOrInvalidReasonCode {
                action: self.action.to_string(),
            });
        }
        Ok(())
    }
}
