//! Closed value sets shared across the pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CluekitError;

/// Supported content language.
///
/// Variants are declared in code order so the derived `Ord` sorts the same way
/// the language codes do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    De,
    En,
    Es,
    Fr,
}

impl Language {
    /// All supported languages, in code order.
    pub const ALL: [Language; 4] = [Language::De, Language::En, Language::Es, Language::Fr];

    /// Two-letter language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Parse a language code, returning `None` for unsupported languages.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Language::De),
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "fr" => Some(Language::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CluekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| CluekitError::UnknownValue {
            kind: "language",
            value: s.to_string(),
        })
    }
}

/// Presentation style of a clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueStyle {
    Neutral,
    Funny,
    Trivia,
    Wordplay,
}

impl ClueStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClueStyle::Neutral => "neutral",
            ClueStyle::Funny => "funny",
            ClueStyle::Trivia => "trivia",
            ClueStyle::Wordplay => "wordplay",
        }
    }

    /// Parse a style token, returning `None` when unrecognized.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "neutral" => Some(ClueStyle::Neutral),
            "funny" => Some(ClueStyle::Funny),
            "trivia" => Some(ClueStyle::Trivia),
            "wordplay" => Some(ClueStyle::Wordplay),
            _ => None,
        }
    }
}

impl fmt::Display for ClueStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a content entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Creation state.
    #[default]
    Draft,
    /// Seen by a reviewer, awaiting a final call.
    Reviewed,
    /// Cleared for use in the game.
    Approved,
    /// Retired. Terminal.
    Deprecated,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Draft,
        Status::Reviewed,
        Status::Approved,
        Status::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Reviewed => "reviewed",
            Status::Approved => "approved",
            Status::Deprecated => "deprecated",
        }
    }

    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Reviewed => "Reviewed",
            Status::Approved => "Approved",
            Status::Deprecated => "Deprecated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = CluekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CluekitError::UnknownValue {
                kind: "status",
                value: s.to_string(),
            })
    }
}
