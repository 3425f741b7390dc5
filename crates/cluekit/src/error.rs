//! Error types for the cluekit library.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::Status;

/// Main error type for cluekit operations.
#[derive(Debug, Error)]
pub enum CluekitError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the CSV writer.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Saving or loading a persisted document failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dataset has no manifest (not generated yet).
    #[error("manifest_not_found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// Chunk size must be at least one.
    #[error("chunk_size_must_be_positive")]
    InvalidChunkSize,

    /// Review action is not one of the known actions.
    #[error("invalid_action: '{0}'")]
    InvalidAction(String),

    /// A non-approve action was submitted without a recognized reason code.
    #[error("A valid reason_code is required for action '{action}'")]
    MissingOrInvalidReasonCode { action: String },

    /// A token could not be parsed into one of the closed value sets.
    #[error("Unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    /// The lifecycle graph has no edge between the two states.
    #[error("Illegal status transition: {from} -> {to}")]
    IllegalTransition { from: Status, to: Status },

    /// No queue item with the given entry id.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),
}

/// Result type alias for cluekit operations.
pub type Result<T> = std::result::Result<T, CluekitError>;
