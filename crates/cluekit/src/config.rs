//! Pipeline configuration.
//!
//! Every section has defaults matching the production pipeline, so a config
//! file only needs to name the values it overrides:
//!
//! ```json
//! { "sample": { "sample_size": 120, "seed": 7 } }
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CluekitError, Result};

/// Configuration for the auto-QA checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QaConfig {
    /// Ratio above which a prior clue counts as a near-duplicate.
    pub similarity_threshold: f64,
    /// How many recent clues the generator compares each new clue against.
    pub similarity_window: usize,
    /// Maximum clue length (in characters) per difficulty level.
    pub readability_ceilings: IndexMap<i64, usize>,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.88,
            similarity_window: 20,
            readability_ceilings: [(1, 55), (2, 65), (3, 75), (4, 85), (5, 90)]
                .into_iter()
                .collect(),
        }
    }
}

/// Configuration for review sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Requested number of entries in the review sample.
    pub sample_size: usize,
    /// Seed for the bucket shuffles.
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            sample_size: 500,
            seed: 42,
        }
    }
}

/// Configuration for pilot dataset generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PilotConfig {
    /// Entries generated per language.
    pub per_language: usize,
    /// Entries per chunk file.
    pub chunk_size: usize,
    /// Seed for the synthetic quality scores.
    pub seed: u64,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            per_language: 1200,
            chunk_size: 300,
            seed: 42,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub qa: QaConfig,
    pub sample: SampleConfig,
    pub pilot: PilotConfig,
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CluekitError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: PipelineConfig = serde_json::from_str(&content).map_err(|e| {
            CluekitError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        config.check()?;

        Ok(config)
    }

    /// Reject values the pipeline cannot run with.
    pub fn check(&self) -> Result<()> {
        if self.pilot.chunk_size == 0 {
            return Err(CluekitError::Config(
                "pilot.chunk_size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.qa.similarity_threshold) {
            return Err(CluekitError::Config(format!(
                "qa.similarity_threshold must be within [0, 1], got {}",
                self.qa.similarity_threshold
            )));
        }
        Ok(())
    }
}
