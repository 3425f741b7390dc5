//! cluekit: content lifecycle and quality assurance for word-puzzle clues.
//!
//! Clue entries move through a fixed lifecycle (draft, reviewed, approved,
//! deprecated). Along the way they are checked by automated heuristics,
//! sampled for human review and decided on by reviewers.
//!
//! # Core Principles
//!
//! - **Check, never coerce**: invalid entries are reported, not repaired
//! - **Reproducible**: sampling and generation are deterministic under a seed
//! - **Traceable**: every entry carries its source and license
//!
//! # Example
//!
//! ```
//! use cluekit::qa::{run_auto_qa, QaFlag};
//!
//! let existing = ["Tall plant with a trunk"];
//! let report = run_auto_qa("tree", "Tall plant with trunk", "en", 1, &existing);
//!
//! assert!(report.contains(QaFlag::SimilarityFlag));
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod qa;
pub mod review;

pub use config::{PilotConfig, PipelineConfig, QaConfig, SampleConfig};
pub use dataset::{build_review_sample, PilotEntry};
pub use error::{CluekitError, Result};
pub use model::{can_transition, validate_entry, ContentEntry, Language, Status};
pub use qa::{run_auto_qa, QaFlag, QaReport};
pub use review::{apply_decision, QueueItem, ReviewDecision, ReviewQueue};
