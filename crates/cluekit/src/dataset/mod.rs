//! Pilot dataset generation, chunk storage and review sampling.
//!
//! A dataset lives in a directory with a manifest and one subdirectory per
//! language:
//!
//! ```text
//! data/pilot/
//! ├── manifest.json
//! ├── de/batch_001.json
//! └── en/batch_001.json
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use cluekit::dataset::{build_review_sample, write_pilot_dataset, write_review_exports};
//!
//! write_pilot_dataset("data/pilot", 1200, 300).unwrap();
//! let sample = build_review_sample("data/pilot", 500, 42).unwrap();
//! write_review_exports(&sample, "data/review").unwrap();
//! ```

mod chunk;
mod export;
mod manifest;
mod pilot;
mod record;
mod sample;

pub use chunk::{chunk_entries, chunk_file_name};
pub use export::{write_review_exports, ExportPaths, CSV_COLUMNS, SAMPLE_CSV_FILE, SAMPLE_JSON_FILE};
pub use manifest::{LanguageChunks, Manifest, MANIFEST_FILE};
pub use pilot::{generate_language_entries, write_pilot_dataset, PilotGenerator, PILOT_LANGUAGES};
pub use record::PilotEntry;
pub use sample::{
    build_review_sample, bucket_entries, dataset_entries, draw_stratified, sample_entries,
    BucketKey, Buckets, Sampler,
};
