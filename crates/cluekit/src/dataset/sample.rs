//! Stratified review sampling over a chunked dataset.
//!
//! Entries are bucketed by (language, difficulty). Every bucket is shuffled
//! with one seeded generator, then the sample is drawn in two phases:
//!
//! 1. **Coverage pass**: one entry from each non-empty bucket, so every
//!    stratum is represented.
//! 2. **Round-robin fill**: sweep the buckets again, one entry each per sweep,
//!    until the sample is full or every bucket is empty.
//!
//! Buckets are always visited in sorted key order, so a fixed seed and dataset
//! produce the same sample in the same order. A corpus smaller than the
//! requested size yields a shorter sample, not an error.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::SampleConfig;
use crate::error::Result;
use crate::model::{Language, MAX_DIFFICULTY, MIN_DIFFICULTY};

use super::manifest::{read_chunk, Manifest};
use super::record::PilotEntry;

/// Stratification key.
pub type BucketKey = (Language, i64);

/// Entries grouped by stratum, iterated in sorted key order.
pub type Buckets = BTreeMap<BucketKey, Vec<PilotEntry>>;

/// Lazily read every entry listed in the manifest.
///
/// Languages and files are visited in manifest order. Missing chunk files are
/// skipped; entries whose language disagrees with the manifest key they were
/// listed under are dropped, as are entries that do not parse as a
/// [`PilotEntry`]. Only a chunk that is not a JSON array is an error.
pub fn dataset_entries<'a>(
    dataset_root: &'a Path,
    manifest: &'a Manifest,
) -> impl Iterator<Item = Result<PilotEntry>> + 'a {
    manifest.languages.iter().flat_map(move |(language, info)| {
        info.files.iter().flat_map(move |rel_file| {
            let path = dataset_root.join(rel_file);
            match read_chunk::<Value>(&path) {
                Ok(Some(raw)) => raw
                    .into_iter()
                    .filter(|value| {
                        value.get("language").and_then(Value::as_str) == Some(language.as_str())
                    })
                    .filter_map(|value| match PilotEntry::deserialize(value) {
                        Ok(entry) => Some(Ok(entry)),
                        Err(e) => {
                            debug!(path = %path.display(), error = %e, "malformed entry, skipping");
                            None
                        }
                    })
                    .collect(),
                Ok(None) => {
                    debug!(path = %path.display(), "chunk file missing, skipping");
                    Vec::new()
                }
                Err(e) => vec![Err(e)],
            }
        })
    })
}

/// Group entries by (language, difficulty).
///
/// Entries with an unsupported language or a difficulty outside 1..=5 are left
/// out.
pub fn bucket_entries(entries: impl IntoIterator<Item = PilotEntry>) -> Buckets {
    let mut buckets = Buckets::new();
    for entry in entries {
        let Some(language) = entry.language() else {
            continue;
        };
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&entry.difficulty) {
            continue;
        }
        buckets
            .entry((language, entry.difficulty))
            .or_default()
            .push(entry);
    }
    buckets
}

/// Draw a stratified sample from pre-built buckets.
///
/// All shuffles consume the same `rng`, in bucket key order.
pub fn draw_stratified(
    mut buckets: Buckets,
    sample_size: usize,
    rng: &mut fastrand::Rng,
) -> Vec<PilotEntry> {
    for items in buckets.values_mut() {
        rng.shuffle(items);
    }

    let available: usize = buckets.values().map(Vec::len).sum();
    let mut sample = Vec::with_capacity(sample_size.min(available));

    for items in buckets.values_mut() {
        if sample.len() >= sample_size {
            break;
        }
        if let Some(entry) = items.pop() {
            sample.push(entry);
        }
    }
    debug!(covered = sample.len(), buckets = buckets.len(), "coverage pass done");

    while sample.len() < sample_size {
        let mut progressed = false;
        for items in buckets.values_mut() {
            if sample.len() >= sample_size {
                break;
            }
            if let Some(entry) = items.pop() {
                sample.push(entry);
                progressed = true;
            }
        }
        if !progressed {
            debug!(
                requested = sample_size,
                drawn = sample.len(),
                "buckets exhausted before sample was full"
            );
            break;
        }
    }

    sample
}

/// Bucket and sample in-memory entries.
pub fn sample_entries(
    entries: impl IntoIterator<Item = PilotEntry>,
    sample_size: usize,
    rng: &mut fastrand::Rng,
) -> Vec<PilotEntry> {
    draw_stratified(bucket_entries(entries), sample_size, rng)
}

/// Builds review samples from generated datasets.
pub struct Sampler {
    config: SampleConfig,
}

impl Sampler {
    pub fn new() -> Self {
        Self::with_config(SampleConfig::default())
    }

    pub fn with_config(config: SampleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Sample the dataset at `dataset_root`.
    ///
    /// Fails with `ManifestNotFound` if the dataset has no manifest.
    pub fn sample(&self, dataset_root: impl AsRef<Path>) -> Result<Vec<PilotEntry>> {
        let root = dataset_root.as_ref();
        let manifest = Manifest::read(root)?;

        let entries = dataset_entries(root, &manifest).collect::<Result<Vec<_>>>()?;
        debug!(entries = entries.len(), "dataset loaded");

        let mut rng = fastrand::Rng::with_seed(self.config.seed);
        Ok(sample_entries(entries, self.config.sample_size, &mut rng))
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a stratified review sample of up to `sample_size` entries.
///
/// # Example
///
/// ```no_run
/// use cluekit::dataset::build_review_sample;
///
/// let sample = build_review_sample("data/pilot", 500, 42).unwrap();
/// println!("{} entries drawn", sample.len());
/// ```
pub fn build_review_sample(
    dataset_root: impl AsRef<Path>,
    sample_size: usize,
    seed: u64,
) -> Result<Vec<PilotEntry>> {
    Sampler::with_config(SampleConfig { sample_size, seed }).sample(dataset_root)
}
