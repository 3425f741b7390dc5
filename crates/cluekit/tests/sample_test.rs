//! Integration tests for dataset generation, sampling and review exports.

use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use cluekit::dataset::{
    build_review_sample, write_pilot_dataset, write_review_exports, Manifest, PilotEntry, Sampler,
    MANIFEST_FILE,
};
use cluekit::model::{Language, Status};
use cluekit::review::{ReviewDecision, ReviewQueue};
use cluekit::{CluekitError, SampleConfig};

/// Generate a small dataset into a fresh temp dir.
fn dataset(per_language: usize, chunk_size: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_pilot_dataset(dir.path(), per_language, chunk_size).expect("Generation failed");
    dir
}

fn ids(sample: &[PilotEntry]) -> Vec<String> {
    sample.iter().map(|e| e.entry_id.clone()).collect()
}

// =============================================================================
// Sampling
// =============================================================================

#[test]
fn test_sample_has_requested_size() {
    let dir = dataset(60, 25);
    let sample = build_review_sample(dir.path(), 120, 7).unwrap();
    assert_eq!(sample.len(), 120);

    let unique: BTreeSet<&str> = sample.iter().map(|e| e.entry_id.as_str()).collect();
    assert_eq!(unique.len(), 120);
}

#[test]
fn test_sample_covers_every_stratum() {
    let dir = dataset(20, 10);
    let sample = build_review_sample(dir.path(), 20, 3).unwrap();

    // 4 languages x 5 difficulties, so the coverage pass fills the whole sample
    let strata: BTreeSet<(String, i64)> = sample
        .iter()
        .map(|e| (e.language.clone(), e.difficulty))
        .collect();
    assert_eq!(strata.len(), 20);
}

#[test]
fn test_same_seed_same_sample() {
    let dir = dataset(50, 20);
    let a = build_review_sample(dir.path(), 70, 11).unwrap();
    let b = build_review_sample(dir.path(), 70, 11).unwrap();
    assert_eq!(ids(&a), ids(&b));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_different_seed_different_sample() {
    let dir = dataset(50, 20);
    let a = build_review_sample(dir.path(), 70, 11).unwrap();
    let b = build_review_sample(dir.path(), 70, 12).unwrap();
    assert_ne!(ids(&a), ids(&b));
}

#[test]
fn test_small_corpus_returns_short_sample() {
    let dir = dataset(6, 4);
    let sample = build_review_sample(dir.path(), 500, 42).unwrap();
    assert_eq!(sample.len(), 24);
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();
    let err = build_review_sample(dir.path(), 10, 42).unwrap_err();
    match err {
        CluekitError::ManifestNotFound(path) => {
            assert_eq!(path, dir.path().join(MANIFEST_FILE));
        }
        other => panic!("expected ManifestNotFound, got {other}"),
    }
}

#[test]
fn test_missing_chunk_is_skipped() {
    let dir = dataset(10, 5);
    let manifest = Manifest::read(dir.path()).unwrap();
    fs::remove_file(dir.path().join(&manifest.languages["fr"].files[1])).unwrap();

    let sample = build_review_sample(dir.path(), 1000, 42).unwrap();
    assert_eq!(sample.len(), 35);
    assert_eq!(sample.iter().filter(|e| e.language == "fr").count(), 5);
}

#[test]
fn test_language_mismatch_is_dropped() {
    let dir = dataset(5, 5);
    let manifest = Manifest::read(dir.path()).unwrap();

    // Relabel two German entries as English inside the German chunk
    let path = dir.path().join(&manifest.languages["de"].files[0]);
    let mut chunk: Vec<PilotEntry> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    chunk[0].language = "en".to_string();
    chunk[1].language = "en".to_string();
    fs::write(&path, serde_json::to_string_pretty(&chunk).unwrap()).unwrap();

    let sample = build_review_sample(dir.path(), 1000, 42).unwrap();
    assert_eq!(sample.len(), 18);
    assert_eq!(sample.iter().filter(|e| e.language == "de").count(), 3);
    assert_eq!(sample.iter().filter(|e| e.language == "en").count(), 5);
}

/// Rewrite one chunk of a language as raw JSON, editing its entries in place.
fn edit_chunk(dir: &TempDir, language: &str, edit: impl FnOnce(&mut Vec<serde_json::Value>)) {
    let manifest = Manifest::read(dir.path()).unwrap();
    let path = dir.path().join(&manifest.languages[language].files[0]);
    let mut chunk: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    edit(&mut chunk);
    fs::write(&path, serde_json::to_string_pretty(&chunk).unwrap()).unwrap();
}

#[test]
fn test_entry_without_language_is_dropped() {
    let dir = dataset(5, 5);
    edit_chunk(&dir, "de", |chunk| {
        chunk[0].as_object_mut().unwrap().remove("language");
    });

    let sample = build_review_sample(dir.path(), 1000, 42).unwrap();
    assert_eq!(sample.len(), 19);
    assert!(sample.iter().all(|e| e.entry_id != "de-000000"));
}

#[test]
fn test_mismatched_entry_with_bad_fields_is_dropped() {
    let dir = dataset(5, 5);
    edit_chunk(&dir, "en", |chunk| {
        chunk[2]["language"] = serde_json::json!("xx");
        chunk[2]["source_trace"]["imported_at"] = serde_json::json!("2026-02-01");
    });

    let sample = build_review_sample(dir.path(), 1000, 42).unwrap();
    assert_eq!(sample.len(), 19);
    assert_eq!(sample.iter().filter(|e| e.language == "en").count(), 4);
}

#[test]
fn test_unparseable_entry_is_skipped() {
    let dir = dataset(5, 5);
    edit_chunk(&dir, "fr", |chunk| {
        chunk[1]["source_trace"]["imported_at"] = serde_json::json!("not a date");
        chunk[3].as_object_mut().unwrap().remove("word");
    });

    let sample = build_review_sample(dir.path(), 1000, 42).unwrap();
    assert_eq!(sample.len(), 18);
    assert_eq!(sample.iter().filter(|e| e.language == "fr").count(), 3);
}

#[test]
fn test_malformed_chunk_is_an_error() {
    let dir = dataset(5, 5);
    let manifest = Manifest::read(dir.path()).unwrap();
    fs::write(dir.path().join(&manifest.languages["es"].files[0]), "[{").unwrap();

    let err = build_review_sample(dir.path(), 10, 42).unwrap_err();
    assert!(matches!(err, CluekitError::Json(_)));
}

#[test]
fn test_sampler_uses_config() {
    let dir = dataset(30, 30);
    let sampler = Sampler::with_config(SampleConfig {
        sample_size: 33,
        seed: 5,
    });
    let sample = sampler.sample(dir.path()).unwrap();
    assert_eq!(ids(&sample), ids(&build_review_sample(dir.path(), 33, 5).unwrap()));
}

// =============================================================================
// Exports and queue
// =============================================================================

#[test]
fn test_sample_to_exports_and_queue() {
    let dir = dataset(25, 10);
    let sample = build_review_sample(dir.path(), 40, 7).unwrap();

    let out = dir.path().join("review");
    let paths = write_review_exports(&sample, &out).unwrap();
    let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
    assert_eq!(reader.records().count(), 40);

    let mut queue = ReviewQueue::from_sample(&sample);
    assert_eq!(queue.items.len(), 40);
    assert_eq!(queue.by_language(Language::De).len(), 10);

    let first = queue.items[0].entry_id.clone();
    queue.decide(&first, &ReviewDecision::approve()).unwrap();

    let queue_path = out.join("queue.json");
    queue.save(&queue_path).unwrap();
    let loaded = ReviewQueue::load(&queue_path).unwrap();
    assert_eq!(loaded.get(&first).unwrap().status, Status::Approved);
    assert_eq!(loaded.pending().len(), 39);
}
