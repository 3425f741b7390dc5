//! Synthetic pilot dataset generation.
//!
//! Builds templated word/clue entries per language, runs auto-QA on each one
//! against the clues generated just before it, and writes the result as chunk
//! files plus a manifest:
//!
//! ```text
//! out/
//! ├── manifest.json
//! ├── de/batch_001.json
//! ├── de/batch_002.json
//! └── en/batch_001.json ...
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::{PilotConfig, QaConfig};
use crate::error::{CluekitError, Result};
use crate::model::{Language, SourceTrace, Status};
use crate::qa::{AutoQa, Candidate};

use super::chunk::{chunk_entries, chunk_file_name};
use super::manifest::{LanguageChunks, Manifest};
use super::record::PilotEntry;

/// Languages written by the generator, in manifest order.
pub const PILOT_LANGUAGES: [Language; 4] =
    [Language::De, Language::En, Language::Fr, Language::Es];

fn word_stems(language: Language) -> &'static [&'static str] {
    match language {
        Language::De => &["haus", "baum", "wasser", "schule", "garten", "fenster", "straße", "blume"],
        Language::En => &["house", "tree", "water", "school", "garden", "window", "street", "flower"],
        Language::Fr => &["maison", "arbre", "eau", "ecole", "jardin", "fenetre", "rue", "fleur"],
        Language::Es => &["casa", "arbol", "agua", "escuela", "jardin", "ventana", "calle", "flor"],
    }
}

fn clue_templates(language: Language) -> &'static [&'static str] {
    match language {
        Language::De => &[
            "Alltagswort rund um {word}",
            "Begriff aus dem Alltag: {word}",
            "Ein bekanntes Thema in Richtung {word}",
        ],
        Language::En => &[
            "Common daily-life term related to {word}",
            "Everyday concept connected to {word}",
            "A familiar topic around {word}",
        ],
        Language::Fr => &[
            "Terme courant lié à {word}",
            "Concept du quotidien autour de {word}",
            "Mot familier en lien avec {word}",
        ],
        Language::Es => &[
            "Término cotidiano relacionado con {word}",
            "Concepto diario en torno a {word}",
            "Idea común vinculada a {word}",
        ],
    }
}

/// Quality-score ranges drawn for each generated entry.
const SCORE_RANGES: [(&str, f64, f64); 4] = [
    ("ambiguity", 0.03, 0.35),
    ("readability", 0.7, 0.97),
    ("similarity", 0.02, 0.25),
    ("predicted_solve_rate", 0.4, 0.9),
];

fn build_word(language: Language, idx: usize) -> String {
    let stems = word_stems(language);
    format!("{}{:04}", stems[idx % stems.len()], idx)
}

/// Fill a clue template with the word minus its last two characters, so
/// the full answer never appears verbatim.
fn build_clue(language: Language, word: &str, idx: usize) -> String {
    let templates = clue_templates(language);
    let keep = word.chars().count().saturating_sub(2);
    let hint: String = word.chars().take(keep).collect();
    templates[idx % templates.len()].replace("{word}", &hint)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Generates pilot datasets.
pub struct PilotGenerator {
    config: PilotConfig,
    qa: AutoQa,
}

impl PilotGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(PilotConfig::default(), QaConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: PilotConfig, qa: QaConfig) -> Self {
        Self {
            config,
            qa: AutoQa::with_config(qa),
        }
    }

    pub fn config(&self) -> &PilotConfig {
        &self.config
    }

    /// Generate `count` entries for one language.
    pub fn generate_language(&self, language: Language, count: usize) -> Vec<PilotEntry> {
        let mut rng = fastrand::Rng::with_seed(self.config.seed);
        let window = self.qa.config().similarity_window;
        let mut entries: Vec<PilotEntry> = Vec::with_capacity(count);

        for i in 0..count {
            let word = build_word(language, i);
            let clue = build_clue(language, &word, i);
            let difficulty = 1 + (i % 5) as i64;

            let recent: Vec<&str> = entries[entries.len().saturating_sub(window)..]
                .iter()
                .map(|e| e.clue_text.as_str())
                .collect();
            let auto_qa = self.qa.run(&Candidate::new(
                &word,
                &clue,
                language.code(),
                difficulty,
                &recent,
            ));

            let quality_scores: IndexMap<String, f64> = SCORE_RANGES
                .iter()
                .map(|&(key, lo, hi)| (key.to_string(), round3(lo + rng.f64() * (hi - lo))))
                .collect();

            entries.push(PilotEntry {
                entry_id: format!("{}-{:06}", language.code(), i),
                language: language.code().to_string(),
                word,
                difficulty,
                clue_text: clue,
                clue_style: (if i % 3 == 0 { "funny" } else { "neutral" }).to_string(),
                status: Status::Draft,
                quality_scores,
                auto_qa,
                source_trace: SourceTrace {
                    source_name: "phase2-pilot-generator".to_string(),
                    source_url: "internal://pilot_generation".to_string(),
                    license_id: "internal".to_string(),
                    imported_at: Utc::now(),
                    reviewer: "pending".to_string(),
                },
                version: 1,
            });
        }

        entries
    }

    /// Generate every pilot language and write chunk files and the manifest.
    pub fn write_dataset(&self, output_dir: impl AsRef<Path>) -> Result<Manifest> {
        let base = output_dir.as_ref();
        create_dir(base)?;

        let mut manifest = Manifest {
            generated_at: Utc::now(),
            per_language: self.config.per_language,
            chunk_size: self.config.chunk_size,
            languages: IndexMap::new(),
        };

        for language in PILOT_LANGUAGES {
            let entries = self.generate_language(language, self.config.per_language);
            let chunks = chunk_entries(&entries, self.config.chunk_size)?;

            let lang_dir = base.join(language.code());
            create_dir(&lang_dir)?;

            let mut files = Vec::with_capacity(chunks.len());
            for (idx, chunk) in chunks.iter().enumerate() {
                let name = chunk_file_name(idx + 1);
                write_json(&lang_dir.join(&name), chunk)?;
                files.push(format!("{}/{}", language.code(), name));
            }
            debug!(language = %language, entries = entries.len(), chunks = files.len(), "wrote language chunks");

            manifest.languages.insert(
                language.code().to_string(),
                LanguageChunks {
                    entries: entries.len(),
                    chunks: chunks.len(),
                    files,
                },
            );
        }

        let path = manifest.write(base)?;
        info!(
            path = %path.display(),
            entries = manifest.total_entries(),
            "pilot dataset written"
        );
        Ok(manifest)
    }
}

impl Default for PilotGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate `count` pilot entries for a language with the default QA rules.
pub fn generate_language_entries(language: Language, count: usize, seed: u64) -> Vec<PilotEntry> {
    let config = PilotConfig {
        seed,
        ..PilotConfig::default()
    };
    PilotGenerator::with_config(config, QaConfig::default()).generate_language(language, count)
}

/// Write a full pilot dataset (all pilot languages) to `output_dir`.
pub fn write_pilot_dataset(
    output_dir: impl AsRef<Path>,
    per_language: usize,
    chunk_size: usize,
) -> Result<Manifest> {
    let config = PilotConfig {
        per_language,
        chunk_size,
        ..PilotConfig::default()
    };
    PilotGenerator::with_config(config, QaConfig::default()).write_dataset(output_dir)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| CluekitError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| CluekitError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush().map_err(|e| CluekitError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::{CheckName, QaFlag};
    use tempfile::TempDir;

    #[test]
    fn test_word_and_clue_shapes() {
        assert_eq!(build_word(Language::En, 1), "tree0001");
        assert_eq!(build_word(Language::De, 14), "straße0014");
        assert_eq!(
            build_clue(Language::En, "tree0001", 1),
            "Everyday concept connected to tree00"
        );
        assert_eq!(
            build_clue(Language::De, "straße0014", 14),
            "Ein bekanntes Thema in Richtung straße00"
        );
    }

    #[test]
    fn test_generated_entries() {
        let entries = generate_language_entries(Language::Fr, 12, 42);
        assert_eq!(entries.len(), 12);

        let first = &entries[0];
        assert_eq!(first.entry_id, "fr-000000");
        assert_eq!(first.difficulty, 1);
        assert_eq!(first.clue_style, "funny");
        assert_eq!(entries[1].clue_style, "neutral");
        assert_eq!(entries[4].difficulty, 5);
        assert_eq!(entries[5].difficulty, 1);

        for entry in &entries {
            assert_eq!(entry.language, "fr");
            assert_eq!(entry.status, Status::Draft);
            for (key, lo, hi) in SCORE_RANGES {
                let score = entry.quality_scores[key];
                assert!(score >= lo - 1e-9 && score <= hi + 1e-9, "{key}={score}");
            }
            // The clue carries a truncated copy of the word
            assert!(!entry.auto_qa.contains(QaFlag::WordLeak));
        }
    }

    #[test]
    fn test_templated_clues_trip_stem_leak() {
        let entries = generate_language_entries(Language::En, 3, 42);
        assert_eq!(entries[0].auto_qa.get(CheckName::Leak), &[QaFlag::StemLeak]);
    }

    #[test]
    fn test_scores_are_seeded() {
        let a = generate_language_entries(Language::Es, 5, 7);
        let b = generate_language_entries(Language::Es, 5, 7);
        let c = generate_language_entries(Language::Es, 5, 8);

        fn scores(entries: &[PilotEntry]) -> Vec<IndexMap<String, f64>> {
            entries.iter().map(|e| e.quality_scores.clone()).collect()
        }
        assert_eq!(scores(&a), scores(&b));
        assert_ne!(scores(&a), scores(&c));
    }

    #[test]
    fn test_write_dataset_layout() {
        let dir = TempDir::new().unwrap();
        let manifest = write_pilot_dataset(dir.path(), 40, 15).unwrap();

        assert_eq!(manifest.per_language, 40);
        assert_eq!(
            manifest.languages.keys().collect::<Vec<_>>(),
            vec!["de", "en", "fr", "es"]
        );

        let de = &manifest.languages["de"];
        assert_eq!(de.entries, 40);
        assert_eq!(de.chunks, 3);
        assert_eq!(de.files[0], "de/batch_001.json");

        let first_chunk: Vec<PilotEntry> =
            serde_json::from_str(&fs::read_to_string(dir.path().join(&de.files[0])).unwrap())
                .unwrap();
        assert_eq!(first_chunk.len(), 15);

        let on_disk = Manifest::read(dir.path()).unwrap();
        assert_eq!(on_disk, manifest);
    }

    #[test]
    fn test_write_dataset_rejects_zero_chunk_size() {
        let dir = TempDir::new().unwrap();
        let err = write_pilot_dataset(dir.path(), 5, 0).unwrap_err();
        assert!(matches!(err, CluekitError::InvalidChunkSize));
    }
}
