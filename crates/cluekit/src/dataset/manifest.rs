//! Dataset manifest: how a generated corpus is split into chunk files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CluekitError, Result};

/// File name of the manifest inside a dataset directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Chunk listing for one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageChunks {
    /// Number of entries generated for the language.
    #[serde(default)]
    pub entries: usize,
    /// Number of chunk files.
    #[serde(default)]
    pub chunks: usize,
    /// Chunk file paths, relative to the dataset root.
    #[serde(default)]
    pub files: Vec<String>,
}

/// Index of a chunked dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub generated_at: DateTime<Utc>,
    pub per_language: usize,
    pub chunk_size: usize,
    /// Per language code, in generation order.
    #[serde(default)]
    pub languages: IndexMap<String, LanguageChunks>,
}

impl Manifest {
    /// Path of the manifest for a dataset root.
    pub fn path_in(dataset_root: impl AsRef<Path>) -> PathBuf {
        dataset_root.as_ref().join(MANIFEST_FILE)
    }

    /// Read the manifest of a dataset.
    ///
    /// Fails with `ManifestNotFound` when the dataset has not been generated.
    pub fn read(dataset_root: impl AsRef<Path>) -> Result<Self> {
        let path = Self::path_in(dataset_root);
        if !path.exists() {
            return Err(CluekitError::ManifestNotFound(path));
        }

        let file = File::open(&path).map_err(|e| CluekitError::Io {
            path: path.clone(),
            source: e,
        })?;
        let manifest = serde_json::from_reader(BufReader::new(file))?;
        Ok(manifest)
    }

    /// Write the manifest into a dataset root.
    pub fn write(&self, dataset_root: impl AsRef<Path>) -> Result<PathBuf> {
        let path = Self::path_in(dataset_root);
        let file = File::create(&path).map_err(|e| CluekitError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|e| CluekitError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    /// Total entries across all languages.
    pub fn total_entries(&self) -> usize {
        self.languages.values().map(|l| l.entries).sum()
    }

    /// Total chunk files across all languages.
    pub fn total_chunks(&self) -> usize {
        self.languages.values().map(|l| l.files.len()).sum()
    }
}

/// Read one chunk file. A missing file yields `Ok(None)`.
pub(crate) fn read_chunk<T>(path: &Path) -> Result<Option<Vec<T>>>
where
    T: for<'de> Deserialize<'de>,
{
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| CluekitError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(serde_json::from_str(&content)?))
}
