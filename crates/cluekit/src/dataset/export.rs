//! Review sample exports (JSON and CSV).

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{CluekitError, Result};

use super::record::PilotEntry;

/// File name of the JSON export.
pub const SAMPLE_JSON_FILE: &str = "review_sample.json";
/// File name of the CSV export.
pub const SAMPLE_CSV_FILE: &str = "review_sample.csv";

/// Columns written to the CSV export, in order.
pub const CSV_COLUMNS: [&str; 7] = [
    "entry_id",
    "language",
    "word",
    "difficulty",
    "clue_text",
    "clue_style",
    "status",
];

/// Where the exports were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
}

/// Write a review sample as pretty JSON and as a reviewer-facing CSV.
///
/// The output directory is created if needed. Existing exports are replaced.
pub fn write_review_exports(
    sample: &[PilotEntry],
    output_dir: impl AsRef<Path>,
) -> Result<ExportPaths> {
    let dir = output_dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| CluekitError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let paths = ExportPaths {
        json: dir.join(SAMPLE_JSON_FILE),
        csv: dir.join(SAMPLE_CSV_FILE),
    };

    let file = File::create(&paths.json).map_err(|e| CluekitError::Io {
        path: paths.json.clone(),
        source: e,
    })?;
    let mut json_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut json_writer, sample)?;
    json_writer.flush().map_err(|e| CluekitError::Io {
        path: paths.json.clone(),
        source: e,
    })?;

    let mut writer = csv::Writer::from_path(&paths.csv)?;
    writer.write_record(CSV_COLUMNS)?;
    for entry in sample {
        let difficulty = entry.difficulty.to_string();
        writer.write_record([
            entry.entry_id.as_str(),
            entry.language.as_str(),
            entry.word.as_str(),
            difficulty.as_str(),
            entry.clue_text.as_str(),
            entry.clue_style.as_str(),
            entry.status.as_str(),
        ])?;
    }
    writer.flush().map_err(|e| CluekitError::Io {
        path: paths.csv.clone(),
        source: e,
    })?;

    info!(
        entries = sample.len(),
        json = %paths.json.display(),
        csv = %paths.csv.display(),
        "review exports written"
    );
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate_language_entries;
    use crate::model::Language;
    use tempfile::TempDir;

    #[test]
    fn test_exports_written() {
        let dir = TempDir::new().unwrap();
        let sample = generate_language_entries(Language::De, 3, 42);

        let paths = write_review_exports(&sample, dir.path().join("exports")).unwrap();
        assert!(paths.json.exists());
        assert!(paths.csv.exists());

        let back: Vec<PilotEntry> =
            serde_json::from_str(&fs::read_to_string(&paths.json).unwrap()).unwrap();
        assert_eq!(back, sample);

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CSV_COLUMNS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "de-000000");
        assert_eq!(&rows[0][3], "1");
        assert_eq!(&rows[0][6], "draft");
    }

    #[test]
    fn test_clue_with_comma_is_quoted() {
        let dir = TempDir::new().unwrap();
        let mut sample = generate_language_entries(Language::En, 1, 42);
        sample[0].clue_text = "Tall, leafy plant".to_string();

        let paths = write_review_exports(&sample, dir.path()).unwrap();
        let raw = fs::read_to_string(&paths.csv).unwrap();
        assert!(raw.contains("\"Tall, leafy plant\""));

        let mut reader = csv::Reader::from_path(&paths.csv).unwrap();
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(&row[4], "Tall, leafy plant");
    }

    #[test]
    fn test_empty_sample_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let paths = write_review_exports(&[], dir.path()).unwrap();
        let raw = fs::read_to_string(&paths.csv).unwrap();
        assert_eq!(raw.trim_end(), CSV_COLUMNS.join(","));
        assert_eq!(fs::read_to_string(&paths.json).unwrap().trim(), "[]");
    }
}
