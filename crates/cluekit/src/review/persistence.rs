//! Persistence for review queues - save/load JSON files.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{CluekitError, Result};

use super::queue::ReviewQueue;

impl ReviewQueue {
    /// Save the queue to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cluekit::review::ReviewQueue;
    /// # fn example(queue: &ReviewQueue) -> cluekit::Result<()> {
    /// queue.save("review/queue.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CluekitError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            CluekitError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| {
            CluekitError::Persistence(format!("Failed to serialize review queue: {}", e))
        })?;
        writer.flush().map_err(|e| {
            CluekitError::Persistence(format!(
                "Failed to write file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Load a queue from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            CluekitError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            CluekitError::Persistence(format!(
                "Failed to parse review queue '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
