//! The review queue document.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dataset::PilotEntry;
use crate::error::{CluekitError, Result};
use crate::model::{Language, Status};

use super::decision::ReviewDecision;
use super::item::{apply_decision, QueueItem};

/// Current version of the queue file format.
pub const QUEUE_FORMAT_VERSION: &str = "1.0.0";

/// Item counts by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub draft: usize,
    /// Awaiting a decision.
    pub reviewed: usize,
    pub approved: usize,
    pub deprecated: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.draft + self.reviewed + self.approved + self.deprecated
    }

    /// Items that have left the `reviewed` state.
    pub fn decided(&self) -> usize {
        self.total() - self.reviewed
    }

    fn add(&mut self, status: Status) {
        match status {
            Status::Draft => self.draft += 1,
            Status::Reviewed => self.reviewed += 1,
            Status::Approved => self.approved += 1,
            Status::Deprecated => self.deprecated += 1,
        }
    }
}

/// Summary of a queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueueSummary {
    pub total_items: usize,
    pub by_status: StatusCounts,
    /// Item counts per language code, in first-seen order.
    pub by_language: IndexMap<String, usize>,
    /// Items carrying at least one auto-QA flag.
    pub flagged_items: usize,
}

/// A persisted review queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewQueue {
    pub format_version: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<QueueItem>,
}

impl ReviewQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            format_version: QUEUE_FORMAT_VERSION.to_string(),
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        }
    }

    /// Build a queue from a review sample.
    ///
    /// Entries whose language cannot be parsed are skipped with a warning.
    pub fn from_sample(sample: &[PilotEntry]) -> Self {
        let mut queue = Self::new();
        for entry in sample {
            match QueueItem::from_pilot(entry) {
                Ok(item) => queue.items.push(item),
                Err(e) => warn!(entry_id = %entry.entry_id, error = %e, "skipping sample entry"),
            }
        }
        debug!(items = queue.items.len(), "queue built from sample");
        queue
    }

    pub fn get(&self, entry_id: &str) -> Option<&QueueItem> {
        self.items.iter().find(|item| item.entry_id == entry_id)
    }

    /// Apply a decision to one item and return its new status.
    pub fn decide(&mut self, entry_id: &str, decision: &ReviewDecision) -> Result<Status> {
        let idx = self
            .items
            .iter()
            .position(|item| item.entry_id == entry_id)
            .ok_or_else(|| CluekitError::EntryNotFound(entry_id.to_string()))?;

        let updated = apply_decision(self.items[idx].clone(), decision)?;
        let status = updated.status;
        self.items[idx] = updated;
        self.updated_at = Utc::now();
        Ok(status)
    }

    /// Items still waiting for a decision.
    pub fn pending(&self) -> Vec<&QueueItem> {
        self.items.iter().filter(|item| item.is_pending()).collect()
    }

    pub fn by_language(&self, language: Language) -> Vec<&QueueItem> {
        self.items
            .iter()
            .filter(|item| item.language == language)
            .collect()
    }

    pub fn summary(&self) -> QueueSummary {
        let mut summary = QueueSummary {
            total_items: self.items.len(),
            ..QueueSummary::default()
        };
        for item in &self.items {
            summary.by_status.add(item.status);
            *summary
                .by_language
                .entry(item.language.code().to_string())
                .or_insert(0) += 1;
            if !item.auto_flags.is_empty() {
                summary.flagged_items += 1;
            }
        }
        summary
    }

    /// Fraction of items decided, 1.0 for an empty queue.
    pub fn progress(&self) -> f64 {
        if self.items.is_empty() {
            return 1.0;
        }
        let counts = self.summary().by_status;
        counts.decided() as f64 / counts.total() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| !item.is_pending())
    }
}

impl Default for ReviewQueue {
    fn default() -> Self {
        Self::new()
    }
}
