//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cluekit: content lifecycle and QA for word-puzzle clues
#[derive(Parser)]
#[command(name = "cluekit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pipeline configuration file (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic pilot dataset
    Generate {
        /// Output directory for chunk files and the manifest
        #[arg(value_name = "OUT_DIR")]
        output: PathBuf,

        /// Entries per language
        #[arg(long)]
        per_language: Option<usize>,

        /// Entries per chunk file
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Seed for the synthetic scores
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Draw a stratified review sample from a dataset
    Sample {
        /// Dataset directory (contains manifest.json)
        #[arg(value_name = "DATASET_DIR")]
        dataset: PathBuf,

        /// Requested sample size
        #[arg(short, long)]
        size: Option<usize>,

        /// Sampling seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write review_sample.json and review_sample.csv into this directory
        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,

        /// Create a review queue file from the sample
        #[arg(short, long, value_name = "FILE")]
        queue: Option<PathBuf>,
    },

    /// Run auto-QA on a single clue
    Qa {
        /// Answer word
        #[arg(short, long)]
        word: String,

        /// Clue text
        #[arg(short, long)]
        clue: String,

        /// Language code (de, en, es, fr)
        #[arg(short, long)]
        language: String,

        /// Difficulty (1-5)
        #[arg(short, long)]
        difficulty: i64,

        /// Existing clue to compare against (repeatable)
        #[arg(short, long = "existing")]
        existing: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a JSON array of content entries
    Validate {
        /// Path to the entries file
        #[arg(value_name = "ENTRIES_JSON")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Record a reviewer decision in a queue file
    Decide {
        /// Path to the queue file
        #[arg(value_name = "QUEUE_FILE")]
        queue: PathBuf,

        /// Entry to decide on
        #[arg(value_name = "ENTRY_ID")]
        entry_id: String,

        /// approve, request_edit, escalate, reject or deprecate
        #[arg(value_name = "ACTION")]
        action: String,

        /// Reason code (required for every action except approve)
        #[arg(short, long)]
        reason: Option<String>,

        /// Free-text reviewer note
        #[arg(short, long, default_value = "")]
        note: String,
    },

    /// Show review queue progress and summary
    Status {
        /// Path to the queue file
        #[arg(value_name = "QUEUE_FILE")]
        queue: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
