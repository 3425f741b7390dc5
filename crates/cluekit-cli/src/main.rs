//! cluekit CLI - content lifecycle and QA for word-puzzle clues.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use cluekit::PipelineConfig;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "cluekit=debug" } else { "cluekit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => match PipelineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => PipelineConfig::default(),
    };

    let result = match cli.command {
        Commands::Generate {
            output,
            per_language,
            chunk_size,
            seed,
        } => commands::generate::run(output, per_language, chunk_size, seed, config),

        Commands::Sample {
            dataset,
            size,
            seed,
            export,
            queue,
        } => commands::sample::run(dataset, size, seed, export, queue, config),

        Commands::Qa {
            word,
            clue,
            language,
            difficulty,
            existing,
            json,
        } => commands::qa::run(word, clue, language, difficulty, existing, json, config),

        Commands::Validate { file, json } => commands::validate::run(file, json, cli.verbose),

        Commands::Decide {
            queue,
            entry_id,
            action,
            reason,
            note,
        } => commands::decide::run(queue, entry_id, action, reason, note),

        Commands::Status { queue, json } => commands::status::run(queue, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
