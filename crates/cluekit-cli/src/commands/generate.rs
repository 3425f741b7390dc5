//! Generate command - write a synthetic pilot dataset.

use std::path::PathBuf;

use cluekit::dataset::PilotGenerator;
use cluekit::PipelineConfig;
use colored::Colorize;

pub fn run(
    output: PathBuf,
    per_language: Option<usize>,
    chunk_size: Option<usize>,
    seed: Option<u64>,
    config: PipelineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pilot = config.pilot;
    if let Some(n) = per_language {
        pilot.per_language = n;
    }
    if let Some(k) = chunk_size {
        pilot.chunk_size = k;
    }
    if let Some(s) = seed {
        pilot.seed = s;
    }

    println!(
        "{} {} entries per language into {}",
        "Generating".cyan().bold(),
        pilot.per_language,
        output.display()
    );

    let generator = PilotGenerator::with_config(pilot, config.qa);
    let manifest = generator.write_dataset(&output)?;

    for (language, info) in &manifest.languages {
        println!(
            "  {}: {} entries in {} chunks",
            language.white().bold(),
            info.entries,
            info.chunks
        );
    }
    println!();
    println!(
        "{} {} entries, {} chunk files",
        "Done:".green().bold(),
        manifest.total_entries(),
        manifest.total_chunks()
    );

    Ok(())
}
