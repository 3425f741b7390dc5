//! Sample command - draw a stratified review sample.

use std::collections::BTreeMap;
use std::path::PathBuf;

use cluekit::dataset::{write_review_exports, Sampler};
use cluekit::review::ReviewQueue;
use cluekit::PipelineConfig;
use colored::Colorize;

pub fn run(
    dataset: PathBuf,
    size: Option<usize>,
    seed: Option<u64>,
    export: Option<PathBuf>,
    queue: Option<PathBuf>,
    config: PipelineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sample_config = config.sample;
    if let Some(n) = size {
        sample_config.sample_size = n;
    }
    if let Some(s) = seed {
        sample_config.seed = s;
    }
    let requested = sample_config.sample_size;

    let sample = Sampler::with_config(sample_config).sample(&dataset)?;

    println!(
        "{} {} of {} requested entries from {}",
        "Sampled".cyan().bold(),
        sample.len().to_string().white().bold(),
        requested,
        dataset.display()
    );
    if sample.len() < requested {
        println!(
            "  {}",
            "Corpus smaller than requested size; returning every eligible entry".yellow()
        );
    }

    let mut strata: BTreeMap<(&str, i64), usize> = BTreeMap::new();
    for entry in &sample {
        *strata
            .entry((entry.language.as_str(), entry.difficulty))
            .or_insert(0) += 1;
    }
    println!();
    println!("{}", "Strata (language, difficulty):".yellow().bold());
    for ((language, difficulty), count) in &strata {
        println!("  {} d{}: {}", language, difficulty, count);
    }

    if let Some(dir) = export {
        let paths = write_review_exports(&sample, &dir)?;
        println!();
        println!("{} {}", "Wrote".green(), paths.json.display());
        println!("{} {}", "Wrote".green(), paths.csv.display());
    }

    if let Some(path) = queue {
        let review_queue = ReviewQueue::from_sample(&sample);
        review_queue.save(&path)?;
        println!(
            "{} {} ({} items)",
            "Queue saved to".green(),
            path.display(),
            review_queue.items.len()
        );
    }

    Ok(())
}
