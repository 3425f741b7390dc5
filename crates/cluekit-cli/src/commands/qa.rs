//! QA command - run the auto-QA checks on one clue.

use cluekit::qa::{AutoQa, Candidate, CheckName};
use cluekit::PipelineConfig;
use colored::Colorize;

pub fn run(
    word: String,
    clue: String,
    language: String,
    difficulty: i64,
    existing: Vec<String>,
    json_output: bool,
    config: PipelineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine = AutoQa::with_config(config.qa);
    let report = engine.run(&Candidate::new(
        &word,
        &clue,
        &language,
        difficulty,
        &existing,
    ));

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Auto-QA for".cyan().bold(), clue.white());
    println!();
    for check in CheckName::ALL {
        let flags = report.get(check);
        if flags.is_empty() {
            println!("  {:<12} {}", check.as_str(), "ok".green());
        } else {
            let names: Vec<&str> = flags.iter().map(|f| f.as_str()).collect();
            println!("  {:<12} {}", check.as_str(), names.join(", ").red());
        }
    }
    println!();

    if report.is_clean() {
        println!("{}", "No flags raised.".green().bold());
    } else {
        println!(
            "{} {}",
            "Flags raised:".yellow().bold(),
            report.flags().count()
        );
    }

    Ok(())
}
