//! Validate command - check content entries against their invariants.

use std::fs;
use std::path::PathBuf;

use cluekit::model::EntryIssue;
use cluekit::{validate_entry, ContentEntry};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(&file)
        .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;
    let entries: Vec<ContentEntry> = serde_json::from_str(&content)?;

    let results: Vec<(&ContentEntry, Vec<EntryIssue>)> = entries
        .iter()
        .map(|entry| (entry, validate_entry(entry)))
        .collect();
    let invalid = results.iter().filter(|(_, issues)| !issues.is_empty()).count();

    if json_output {
        let report: Vec<serde_json::Value> = results
            .iter()
            .map(|(entry, issues)| {
                serde_json::json!({
                    "entry_id": entry.entry_id,
                    "valid": issues.is_empty(),
                    "issues": issues,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} {} entries from {}",
            "Validated".cyan().bold(),
            entries.len(),
            file.display()
        );
        println!();

        for (entry, issues) in &results {
            if issues.is_empty() {
                if verbose {
                    println!("  {} {}", "✓".green(), entry.entry_id);
                }
                continue;
            }
            let codes: Vec<String> = issues.iter().map(EntryIssue::code).collect();
            println!("  {} {}: {}", "✗".red(), entry.entry_id, codes.join(", ").red());
        }

        println!();
        if invalid == 0 {
            println!("{}", "All entries valid.".green().bold());
        } else {
            println!(
                "{} {} of {} entries",
                "Invalid:".red().bold(),
                invalid,
                entries.len()
            );
        }
    }

    if invalid > 0 {
        return Err(format!("{} invalid entries", invalid).into());
    }
    Ok(())
}
