//! Status command - show review queue progress and summary.

use std::path::PathBuf;

use cluekit::review::ReviewQueue;
use colored::Colorize;

pub fn run(
    queue_path: PathBuf,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !queue_path.exists() {
        return Err(format!("Queue file not found: {}", queue_path.display()).into());
    }

    let queue = ReviewQueue::load(&queue_path)?;
    let summary = queue.summary();

    if json_output {
        let status = serde_json::json!({
            "file": queue_path.display().to_string(),
            "progress": queue.progress(),
            "is_complete": queue.is_complete(),
            "summary": summary,
            "updated_at": queue.updated_at,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Review status for".cyan().bold(),
        queue_path.display().to_string().white()
    );
    println!();

    // Progress bar
    let progress = queue.progress();
    let bar_width = 30;
    let filled = (progress * bar_width as f64).round() as usize;
    let bar: String = "█".repeat(filled) + &"░".repeat(bar_width - filled);
    println!(
        "Progress: {} {}/{} ({:.0}%)",
        bar.cyan(),
        summary.by_status.decided().to_string().white().bold(),
        summary.total_items,
        progress * 100.0
    );
    println!();

    println!("{}", "Items:".yellow().bold());
    println!("  Pending:    {}", summary.by_status.reviewed.to_string().white());
    println!("  Approved:   {}", summary.by_status.approved.to_string().green());
    println!("  Draft:      {}", summary.by_status.draft.to_string().blue());
    println!("  Deprecated: {}", summary.by_status.deprecated.to_string().red());
    println!();

    println!("{}", "Languages:".yellow().bold());
    for (language, count) in &summary.by_language {
        println!("  {}: {}", language, count);
    }
    println!();

    println!(
        "Flagged by auto-QA: {}",
        summary.flagged_items.to_string().yellow()
    );

    if queue.is_complete() {
        println!();
        println!("{}", "All items decided.".green().bold());
    }

    Ok(())
}
