//! Decide command - record a reviewer decision in a queue file.

use std::path::PathBuf;

use cluekit::review::{ReviewAction, ReviewDecision, ReviewQueue};
use colored::Colorize;

pub fn run(
    queue_path: PathBuf,
    entry_id: String,
    action: String,
    reason: Option<String>,
    note: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if !queue_path.exists() {
        return Err(format!(
            "Queue file not found: {}\nRun 'cluekit sample <DATASET_DIR> --queue {}' first.",
            queue_path.display(),
            queue_path.display()
        )
        .into());
    }

    let mut queue = ReviewQueue::load(&queue_path)?;
    let decision = ReviewDecision::from_raw(&action, reason.as_deref(), note)?;
    let status = queue.decide(&entry_id, &decision)?;
    queue.save(&queue_path)?;

    let status_text = status.as_str();
    let colored_status = match decision.action {
        ReviewAction::Approve => status_text.green(),
        ReviewAction::Reject | ReviewAction::Deprecate => status_text.red(),
        ReviewAction::RequestEdit | ReviewAction::Escalate => status_text.yellow(),
    };
    println!(
        "{} {} → {}",
        decision.action.as_str().cyan().bold(),
        entry_id.white(),
        colored_status
    );
    if let Some(reason) = decision.reason_code {
        println!("  reason: {}", reason);
    }
    println!("  {} pending", queue.pending().len());

    Ok(())
}
