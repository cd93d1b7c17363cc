//! Pure formatting functions for UI output.
//!
//! `format_*` functions build the text and are unit tested; `display_*`
//! functions print it.

use crate::bump::{BumpPlan, FileChange};
use crate::warning::BumpWarning;
use console::style;
use std::path::Path;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a bump warning to the user.
pub fn display_warning(warning: &BumpWarning) {
    println!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Summary lines of a plan: category, versions, and each file's detected version
pub fn format_plan(plan: &BumpPlan) -> Vec<String> {
    let mut lines = vec![
        format!("Branch type: {}", plan.category),
        format!("Current version: {}", plan.current),
        format!("Next version: {}", plan.next),
        format!("Files ({}):", plan.entries.len()),
    ];

    for entry in &plan.entries {
        let found = entry
            .detected_version
            .map(|v| v.to_string())
            .unwrap_or_else(|| "not found".to_string());
        lines.push(format!("  - {} ({})", entry.path.display(), found));
    }

    lines
}

/// Display the plan, warnings included.
pub fn display_plan(plan: &BumpPlan) {
    println!("\n{}", style("Bump plan:").bold());
    for line in format_plan(plan) {
        println!("  {}", line);
    }

    for warning in &plan.warnings {
        display_warning(warning);
    }
}

/// One line describing a file change, e.g. `plugin.php: 1.0.0 -> 1.1.0`
pub fn format_change(change: &FileChange) -> String {
    format!("{}: {} -> {}", change.path.display(), change.from, change.to)
}

/// Display the applied or simulated changes.
pub fn display_changes(changes: &[FileChange], simulate: bool) {
    for change in changes {
        if simulate {
            display_status(&format!("Would update {}", format_change(change)));
        } else {
            display_success(&format!("Updated {}", format_change(change)));
        }
    }
}

/// Display a file that could not be rewritten.
pub fn display_failure(path: &Path, reason: &dyn std::fmt::Display) {
    display_error(&format!("Could not update '{}': {}", path.display(), reason));
}
