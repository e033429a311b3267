//! Result printing
//!
//! JSON goes to stdout; human-oriented status lines go to stderr.

use anyhow::Result;
use colored::*;
use nexrender_core::domain::item::{ItemResult, OutputRecord};
use serde_json::Value;

/// Print the result of a one-item run as a bare JSON value
pub fn print_single(results: Vec<ItemResult>) -> Result<()> {
    for result in results {
        print_status_line(&result);
        let record = result.into_record();
        println!("{}", serde_json::to_string_pretty(&record.json)?);
    }
    Ok(())
}

/// Print every result as a JSON array of paired records
pub fn print_all(results: Vec<ItemResult>) -> Result<()> {
    let total = results.len();
    let failed = results.iter().filter(|r| !r.is_ok()).count();

    for result in &results {
        print_status_line(result);
    }

    let records: Vec<OutputRecord> = results.into_iter().map(ItemResult::into_record).collect();
    println!("{}", serde_json::to_string_pretty(&records)?);

    if failed > 0 {
        eprintln!(
            "{}",
            format!("{} of {} item(s) failed", failed, total).yellow()
        );
    }
    Ok(())
}

/// Print a one-line summary of an item on stderr
fn print_status_line(result: &ItemResult) {
    match result {
        ItemResult::Ok { index, json } => {
            if let Some(status) = json.get("status").and_then(Value::as_str) {
                eprintln!("  {} Item {}: {}", "▸".cyan(), index, colorize_status(status));
            }
        }
        ItemResult::Failed { index, failure } => {
            eprintln!("  {} Item {}: {}", "✗".red(), index, failure.message.red());
        }
    }
}

/// Colorize job status for display
fn colorize_status(status: &str) -> ColoredString {
    match status {
        "finished" => status.green(),
        "error" => status.red(),
        "queued" => status.yellow(),
        _ => status.cyan(),
    }
}
