//! The `ppdrill history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use ppdrill_core::results::GradedResult;
use ppdrill_core::statistics::compute_history_stats;
use ppdrill_report::{history_markdown, write_html_report};
use ppdrill_store::config::{create_store, load_config_from};

const EMPTY: &str = "No results saved yet.";

pub fn execute(
    student: Option<String>,
    format: String,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let student = student.filter(|s| !s.trim().is_empty());
    let config = load_config_from(config_path.as_deref())?;
    let store = create_store(&config.store)?;
    let records = store.list(student.as_deref())?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }
        "text" | "markdown" | "html" => {}
        other => anyhow::bail!("unknown format: {other} (expected text, json, markdown or html)"),
    }

    if records.is_empty() {
        println!("{EMPTY}");
        return Ok(());
    }

    match format.as_str() {
        "markdown" => print!("{}", history_markdown(&records)),
        "html" => {
            let path = output.unwrap_or_else(|| PathBuf::from("ppdrill-history.html"));
            write_html_report(&records, student.as_deref(), &path)?;
            println!("HTML report: {}", path.display());
        }
        _ => print_tables(&records),
    }
    Ok(())
}

fn print_tables(records: &[GradedResult]) {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Student", "Topic", "Score", "Accuracy"]);
    for r in records {
        table.add_row(vec![
            Cell::new(r.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&r.student),
            Cell::new(&r.topic),
            Cell::new(format!("{}/{}", r.score, r.total)),
            Cell::new(format!("{:.0}%", r.accuracy() * 100.0)),
        ]);
    }
    println!("{table}");

    let stats = compute_history_stats(records);
    let mut summary = Table::new();
    summary.set_header(vec!["Topic", "Quizzes", "Correct", "Accuracy", "Best"]);
    for (topic, s) in &stats.per_topic {
        summary.add_row(vec![
            Cell::new(topic),
            Cell::new(s.attempts),
            Cell::new(format!("{}/{}", s.score, s.total)),
            Cell::new(format!("{:.1}%", s.accuracy * 100.0)),
            Cell::new(format!("{:.1}%", s.best_accuracy * 100.0)),
        ]);
    }
    println!("\n{summary}");
    println!(
        "Overall: {}/{} correct ({:.1}%) over {} quizzes",
        stats.overall.score,
        stats.overall.total,
        stats.overall.accuracy * 100.0,
        stats.overall.attempts
    );
}
