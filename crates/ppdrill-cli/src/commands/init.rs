//! The `ppdrill init` command.

use std::path::Path;

use anyhow::{Context, Result};

const CONFIG_FILE: &str = "ppdrill.toml";

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
        return Ok(());
    }
    std::fs::write(CONFIG_FILE, SAMPLE_CONFIG)
        .with_context(|| format!("failed to write {CONFIG_FILE}"))?;
    println!("Created {CONFIG_FILE}");

    println!("\nNext steps:");
    println!("  1. Set default_student in {CONFIG_FILE}");
    println!("  2. Run: ppdrill lesson");
    println!("  3. Run: ppdrill practice --topic for-since");
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# ppdrill configuration

# default_student = "${USER}"
default_topic = "mixed"
default_count = 10

[store]
type = "sqlite"
path = "ppdrill.db"

# [store]
# type = "jsonl"
# path = "results.jsonl"
"#;
