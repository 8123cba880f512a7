//! The `ppdrill generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use ppdrill_core::parser::validate_quiz;
use ppdrill_store::config::load_config_from;

use super::{new_session, resolve_selector};

pub fn execute(
    topic: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let selector = resolve_selector(topic.as_deref(), &config)?;
    let count = count.unwrap_or(config.default_count);

    let mut session = new_session(seed);
    let quiz = session.generate(selector, count)?;
    for w in validate_quiz(quiz) {
        tracing::warn!("exercise {}: {}", w.index, w.message);
    }

    let json = serde_json::to_string_pretty(quiz)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!(
                "Wrote {} {} exercises to {}",
                quiz.len(),
                selector.label(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
