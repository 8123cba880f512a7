//! The `ppdrill grade` command.

use std::path::PathBuf;

use anyhow::Result;

use ppdrill_core::parser::{load_answers, load_quiz, validate_quiz};
use ppdrill_core::session::Session;
use ppdrill_core::DrillError;
use ppdrill_report::{feedback_markdown, feedback_text};
use ppdrill_store::config::{create_store, load_config_from};

const FORMATS: [&str; 3] = ["text", "json", "markdown"];

pub fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    student: Option<String>,
    no_save: bool,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        FORMATS.contains(&format.as_str()),
        "unknown format: {format} (expected text, json or markdown)"
    );
    let config = load_config_from(config_path.as_deref())?;

    let mut session = Session::from_entropy();
    if let Some(name) = student.or(config.default_student.clone()) {
        session.set_student(&name);
    }
    if session.student().is_none() {
        return Err(DrillError::MissingStudent.into());
    }

    let quiz = load_quiz(&quiz_path)?;
    let warnings = validate_quiz(&quiz);
    for w in &warnings {
        eprintln!("  [{}] WARNING: {}", w.index, w.message);
    }
    session.load(quiz);
    let answers = load_answers(&answers_path)?;

    let result = if no_save {
        session.submit(&answers)?
    } else {
        let store = create_store(&config.store)?;
        session.submit_and_record(&answers, store.as_ref())?
    };

    match format.as_str() {
        "text" => print!("{}", feedback_text(&result)),
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print!("{}", feedback_markdown(&result)),
    }
    Ok(())
}
