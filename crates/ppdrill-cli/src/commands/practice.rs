//! The `ppdrill practice` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use ppdrill_core::model::Exercise;
use ppdrill_core::{Answers, DrillError};
use ppdrill_report::feedback_text;
use ppdrill_store::config::{create_store, load_config_from};

use super::{new_session, resolve_selector};

pub fn execute(
    student: Option<String>,
    topic: Option<String>,
    count: Option<usize>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let selector = resolve_selector(topic.as_deref(), &config)?;
    let count = count.unwrap_or(config.default_count);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let mut session = new_session(seed);
    match student.or(config.default_student.clone()) {
        Some(name) => session.set_student(&name),
        None => {
            write!(out, "Your name: ")?;
            out.flush()?;
            session.set_student(&read_line(&mut input)?.unwrap_or_default());
        }
    }
    if session.student().is_none() {
        return Err(DrillError::MissingStudent.into());
    }

    let quiz = session.generate(selector, count)?;
    writeln!(out, "\n{} - {} exercises\n", quiz.selector.label(), quiz.len())?;

    let mut answers = Answers::new();
    for (i, exercise) in quiz.exercises.iter().enumerate() {
        ask(&mut out, i, exercise)?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        answers.insert(i.to_string(), resolve_choice(&line, &exercise.options));
    }

    let store = create_store(&config.store)?;
    let result = session.submit_and_record(&answers, store.as_ref())?;
    writeln!(out)?;
    write!(out, "{}", feedback_text(&result))?;
    writeln!(out, "\nSaved to {} store.", store.name())?;
    Ok(())
}

fn ask(out: &mut impl Write, index: usize, exercise: &Exercise) -> io::Result<()> {
    writeln!(out, "{}. {}", index + 1, exercise.prompt)?;
    for (n, option) in exercise.options.iter().enumerate() {
        writeln!(out, "   {}) {}", n + 1, option)?;
    }
    write!(out, "> ")?;
    out.flush()
}

/// `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Map an option number to its text. Anything else is kept as typed.
fn resolve_choice(input: &str, options: &[String]) -> String {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => options[n - 1].clone(),
        _ => trimmed.to_string(),
    }
}
