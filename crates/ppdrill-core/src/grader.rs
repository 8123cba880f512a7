//! Answer grading.
//!
//! Matching is exact after trimming and lowercasing both sides. There is no
//! fuzzy matching and no synonym handling.

use std::collections::HashMap;

use crate::model::Quiz;
use crate::results::{Grade, ItemResult, Outcome};

/// Submitted answers keyed by exercise index (`"0"`, `"1"`, ...).
pub type Answers = HashMap<String, String>;

/// Normalize text for comparison: trim, then lowercase.
pub fn normalize_answer(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `submitted` matches `expected` under the grading rules.
pub fn is_match(submitted: &str, expected: &str) -> bool {
    normalize_answer(submitted) == normalize_answer(expected)
}

/// Grade every exercise of `quiz` against `answers`.
///
/// Missing or blank answers count as incorrect; this never fails.
pub fn grade(quiz: &Quiz, answers: &Answers) -> Grade {
    let details: Vec<ItemResult> = quiz
        .exercises
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let submitted = answers
                .get(&i.to_string())
                .map(|a| a.trim())
                .unwrap_or_default();
            ItemResult {
                prompt: exercise.prompt.clone(),
                submitted: submitted.to_string(),
                expected: exercise.answer.clone(),
                explanation: exercise.explanation.clone(),
                outcome: Outcome::from_match(is_match(submitted, &exercise.answer)),
            }
        })
        .collect();

    let score = details.iter().filter(|d| d.outcome.is_correct()).count() as u32;
    let total = details.len() as u32;
    tracing::debug!(score, total, "graded quiz");

    Grade {
        score,
        total,
        details,
    }
}
