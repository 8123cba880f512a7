//! Grading output and the persisted result record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a single answer matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        }
    }

    pub fn is_correct(&self) -> bool {
        *self == Outcome::Correct
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// Per-exercise feedback line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    pub prompt: String,
    /// What the learner typed, trimmed. Empty when nothing was submitted.
    pub submitted: String,
    pub expected: String,
    pub explanation: String,
    pub outcome: Outcome,
}

/// The result of grading one quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    pub score: u32,
    /// Always equal to the number of exercises in the graded quiz.
    pub total: u32,
    pub details: Vec<ItemResult>,
}

impl Grade {
    /// Fraction of correct answers in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        accuracy(self.score, self.total)
    }
}

/// A graded quiz filed under a student. This is what stores persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedResult {
    pub student: String,
    /// Label of the topic selector the quiz was built with.
    pub topic: String,
    pub score: u32,
    pub total: u32,
    pub details: Vec<ItemResult>,
    /// Whole-second UTC timestamp.
    pub created_at: DateTime<Utc>,
}

impl GradedResult {
    pub fn accuracy(&self) -> f64 {
        accuracy(self.score, self.total)
    }
}

pub(crate) fn accuracy(score: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        score as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Outcome::Correct).unwrap(),
            "\"correct\""
        );
        assert_eq!(Outcome::Incorrect.to_string(), "incorrect");
        assert!(Outcome::from_match(true).is_correct());
    }

    #[test]
    fn accuracy_handles_empty() {
        let grade = Grade {
            score: 0,
            total: 0,
            details: vec![],
        };
        assert_eq!(grade.accuracy(), 0.0);
        assert_eq!(accuracy(3, 4), 0.75);
    }
}
