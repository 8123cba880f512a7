//! Session error types.
//!
//! These are the validation failures a rendering shell is expected to show
//! to the learner. None of them is fatal; the session stays usable.

use thiserror::Error;

/// Errors raised by [`Session`](crate::session::Session) operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// Grading was requested without a student name to file the result under.
    #[error("student name is required to grade and save a result")]
    MissingStudent,

    /// The requested exercise count is outside the supported range.
    #[error("exercise count must be between {min} and {max}, got {count}")]
    InvalidExerciseCount { count: usize, min: usize, max: usize },

    /// A topic slug or label did not match any known topic.
    #[error("unknown topic: {0}")]
    UnknownTopic(String),

    /// Grading was requested before a quiz was generated (or after a reset).
    #[error("no active quiz, generate exercises first")]
    NoActiveQuiz,
}

impl DrillError {
    /// Returns `true` if the learner can fix this by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DrillError::MissingStudent
                | DrillError::InvalidExerciseCount { .. }
                | DrillError::UnknownTopic(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = DrillError::InvalidExerciseCount {
            count: 30,
            min: 5,
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "exercise count must be between 5 and 20, got 30"
        );
        assert!(DrillError::MissingStudent.to_string().contains("student"));
    }

    #[test]
    fn validation_classification() {
        assert!(DrillError::MissingStudent.is_validation());
        assert!(DrillError::UnknownTopic("x".into()).is_validation());
        assert!(!DrillError::NoActiveQuiz.is_validation());
    }
}
