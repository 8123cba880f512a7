//! Per-learner session context.
//!
//! A `Session` owns everything one learner's practice run needs: the student
//! name, the random source and the active quiz. The rendering shell creates
//! one per user and drops it (or calls [`Session::reset`]) when done.

use chrono::{SubsecRound, Utc};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use uuid::Uuid;

use crate::error::DrillError;
use crate::grader::{grade, Answers};
use crate::model::{Quiz, TopicSelector};
use crate::quiz::build_quiz;
use crate::results::GradedResult;
use crate::traits::ResultStore;

/// Fewest exercises a learner may request.
pub const MIN_EXERCISES: usize = 5;
/// Most exercises a learner may request.
pub const MAX_EXERCISES: usize = 20;
pub const DEFAULT_EXERCISES: usize = 10;

/// Check that `count` is within `MIN_EXERCISES..=MAX_EXERCISES`.
pub fn validate_count(count: usize) -> Result<(), DrillError> {
    if (MIN_EXERCISES..=MAX_EXERCISES).contains(&count) {
        Ok(())
    } else {
        Err(DrillError::InvalidExerciseCount {
            count,
            min: MIN_EXERCISES,
            max: MAX_EXERCISES,
        })
    }
}

pub struct Session {
    id: Uuid,
    student: Option<String>,
    rng: Box<dyn RngCore + Send>,
    active: Option<Quiz>,
}

impl Session {
    /// Create a session drawing from `rng`.
    pub fn new(rng: impl RngCore + Send + 'static) -> Self {
        Self {
            id: Uuid::new_v4(),
            student: None,
            rng: Box::new(rng),
            active: None,
        }
    }

    /// A session whose quizzes are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    pub fn with_student(mut self, name: &str) -> Self {
        self.set_student(name);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn student(&self) -> Option<&str> {
        self.student.as_deref()
    }

    /// Set the student name. A blank name clears it.
    pub fn set_student(&mut self, name: &str) {
        let name = name.trim();
        self.student = (!name.is_empty()).then(|| name.to_string());
    }

    /// Build a new quiz and make it the active one.
    pub fn generate(&mut self, selector: TopicSelector, count: usize) -> Result<&Quiz, DrillError> {
        validate_count(count)?;
        let quiz = build_quiz(selector, count, &mut *self.rng);
        tracing::debug!(session = %self.id, selector = selector.slug(), count, "new quiz");
        Ok(self.active.insert(quiz))
    }

    /// Make a quiz built elsewhere (e.g. loaded from a file) the active one.
    pub fn load(&mut self, quiz: Quiz) -> &Quiz {
        self.active.insert(quiz)
    }

    pub fn active_quiz(&self) -> Option<&Quiz> {
        self.active.as_ref()
    }

    /// Discard the active quiz.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Grade the active quiz and file the result under the current student.
    ///
    /// Without a student name nothing is graded.
    pub fn submit(&self, answers: &Answers) -> Result<GradedResult, DrillError> {
        let student = self.student.as_deref().ok_or(DrillError::MissingStudent)?;
        let quiz = self.active.as_ref().ok_or(DrillError::NoActiveQuiz)?;
        let grade = grade(quiz, answers);

        Ok(GradedResult {
            student: student.to_string(),
            topic: quiz.selector.label().to_string(),
            score: grade.score,
            total: grade.total,
            details: grade.details,
            created_at: Utc::now().trunc_subsecs(0),
        })
    }

    /// [`submit`](Self::submit), then append the result to `store`.
    ///
    /// A store failure is returned unchanged; the write is not retried.
    pub fn submit_and_record(
        &self,
        answers: &Answers,
        store: &dyn ResultStore,
    ) -> anyhow::Result<GradedResult> {
        let result = self.submit(answers)?;
        store.append(&result)?;
        tracing::info!(
            store = store.name(),
            student = %result.student,
            score = result.score,
            total = result.total,
            "saved result"
        );
        Ok(result)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("student", &self.student)
            .field("active", &self.active.as_ref().map(|q| q.len()))
            .finish()
    }
}
