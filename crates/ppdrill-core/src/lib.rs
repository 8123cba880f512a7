//! ppdrill-core: Present Perfect exercise generation, grading and sessions.
//!
//! This crate holds the word tables, the six item generators, the quiz
//! builder, the grader and the session context. Persistence is reached only
//! through the [`traits::ResultStore`] trait.

pub mod error;
pub mod generators;
pub mod grader;
pub mod lesson;
pub mod lexicon;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod results;
pub mod session;
pub mod statistics;
pub mod traits;

pub use error::DrillError;
pub use grader::{grade, Answers};
pub use model::{Exercise, ExerciseKind, Quiz, Topic, TopicSelector};
pub use quiz::build_quiz;
pub use results::{Grade, GradedResult, ItemResult, Outcome};
pub use session::Session;
pub use traits::ResultStore;
