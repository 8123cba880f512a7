//! Core data model types for ppdrill.
//!
//! These are the fundamental types the whole system uses to represent
//! exercises, topics and quizzes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DrillError;

/// How an exercise is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    /// Pick one of the listed options.
    MultipleChoice,
    /// Type the answer as free text.
    FillIn,
}

/// The six grammar-usage categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "aux")]
    AuxAgreement,
    #[serde(rename = "participles")]
    IrregularParticiples,
    #[serde(rename = "ever-never")]
    EverNever,
    #[serde(rename = "already-yet-just")]
    AlreadyYetJust,
    #[serde(rename = "for-since")]
    ForSince,
    #[serde(rename = "questions")]
    QuestionOrder,
}

impl Topic {
    /// Every topic, in menu order.
    pub const ALL: [Topic; 6] = [
        Topic::AuxAgreement,
        Topic::IrregularParticiples,
        Topic::EverNever,
        Topic::AlreadyYetJust,
        Topic::ForSince,
        Topic::QuestionOrder,
    ];

    /// Stable lowercase identifier used on the command line and in storage.
    pub fn slug(&self) -> &'static str {
        match self {
            Topic::AuxAgreement => "aux",
            Topic::IrregularParticiples => "participles",
            Topic::EverNever => "ever-never",
            Topic::AlreadyYetJust => "already-yet-just",
            Topic::ForSince => "for-since",
            Topic::QuestionOrder => "questions",
        }
    }

    /// Human-readable label shown to the learner.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::AuxAgreement => "Auxiliary agreement",
            Topic::IrregularParticiples => "Irregular participles",
            Topic::EverNever => "Ever/Never (experiences)",
            Topic::AlreadyYetJust => "Already/Yet/Just (results)",
            Topic::ForSince => "For/Since (unfinished time)",
            Topic::QuestionOrder => "Questions (word order)",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = DrillError;

    /// Accepts a slug or a label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Topic::ALL
            .into_iter()
            .find(|t| t.slug() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| DrillError::UnknownTopic(s.trim().to_string()))
    }
}

/// Which topics a quiz draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSelector {
    Single(Topic),
    /// Every slot picks a topic uniformly at random.
    #[default]
    Mixed,
}

impl TopicSelector {
    pub const MIXED_SLUG: &'static str = "mixed";

    pub fn slug(&self) -> &'static str {
        match self {
            TopicSelector::Single(t) => t.slug(),
            TopicSelector::Mixed => Self::MIXED_SLUG,
        }
    }

    /// The label stored with graded results.
    pub fn label(&self) -> &'static str {
        match self {
            TopicSelector::Single(t) => t.label(),
            TopicSelector::Mixed => "Mixed",
        }
    }

    /// Whether an exercise of `topic` can appear in a quiz built with this selector.
    pub fn admits(&self, topic: Topic) -> bool {
        match self {
            TopicSelector::Single(t) => *t == topic,
            TopicSelector::Mixed => true,
        }
    }
}

impl fmt::Display for TopicSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TopicSelector {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(Self::MIXED_SLUG) {
            return Ok(TopicSelector::Mixed);
        }
        trimmed.parse().map(TopicSelector::Single)
    }
}

/// A single generated exercise. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub kind: ExerciseKind,
    pub topic: Topic,
    /// The question text shown to the learner.
    pub prompt: String,
    /// Choices for multiple-choice exercises; empty for fill-in.
    #[serde(default)]
    pub options: Vec<String>,
    /// The expected answer. For multiple choice this is one of `options`.
    pub answer: String,
    /// Shown verbatim after grading.
    pub explanation: String,
}

impl Exercise {
    pub fn multiple_choice(
        topic: Topic,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            kind: ExerciseKind::MultipleChoice,
            topic,
            prompt: prompt.into(),
            options,
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    pub fn fill_in(
        topic: Topic,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            kind: ExerciseKind::FillIn,
            topic,
            prompt: prompt.into(),
            options: Vec::new(),
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.kind == ExerciseKind::MultipleChoice
    }
}

/// An ordered set of exercises plus the selector used to build it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub selector: TopicSelector,
    pub exercises: Vec<Exercise>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
