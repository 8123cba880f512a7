//! Quiz and answer-sheet file loading.
//!
//! Quizzes are stored as the JSON the `generate` command writes. Answer
//! sheets are either an object keyed by exercise index or a plain array.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::grader::Answers;
use crate::model::{ExerciseKind, Quiz};

/// Answer sheets as they appear on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerSheet {
    Keyed(Answers),
    Ordered(Vec<String>),
}

/// Parse a quiz from a JSON file.
pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;
    parse_quiz_str(&content, path)
}

pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    serde_json::from_str(content)
        .with_context(|| format!("failed to parse quiz JSON: {}", source_path.display()))
}

/// Parse an answer sheet from a JSON file.
pub fn load_answers(path: &Path) -> Result<Answers> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    parse_answers_str(&content, path)
}

/// Parse an answer sheet. An array is keyed by position.
pub fn parse_answers_str(content: &str, source_path: &Path) -> Result<Answers> {
    let sheet: AnswerSheet = serde_json::from_str(content).with_context(|| {
        format!(
            "answers must be a JSON object of index -> answer or an array of answers: {}",
            source_path.display()
        )
    })?;
    Ok(match sheet {
        AnswerSheet::Keyed(map) => map,
        AnswerSheet::Ordered(list) => list
            .into_iter()
            .enumerate()
            .map(|(i, a)| (i.to_string(), a))
            .collect(),
    })
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based exercise index.
    pub index: usize,
    pub message: String,
}

/// Check a (possibly hand-edited) quiz for exercises that cannot be graded
/// fairly.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, ex) in quiz.exercises.iter().enumerate() {
        if ex.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "prompt is empty".into(),
            });
        }
        if ex.answer.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "expected answer is empty".into(),
            });
        }
        match ex.kind {
            ExerciseKind::MultipleChoice if !ex.options.contains(&ex.answer) => {
                warnings.push(ValidationWarning {
                    index,
                    message: format!("answer {:?} is not one of the options", ex.answer),
                });
            }
            ExerciseKind::FillIn if !ex.options.is_empty() => {
                warnings.push(ValidationWarning {
                    index,
                    message: "fill-in exercise lists options".into(),
                });
            }
            _ => {}
        }
        if !quiz.selector.admits(ex.topic) {
            warnings.push(ValidationWarning {
                index,
                message: format!(
                    "topic {} does not match quiz selector {}",
                    ex.topic.slug(),
                    quiz.selector.slug()
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Exercise, Topic, TopicSelector};
    use std::path::PathBuf;

    const QUIZ_JSON: &str = r#"{
  "selector": { "single": "participles" },
  "exercises": [
    {
      "kind": "fill_in",
      "topic": "participles",
      "prompt": "Write the past participle of \"be\": \"I have ___.\"",
      "answer": "been",
      "explanation": "The past participle (V3) of \"be\" is \"been\"."
    }
  ]
}"#;

    #[test]
    fn parse_quiz() {
        let quiz = parse_quiz_str(QUIZ_JSON, &PathBuf::from("quiz.json")).unwrap();
        assert_eq!(
            quiz.selector,
            TopicSelector::Single(Topic::IrregularParticiples)
        );
        assert_eq!(quiz.exercises[0].answer, "been");
        assert!(quiz.exercises[0].options.is_empty());
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn parse_malformed_quiz() {
        let err = parse_quiz_str("{ not json", &PathBuf::from("bad.json")).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn answers_keyed_and_ordered() {
        let keyed = parse_answers_str(r#"{"0": "Been", "3": "has"}"#, &PathBuf::from("a.json"))
            .unwrap();
        assert_eq!(keyed.get("0").map(String::as_str), Some("Been"));
        assert_eq!(keyed.len(), 2);

        let ordered = parse_answers_str(r#"["has", "", "since"]"#, &PathBuf::from("a.json"))
            .unwrap();
        assert_eq!(ordered.get("2").map(String::as_str), Some("since"));
        assert_eq!(ordered.get("1").map(String::as_str), Some(""));
    }

    #[test]
    fn answers_reject_other_shapes() {
        assert!(parse_answers_str("42", &PathBuf::from("a.json")).is_err());
    }

    #[test]
    fn validate_flags_broken_exercises() {
        let quiz = Quiz {
            selector: TopicSelector::Single(Topic::AuxAgreement),
            exercises: vec![
                Exercise::multiple_choice(
                    Topic::AuxAgreement,
                    "She ___ gone.",
                    vec!["has".into(), "have".into()],
                    "had",
                    "",
                ),
                Exercise::fill_in(Topic::ForSince, "", "for", ""),
            ],
        };
        let warnings = validate_quiz(&quiz);
        assert!(warnings
            .iter()
            .any(|w| w.index == 0 && w.message.contains("not one of the options")));
        assert!(warnings
            .iter()
            .any(|w| w.index == 1 && w.message.contains("prompt is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.index == 1 && w.message.contains("does not match")));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.json");
        std::fs::write(&path, QUIZ_JSON).unwrap();
        assert_eq!(load_quiz(&path).unwrap().len(), 1);
        assert!(load_quiz(&dir.path().join("missing.json")).is_err());
    }
}
