//! Plain-text feedback for the terminal.

use ppdrill_core::results::GradedResult;

const NO_ANSWER: &str = "(no answer)";

/// Score line followed by one block per exercise.
pub fn feedback_text(result: &GradedResult) -> String {
    let mut out = format!(
        "{}: {}/{} correct ({:.0}%) on {}\n",
        result.student,
        result.score,
        result.total,
        result.accuracy() * 100.0,
        result.topic
    );

    for (i, item) in result.details.iter().enumerate() {
        let submitted = if item.submitted.is_empty() {
            NO_ANSWER
        } else {
            item.submitted.as_str()
        };
        let mark = if item.outcome.is_correct() { "+" } else { "-" };
        out.push('\n');
        out.push_str(&format!("{mark} {}. {}\n", i + 1, item.prompt));
        out.push_str(&format!("    Your answer: {submitted}\n"));
        if !item.outcome.is_correct() {
            out.push_str(&format!("    Correct: {}\n", item.expected));
        }
        out.push_str(&format!("    {}\n", item.explanation));
    }
    out
}
