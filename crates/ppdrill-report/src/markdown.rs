//! Markdown rendering for feedback and history.

use ppdrill_core::results::GradedResult;

/// Pipes and newlines would break a table row.
fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

/// Feedback for one graded quiz as a Markdown document.
pub fn feedback_markdown(result: &GradedResult) -> String {
    let mut md = String::new();
    md.push_str(&format!("# Results for {}\n\n", result.student));
    md.push_str(&format!(
        "**Topic:** {}  \n**Score:** {}/{} ({:.0}%)  \n**Date:** {}\n\n",
        result.topic,
        result.score,
        result.total,
        result.accuracy() * 100.0,
        result.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str("| # | Prompt | Your answer | Correct | Result |\n");
    md.push_str("|---|--------|-------------|---------|--------|\n");
    for (i, item) in result.details.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            i + 1,
            cell(&item.prompt),
            cell(&item.submitted),
            cell(&item.expected),
            item.outcome
        ));
    }

    if !result.details.is_empty() {
        md.push_str("\n## Explanations\n\n");
        for (i, item) in result.details.iter().enumerate() {
            md.push_str(&format!("{}. {}\n", i + 1, item.explanation));
        }
    }
    md
}

/// History table, in the order given.
pub fn history_markdown(records: &[GradedResult]) -> String {
    let mut md = String::from("| Student | Topic | Score | Total | Date |\n");
    md.push_str("|---------|-------|-------|-------|------|\n");
    for r in records {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            cell(&r.student),
            cell(&r.topic),
            r.score,
            r.total,
            r.created_at.format("%Y-%m-%d %H:%M")
        ));
    }
    md
}
