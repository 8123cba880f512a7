//! HTML history report.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use ppdrill_core::results::GradedResult;
use ppdrill_core::statistics::{compute_history_stats, TopicStats};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML report for `records` (newest first).
///
/// `student` only changes the title; filtering is the caller's job.
pub fn generate_html(records: &[GradedResult], student: Option<&str>) -> String {
    let stats = compute_history_stats(records);
    let title = match student {
        Some(name) => format!("ppdrill history for {}", html_escape(name)),
        None => "ppdrill history".to_string(),
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"meta\">{} quizzes | {}/{} correct | {:.1}% overall</p>\n",
        stats.overall.attempts,
        stats.overall.score,
        stats.overall.total,
        stats.overall.accuracy * 100.0
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>By topic</h2>\n");
    if stats.per_topic.is_empty() {
        html.push_str("<p>No results saved yet.</p>\n");
    } else {
        html.push_str("<table class=\"summary\">\n");
        html.push_str("<thead><tr><th>Topic</th><th>Quizzes</th><th>Correct</th><th>Accuracy</th><th>Best</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for (topic, s) in &stats.per_topic {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}/{}</td><td>{:.1}%</td><td>{:.1}%</td></tr>\n",
                html_escape(topic),
                s.attempts,
                s.score,
                s.total,
                s.accuracy * 100.0,
                s.best_accuracy * 100.0,
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str(&generate_bar_chart(&stats.per_topic));
    }
    html.push_str("</section>\n");

    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Quizzes</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"results\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Date</th><th onclick=\"sortTable(1)\">Student</th><th onclick=\"sortTable(2)\">Topic</th><th onclick=\"sortTable(3)\">Score</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for r in records {
        let class = if r.accuracy() >= 0.5 { "pass" } else { "fail" };
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{}/{}</td></tr>\n",
            r.created_at.format("%Y-%m-%d %H:%M:%S"),
            html_escape(&r.student),
            html_escape(&r.topic),
            class,
            r.score,
            r.total
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(records).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(
    records: &[GradedResult],
    student: Option<&str>,
    path: &Path,
) -> Result<()> {
    let html = generate_html(records, student);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn generate_bar_chart(per_topic: &BTreeMap<String, TopicStats>) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 240;

    let total_height = per_topic.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, (topic, stats)) in per_topic.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let score = stats.accuracy;
        let width = (score * max_width as f64) as usize;

        let color = if score >= 0.8 {
            "#22c55e"
        } else if score >= 0.5 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(topic)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            score * 100.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #ffffff; --fg: #1f2937; --border: #e5e7eb; --pass: #dcfce7; --fail: #fee2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #14532d; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); cursor: pointer; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = !(table.dataset.sortCol == col && table.dataset.sortDir == 'asc');
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    return asc ? va.localeCompare(vb) : vb.localeCompare(va);
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(student: &str, topic: &str, score: u32) -> GradedResult {
        GradedResult {
            student: student.into(),
            topic: topic.into(),
            score,
            total: 10,
            details: vec![],
            created_at: Utc.with_ymd_and_hms(2025, 5, 6, 7, 8, 9).unwrap(),
        }
    }

    #[test]
    fn html_report_contains_required_elements() {
        let records = vec![
            record("Ana", "Auxiliary agreement", 9),
            record("Ana", "Mixed", 4),
        ];
        let html = generate_html(&records, Some("Ana"));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<title>ppdrill history for Ana</title>"));
        assert!(html.contains("2 quizzes | 13/20 correct | 65.0% overall"));
        assert!(html.contains("Auxiliary agreement"));
        assert!(html.contains("<svg"));
        assert!(html.contains("2025-05-06 07:08:09"));
    }

    #[test]
    fn content_is_escaped() {
        let html = generate_html(&[record("<b>Eve</b>", "Ever/Never (experiences)", 1)], None);
        assert!(!html.contains("<b>Eve</b>"));
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    }

    #[test]
    fn empty_history_has_no_chart() {
        let html = generate_html(&[], None);
        assert!(html.contains("No results saved yet."));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn html_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/history.html");

        write_html_report(&[record("Ana", "Mixed", 5)], None, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
