//! ppdrill-report: rendering of graded quizzes and result history.

pub mod html;
pub mod markdown;
pub mod text;

pub use html::{generate_html, write_html_report};
pub use markdown::{feedback_markdown, history_markdown};
pub use text::feedback_text;
