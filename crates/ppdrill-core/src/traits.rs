//! The persistence seam.
//!
//! Implemented by the `ppdrill-store` crate. Sessions only ever append and
//! list, so the storage engine can change without touching grading.

use crate::results::GradedResult;

/// An append-only log of graded results.
pub trait ResultStore: Send + Sync {
    /// Short backend name for logs (e.g. "sqlite").
    fn name(&self) -> &str;

    /// Persist one record. Failures are returned as-is; callers do not retry.
    fn append(&self, record: &GradedResult) -> anyhow::Result<()>;

    /// All records, or only those for `student`, newest first.
    fn list(&self, student: Option<&str>) -> anyhow::Result<Vec<GradedResult>>;
}
