//! In-memory store for tests and throwaway sessions.

use std::sync::Mutex;

use ppdrill_core::results::GradedResult;
use ppdrill_core::traits::ResultStore;

use crate::error::StoreError;

/// Keeps results in a `Vec`, oldest first. Nothing survives the process.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<GradedResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn append(&self, record: &GradedResult) -> anyhow::Result<()> {
        self.records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?
            .push(record.clone());
        Ok(())
    }

    fn list(&self, student: Option<&str>) -> anyhow::Result<Vec<GradedResult>> {
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records
            .iter()
            .rev()
            .filter(|r| student.map_or(true, |s| r.student == s))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(student: &str, score: u32, minute: u32) -> GradedResult {
        GradedResult {
            student: student.into(),
            topic: "Mixed".into(),
            score,
            total: 10,
            details: vec![],
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 10, minute, 0).unwrap(),
        }
    }

    #[test]
    fn newest_first_and_filtered() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        store.append(&record("Ana", 3, 0)).unwrap();
        store.append(&record("Luis", 5, 1)).unwrap();
        store.append(&record("Ana", 7, 2)).unwrap();

        let all = store.list(None).unwrap();
        assert_eq!(
            all.iter().map(|r| r.score).collect::<Vec<_>>(),
            vec![7, 5, 3]
        );

        let ana = store.list(Some("Ana")).unwrap();
        assert_eq!(ana.len(), 2);
        assert_eq!(ana[0].score, 7);
        assert!(store.list(Some("Nobody")).unwrap().is_empty());
        assert_eq!(store.len(), 3);
    }
}
