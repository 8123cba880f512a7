//! JSON-lines file store.
//!
//! One JSON object per line, appended in insertion order. Lines that fail to
//! parse are skipped with a warning so one bad edit does not hide history.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;

use ppdrill_core::results::GradedResult;
use ppdrill_core::traits::ResultStore;

use crate::error::StoreError;

pub struct JsonlStore {
    path: PathBuf,
    /// Serializes appends from the same process.
    write_lock: Mutex<()>,
}

impl JsonlStore {
    /// Use `path` as the log file. It is created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> Result<Vec<GradedResult>, StoreError> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for (lineno, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<GradedResult>(&line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        "skipping {}:{}: {}",
                        self.path.display(),
                        lineno + 1,
                        e
                    );
                }
            }
        }
        Ok(records)
    }
}

impl ResultStore for JsonlStore {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn append(&self, record: &GradedResult) -> anyhow::Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let mut line = serde_json::to_string(record).map_err(StoreError::from)?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn list(&self, student: Option<&str>) -> anyhow::Result<Vec<GradedResult>> {
        let records = self
            .read_all()
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        Ok(records
            .into_iter()
            .rev()
            .filter(|r| student.map_or(true, |s| r.student == s))
            .collect())
    }
}
