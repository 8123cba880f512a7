//! SQLite store.
//!
//! A single `results` table. Item details are kept as a JSON text column and
//! timestamps as RFC 3339 strings.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use ppdrill_core::results::{GradedResult, ItemResult};
use ppdrill_core::traits::ResultStore;

use crate::error::StoreError;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS results (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    student_name TEXT NOT NULL,
    topic TEXT NOT NULL,
    score INTEGER NOT NULL,
    total INTEGER NOT NULL,
    details TEXT,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_results_student ON results(student_name);
"#;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

/// A row as stored, before the JSON and timestamp columns are decoded.
struct RawRow {
    student: String,
    topic: String,
    score: u32,
    total: u32,
    details: Option<String>,
    created_at: String,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            student: row.get(0)?,
            topic: row.get(1)?,
            score: row.get(2)?,
            total: row.get(3)?,
            details: row.get(4)?,
            created_at: row.get(5)?,
        })
    }

    fn decode(self) -> Result<GradedResult, StoreError> {
        let details: Vec<ItemResult> = match self.details.as_deref() {
            Some(json) if !json.trim().is_empty() => serde_json::from_str(json)?,
            _ => Vec::new(),
        };
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| StoreError::InvalidTimestamp(format!("{}: {e}", self.created_at)))?
            .with_timezone(&Utc);
        Ok(GradedResult {
            student: self.student,
            topic: self.topic,
            score: self.score,
            total: self.total,
            details,
            created_at,
        })
    }
}

impl SqliteStore {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        tracing::info!("opened result database at {}", path.display());
        Self::with_connection(conn)
    }

    /// A private database that disappears with the store.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn insert(&self, record: &GradedResult) -> Result<(), StoreError> {
        let details = serde_json::to_string(&record.details)?;
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        conn.execute(
            "INSERT INTO results (student_name, topic, score, total, details, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.student,
                record.topic,
                record.score,
                record.total,
                details,
                record.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn query(&self, student: Option<&str>) -> Result<Vec<GradedResult>, StoreError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;

        let rows: Vec<RawRow> = match student {
            Some(name) => {
                let mut stmt = conn.prepare(
                    "SELECT student_name, topic, score, total, details, created_at \
                     FROM results WHERE student_name = ?1 ORDER BY id DESC",
                )?;
                let rows = stmt.query_map(params![name], RawRow::from_row)?;
                rows.collect::<rusqlite::Result<_>>()?
            }
            None => {
                let mut stmt = conn.prepare(
                    "SELECT student_name, topic, score, total, details, created_at \
                     FROM results ORDER BY id DESC",
                )?;
                let rows = stmt.query_map([], RawRow::from_row)?;
                rows.collect::<rusqlite::Result<_>>()?
            }
        };

        rows.into_iter().map(RawRow::decode).collect()
    }
}

impl ResultStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn append(&self, record: &GradedResult) -> anyhow::Result<()> {
        Ok(self.insert(record)?)
    }

    fn list(&self, student: Option<&str>) -> anyhow::Result<Vec<GradedResult>> {
        Ok(self.query(student)?)
    }
}
