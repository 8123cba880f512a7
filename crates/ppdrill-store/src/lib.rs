//! ppdrill-store: result persistence backends.
//!
//! Implements the `ResultStore` trait for SQLite, JSON-lines files and
//! memory, and loads the `ppdrill.toml` configuration that picks one.

pub mod config;
pub mod error;
pub mod jsonl;
pub mod memory;
pub mod sqlite;

pub use config::{create_store, load_config, DrillConfig, StoreConfig};
pub use error::StoreError;
pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
