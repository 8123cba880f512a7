//! Configuration loading and store factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ppdrill_core::session::DEFAULT_EXERCISES;
use ppdrill_core::traits::ResultStore;
use ppdrill_core::TopicSelector;

use crate::jsonl::JsonlStore;
use crate::memory::MemoryStore;
use crate::sqlite::SqliteStore;

/// Which backend holds graded results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Sqlite {
        #[serde(default = "default_db_path")]
        path: PathBuf,
    },
    Jsonl {
        path: PathBuf,
    },
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Sqlite {
            path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("ppdrill.db")
}

/// Top-level ppdrill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub store: StoreConfig,
    /// Student used when none is given on the command line.
    #[serde(default)]
    pub default_student: Option<String>,
    /// Topic slug or `mixed`.
    #[serde(default = "default_topic")]
    pub default_topic: String,
    #[serde(default = "default_count")]
    pub default_count: usize,
}

fn default_topic() -> String {
    TopicSelector::MIXED_SLUG.to_string()
}

fn default_count() -> usize {
    DEFAULT_EXERCISES
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            default_student: None,
            default_topic: default_topic(),
            default_count: default_count(),
        }
    }
}

impl DrillConfig {
    /// The configured default topic, parsed.
    pub fn default_selector(&self) -> Result<TopicSelector> {
        self.default_topic
            .parse()
            .with_context(|| format!("invalid default_topic in config: {}", self.default_topic))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::Sqlite { path } => StoreConfig::Sqlite {
            path: resolve_path(path),
        },
        StoreConfig::Jsonl { path } => StoreConfig::Jsonl {
            path: resolve_path(path),
        },
        StoreConfig::Memory => StoreConfig::Memory,
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `ppdrill.toml` in the current directory
/// 2. `~/.config/ppdrill/config.toml`
///
/// Environment variable overrides: `PPDRILL_DB`, `PPDRILL_STUDENT`.
pub fn load_config() -> Result<DrillConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<DrillConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("ppdrill.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => DrillConfig::default(),
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Parse a TOML string and expand `${VAR}` references.
pub fn parse_config_str(content: &str) -> Result<DrillConfig> {
    let mut config: DrillConfig = toml::from_str(content)?;
    config.store = resolve_store_config(&config.store);
    config.default_student = config
        .default_student
        .as_deref()
        .map(resolve_env_vars)
        .filter(|s| !s.trim().is_empty());
    Ok(config)
}

fn apply_env_overrides(config: &mut DrillConfig) {
    if let Ok(db) = std::env::var("PPDRILL_DB") {
        match &mut config.store {
            StoreConfig::Sqlite { path } | StoreConfig::Jsonl { path } => {
                *path = PathBuf::from(db);
            }
            StoreConfig::Memory => {
                tracing::warn!("PPDRILL_DB is set but the memory store is configured, ignoring");
            }
        }
    }

    if let Ok(student) = std::env::var("PPDRILL_STUDENT") {
        if !student.trim().is_empty() {
            config.default_student = Some(student);
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("ppdrill"))
}

/// Create a store instance from its configuration.
pub fn create_store(config: &StoreConfig) -> Result<Box<dyn ResultStore>> {
    match config {
        StoreConfig::Sqlite { path } => {
            let store = SqliteStore::open(path)
                .with_context(|| format!("failed to open database {}", path.display()))?;
            Ok(Box::new(store))
        }
        StoreConfig::Jsonl { path } => Ok(Box::new(JsonlStore::new(path.clone()))),
        StoreConfig::Memory => Ok(Box::new(MemoryStore::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_PPDRILL_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_PPDRILL_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_PPDRILL_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no vars"), "no vars");
        assert_eq!(resolve_env_vars("open ${_PPDRILL_TEST_VAR"), "open ${_PPDRILL_TEST_VAR");
        std::env::remove_var("_PPDRILL_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_reexpand_values() {
        std::env::set_var("_PPDRILL_SELF_REF", "a${_PPDRILL_SELF_REF}b");
        assert_eq!(
            resolve_env_vars("x/${_PPDRILL_SELF_REF}/y"),
            "x/a${_PPDRILL_SELF_REF}b/y"
        );
        std::env::remove_var("_PPDRILL_SELF_REF");
    }

    #[test]
    fn default_config() {
        let config = DrillConfig::default();
        assert_eq!(
            config.store,
            StoreConfig::Sqlite {
                path: PathBuf::from("ppdrill.db")
            }
        );
        assert_eq!(config.default_count, 10);
        assert_eq!(config.default_selector().unwrap(), TopicSelector::Mixed);
        assert!(config.default_student.is_none());
    }

    #[test]
    fn parse_store_variants() {
        let config = parse_config_str(
            r#"
default_student = "Ana"
default_topic = "for-since"
default_count = 15

[store]
type = "jsonl"
path = "history/results.jsonl"
"#,
        )
        .unwrap();
        assert_eq!(
            config.store,
            StoreConfig::Jsonl {
                path: PathBuf::from("history/results.jsonl")
            }
        );
        assert_eq!(config.default_student.as_deref(), Some("Ana"));
        assert_eq!(config.default_count, 15);
        assert_eq!(
            config.default_selector().unwrap(),
            "for-since".parse::<TopicSelector>().unwrap()
        );

        let config = parse_config_str("[store]\ntype = \"memory\"\n").unwrap();
        assert_eq!(config.store, StoreConfig::Memory);

        let config = parse_config_str("[store]\ntype = \"sqlite\"\n").unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn bad_default_topic_is_reported() {
        let config = parse_config_str("default_topic = \"poetry\"\n").unwrap();
        assert!(config.default_selector().is_err());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn factory_builds_each_backend() {
        let dir = tempfile::tempdir().unwrap();
        let sqlite = create_store(&StoreConfig::Sqlite {
            path: dir.path().join("a.db"),
        })
        .unwrap();
        assert_eq!(sqlite.name(), "sqlite");

        let jsonl = create_store(&StoreConfig::Jsonl {
            path: dir.path().join("a.jsonl"),
        })
        .unwrap();
        assert_eq!(jsonl.name(), "jsonl");

        assert_eq!(create_store(&StoreConfig::Memory).unwrap().name(), "memory");
    }
}
