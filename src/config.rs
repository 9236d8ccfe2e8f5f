use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ContactsResult;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "contacts.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file.
    pub database: PathBuf,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: PathBuf::from(".data").join("contacts.db"),
            log_filter: "warn".into(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> ContactsResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads `path`, or falls back to defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> ContactsResult<Self> {
        match path {
            Some(p) => Self::parse(&std::fs::read_to_string(p)?),
            None => Ok(Self::default()),
        }
    }

    /// Creates the database's parent directory if missing.
    pub fn ensure_database_dir(&self) -> ContactsResult<()> {
        if let Some(parent) = self.database.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
