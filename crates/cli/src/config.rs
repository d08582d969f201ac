// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `sieve.toml` and includes:
//! - `database`: Optional SQLite database whose tables are introspected
//! - `tables`: Table declarations (`name` plus `column = "TYPE"` pairs)
//!   used when no database is at hand, or ahead of the database's tables
//!
//! The file is found via `--config`, then `SIEVE_CONFIG`, then
//! `./sieve.toml`, then `<user config dir>/sieve/config.toml`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use sieve_core::Table;

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "sieve.toml";
const USER_CONFIG_DIR: &str = "sieve";
const USER_CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration stored in `sieve.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database to introspect. Relative paths resolve against the
    /// directory holding the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,
    /// Declared tables, searched before any introspected ones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableConfig>,
}

/// One `[[tables]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    pub name: String,
    /// Column name to declared SQL type (`INTEGER`, `TEXT`, `REAL`, ...).
    #[serde(default)]
    pub columns: BTreeMap<String, String>,
}

impl TableConfig {
    pub fn to_table(&self) -> Table {
        Table::from_declared(
            self.name.as_str(),
            self.columns.iter().map(|(c, t)| (c.as_str(), t.as_str())),
        )
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let mut config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        if let (Some(db), Some(dir)) = (&config.database, path.parent()) {
            if db.is_relative() {
                config.database = Some(dir.join(db));
            }
        }
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config file found by [`find_config`], or the empty config
    /// when there is none.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match find_config(explicit)? {
            Some(path) => Config::load(&path),
            None => Ok(Config::default()),
        }
    }

    /// Declared tables, in file order.
    pub fn tables(&self) -> Vec<Table> {
        self.tables.iter().map(TableConfig::to_table).collect()
    }
}

/// Locate the config file.
///
/// An explicit path (flag or `SIEVE_CONFIG`) must exist; the implicit
/// locations are only used when present.
pub fn find_config(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_path) {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = std::env::current_dir()?.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(user_config_path().filter(|p| p.is_file()))
}

/// `<user config dir>/sieve/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
