// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the sieve CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] sieve_core::Error),

    #[error("table not found: '{0}'\n  hint: run 'sieve tables' to list the known tables")]
    TableNotFound(String),

    #[error("no database to query\n  hint: pass --db <path> or set 'database' in sieve.toml")]
    NoDatabase,

    #[error("no condition tree given\n  hint: pass the tree as JSON, or '-' to read it from stdin")]
    NoInput,

    #[error("invalid condition tree: {0}\n  hint: run 'sieve schema expr' for the expected shape")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for sieve CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
