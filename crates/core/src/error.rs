// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sieve-core operations.

use thiserror::Error;

/// All possible errors that can occur in sieve-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no table has field '{field}' (searched: {})\n  hint: qualify the field as table.field or pass the table that defines it", tables.join(", "))]
    UnresolvedField { field: String, tables: Vec<String> },

    #[error("field {field} expects a {expected} value, received '{value}' instead")]
    InvalidNumber {
        field: String,
        expected: &'static str,
        value: String,
    },

    #[error("invalid parameter '{0}'\n  hint: a parameter may contain at most one '.' (table.field)")]
    InvalidParameter(String),

    #[error("invalid operator '{0}'\n  hint: valid operators are: <, <=, >, >=, =, ==, !=, &, |, between")]
    InvalidOperator(String),

    #[error("invalid condition node: {0}\n  hint: each node has exactly one of the keys and, or, not, parameter")]
    InvalidNode(String),

    #[error("condition on {0} has no value")]
    MissingValue(String),

    #[error("range condition on {0} has no upper bound")]
    MissingUpperBound(String),

    #[error("operator '{op}' is not supported on {ty} field {field}")]
    UnsupportedOperator {
        field: String,
        op: String,
        ty: &'static str,
    },

    #[error("'{name}' is a {kind}, not a table\n  hint: only tables can be filtered")]
    UnrecognizedSchema { name: String, kind: &'static str },

    #[error("no tables to filter against")]
    NoSchemas,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for errors raised while turning a condition tree into a
    /// predicate, as opposed to catalog or I/O failures.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnresolvedField { .. }
                | Error::InvalidNumber { .. }
                | Error::InvalidParameter(_)
                | Error::InvalidOperator(_)
                | Error::InvalidNode(_)
                | Error::MissingValue(_)
                | Error::MissingUpperBound(_)
                | Error::UnsupportedOperator { .. }
        )
    }
}

/// A specialized Result type for sieve-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
