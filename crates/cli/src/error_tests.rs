// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_table_not_found_display() {
    let err = Error::TableNotFound("accounts".to_string());
    assert!(err.to_string().contains("table not found: 'accounts'"));
    assert!(err.to_string().contains("sieve tables"));
}

#[test]
fn test_error_no_database_display() {
    let msg = Error::NoDatabase.to_string();
    assert!(msg.contains("no database"));
    assert!(msg.contains("--db"));
}

#[test]
fn test_error_no_input_display() {
    assert!(Error::NoInput.to_string().contains("no condition tree"));
}

#[test]
fn test_error_config_display() {
    let err = Error::Config("failed to parse sieve.toml".to_string());
    assert_eq!(err.to_string(), "config error: failed to parse sieve.toml");
}

#[test]
fn test_core_error_is_transparent() {
    let core = sieve_core::Error::UnresolvedField {
        field: "colour".to_string(),
        tables: vec!["users".to_string()],
    };
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
    assert!(matches!(err, Error::Core(_)));
}

#[test]
fn test_error_from_json() {
    let json_err = serde_json::from_str::<sieve_core::Expr>("{").unwrap_err();
    let err: Error = json_err.into();
    assert!(err.to_string().starts_with("invalid condition tree:"));
}

#[test]
fn test_error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_error_from_rusqlite() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(err.to_string().starts_with("database error:"));
}
