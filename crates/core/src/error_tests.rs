// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_parameter = { Error::InvalidParameter("a.b.c".into()), "a.b.c" },
    invalid_operator = { Error::InvalidOperator("<>".into()), "<>" },
    invalid_node = { Error::InvalidNode("x has no operator".into()), "x has no operator" },
    missing_upper_bound = { Error::MissingUpperBound("score".into()), "upper bound" },
    no_schemas = { Error::NoSchemas, "no tables" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn unresolved_field_lists_searched_tables() {
    let err = Error::UnresolvedField {
        field: "colour".into(),
        tables: vec!["users".into(), "orders".into()],
    };
    let msg = err.to_string();
    assert!(msg.contains("'colour'"));
    assert!(msg.contains("users, orders"));
    assert!(msg.contains("hint:"));
}

#[test]
fn invalid_number_names_expected_type() {
    let err = Error::InvalidNumber {
        field: "age".into(),
        expected: "int",
        value: "old".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("age"));
    assert!(msg.contains("int"));
    assert!(msg.contains("'old'"));
}

#[test]
fn parse_errors_are_classified() {
    assert!(Error::InvalidParameter("a.b.c".into()).is_parse_error());
    assert!(Error::UnresolvedField {
        field: "x".into(),
        tables: vec![]
    }
    .is_parse_error());
    assert!(Error::InvalidNode("empty".into()).is_parse_error());
    assert!(!Error::NoSchemas.is_parse_error());
    assert!(!Error::UnrecognizedSchema {
        name: "idx".into(),
        kind: "index"
    }
    .is_parse_error());
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn error_from_rusqlite() {
    let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, Error::Database(_)));
    assert!(!err.is_parse_error());
}
