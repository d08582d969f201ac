// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::context;
use similar_asserts::assert_eq;

#[test]
fn text_lists_tables_in_resolution_order() {
    let ctx = context();
    let tables: Vec<&Table> = ctx.catalog.tables().collect();

    assert_eq!(
        render(&tables, OutputFormat::Text).unwrap(),
        "\
users
  id     integer
  name   text
  age    integer
  score  float
  flags  integer
orders
  id       integer
  user_id  integer
  total    decimal
  status   text"
    );
}

#[test]
fn json_lists_columns_with_types() {
    let ctx = context();
    let tables: Vec<&Table> = ctx.catalog.tables().collect();
    let json: serde_json::Value =
        serde_json::from_str(&render(&tables, OutputFormat::Json).unwrap()).unwrap();

    let tables = json.as_array().unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[1]["name"].as_str(), Some("orders"));
    assert_eq!(tables[1]["columns"][2]["name"].as_str(), Some("total"));
    assert_eq!(tables[1]["columns"][2]["type"].as_str(), Some("decimal"));
}

#[test]
fn empty_catalog_renders_nothing() {
    assert_eq!(render(&[], OutputFormat::Text).unwrap(), "");
    assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
}
