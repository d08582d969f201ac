// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::condition::Operator;

fn users() -> Table {
    Table::from_declared("users", [("id", "INTEGER"), ("name", "TEXT"), ("age", "INTEGER")])
}

fn orders() -> Table {
    Table::from_declared("orders", [("id", "INTEGER"), ("total", "REAL")])
}

fn names(tables: &[&Table]) -> Vec<String> {
    tables.iter().map(|t| t.name.clone()).collect()
}

fn condition(parameter: &str) -> Condition {
    Condition::new(parameter, Operator::Eq, "1").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Schema resolution
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn single_table_resolves_to_itself() {
    let table = users();
    assert_eq!(names(&resolve_schemas(&table).unwrap()), vec!["users"]);
}

#[test]
fn table_list_keeps_order() {
    let tables = vec![orders(), users()];
    assert_eq!(
        names(&resolve_schemas(&tables).unwrap()),
        vec!["orders", "users"]
    );
}

#[test]
fn entry_list_of_tables_resolves() {
    let entries = vec![CatalogEntry::from(users()), CatalogEntry::from(orders())];
    assert_eq!(
        names(&resolve_schemas(&entries).unwrap()),
        vec!["users", "orders"]
    );
}

#[test]
fn entry_list_with_non_table_fails() {
    let entries = vec![
        CatalogEntry::from(users()),
        CatalogEntry::View("adults".into()),
    ];
    let err = resolve_schemas(&entries).unwrap_err();
    match err {
        Error::UnrecognizedSchema { name, kind } => {
            assert_eq!(name, "adults");
            assert_eq!(kind, "view");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn namespace_skips_non_tables() {
    let mut catalog = Catalog::new();
    catalog.push(CatalogEntry::Index {
        name: "idx".into(),
        table: "users".into(),
    });
    catalog.push(users());
    catalog.push(CatalogEntry::View("adults".into()));
    catalog.push(orders());

    assert_eq!(
        names(&resolve_schemas(&catalog).unwrap()),
        vec!["users", "orders"]
    );
}

#[test]
fn empty_namespace_fails() {
    let mut catalog = Catalog::new();
    catalog.push(CatalogEntry::View("adults".into()));
    assert!(matches!(
        resolve_schemas(&catalog).unwrap_err(),
        Error::NoSchemas
    ));
    assert!(matches!(
        resolve_schemas(&Vec::<Table>::new()).unwrap_err(),
        Error::NoSchemas
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Field lookup
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn lookup_without_qualifier() {
    let table = users();
    assert_eq!(lookup_field(&table, "age", None).unwrap().name, "age");
    assert!(lookup_field(&table, "total", None).is_none());
}

#[test]
fn lookup_qualifier_must_match_table_name() {
    let table = users();
    assert!(lookup_field(&table, "name", Some("users")).is_some());
    assert!(lookup_field(&table, "name", Some("user")).is_some());
    assert!(lookup_field(&table, "name", Some("orders")).is_none());
}

#[test]
fn find_field_uses_first_matching_table() {
    let (u, o) = (users(), orders());
    let tables = [&u, &o];

    let (table, column) = find_field(&tables, &condition("id")).unwrap();
    assert_eq!(table.name, "users");
    assert_eq!(column.name, "id");

    let (table, _) = find_field(&tables, &condition("total")).unwrap();
    assert_eq!(table.name, "orders");
}

#[test]
fn find_field_honors_qualifier() {
    let (u, o) = (users(), orders());
    let tables = [&u, &o];

    let (table, _) = find_field(&tables, &condition("orders.id")).unwrap();
    assert_eq!(table.name, "orders");
}

#[test]
fn find_field_reports_unresolved() {
    let (u, o) = (users(), orders());
    let tables = [&u, &o];

    let err = find_field(&tables, &condition("users.total")).unwrap_err();
    match err {
        Error::UnresolvedField { field, tables } => {
            assert_eq!(field, "users.total");
            assert_eq!(tables, vec!["users".to_string(), "orders".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}
