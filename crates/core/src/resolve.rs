// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema set normalization and field lookup.

use crate::condition::Condition;
use crate::error::{Error, Result};
use crate::schema::{Catalog, CatalogEntry, Column, Table};

/// The tables a condition tree is filtered against.
///
/// Callers pass a single table, a list of catalog entries, or a whole
/// catalog; [`resolve_schemas`] flattens any of them into a table list.
#[derive(Debug, Clone, Copy)]
pub enum SchemaArg<'a> {
    Table(&'a Table),
    Tables(&'a [Table]),
    List(&'a [CatalogEntry]),
    Namespace(&'a Catalog),
}

impl<'a> From<&'a Table> for SchemaArg<'a> {
    fn from(table: &'a Table) -> Self {
        SchemaArg::Table(table)
    }
}

impl<'a> From<&'a [Table]> for SchemaArg<'a> {
    fn from(tables: &'a [Table]) -> Self {
        SchemaArg::Tables(tables)
    }
}

impl<'a> From<&'a Vec<Table>> for SchemaArg<'a> {
    fn from(tables: &'a Vec<Table>) -> Self {
        SchemaArg::Tables(tables)
    }
}

impl<'a, const N: usize> From<&'a [Table; N]> for SchemaArg<'a> {
    fn from(tables: &'a [Table; N]) -> Self {
        SchemaArg::Tables(tables)
    }
}

impl<'a> From<&'a [CatalogEntry]> for SchemaArg<'a> {
    fn from(entries: &'a [CatalogEntry]) -> Self {
        SchemaArg::List(entries)
    }
}

impl<'a> From<&'a Vec<CatalogEntry>> for SchemaArg<'a> {
    fn from(entries: &'a Vec<CatalogEntry>) -> Self {
        SchemaArg::List(entries)
    }
}

impl<'a> From<&'a Catalog> for SchemaArg<'a> {
    fn from(catalog: &'a Catalog) -> Self {
        SchemaArg::Namespace(catalog)
    }
}

/// Flatten a schema argument into the ordered list of candidate tables.
///
/// # Errors
///
/// A list entry that is not a table fails with
/// [`Error::UnrecognizedSchema`]; an empty result fails with
/// [`Error::NoSchemas`]. Non-table entries of a namespace are skipped.
pub fn resolve_schemas<'a>(arg: impl Into<SchemaArg<'a>>) -> Result<Vec<&'a Table>> {
    let tables: Vec<&Table> = match arg.into() {
        SchemaArg::Table(table) => vec![table],
        SchemaArg::Tables(tables) => tables.iter().collect(),
        SchemaArg::List(entries) => entries
            .iter()
            .map(|entry| {
                entry.as_table().ok_or_else(|| Error::UnrecognizedSchema {
                    name: entry.name().to_string(),
                    kind: entry.kind(),
                })
            })
            .collect::<Result<_>>()?,
        SchemaArg::Namespace(catalog) => catalog.tables().collect(),
    };

    if tables.is_empty() {
        return Err(Error::NoSchemas);
    }
    tracing::debug!(
        "resolved schema set: {}",
        tables
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(tables)
}

/// Look up a field on one table.
///
/// With a qualifier the table is only considered when its name contains
/// the qualifier.
pub fn lookup_field<'a>(table: &'a Table, name: &str, base: Option<&str>) -> Option<&'a Column> {
    match base {
        Some(base) if !table.name.contains(base) => None,
        _ => table.column(name),
    }
}

/// Find the first table in order that exposes the condition's field.
pub fn find_field<'a>(
    tables: &[&'a Table],
    condition: &Condition,
) -> Result<(&'a Table, &'a Column)> {
    tables
        .iter()
        .find_map(|&table| {
            lookup_field(table, &condition.name, condition.base.as_deref())
                .map(|column| (table, column))
        })
        .ok_or_else(|| Error::UnresolvedField {
            field: condition.fullname(),
            tables: tables.iter().map(|t| t.name.clone()).collect(),
        })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
