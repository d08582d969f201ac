// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Table descriptors that conditions are resolved against.
//!
//! A [`Table`] exposes named, typed [`Column`]s. A [`Catalog`] is the whole
//! namespace of one database: tables plus the views, indexes and triggers
//! that live next to them.

use rusqlite::Connection;
use serde::Serialize;

use crate::error::Result;

/// How a literal value is coerced before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numeric {
    Int,
    Float,
}

impl Numeric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Numeric::Int => "int",
            Numeric::Float => "float",
        }
    }
}

/// Storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Decimal,
    Boolean,
    Date,
    DateTime,
    Text,
    Blob,
}

impl ColumnType {
    /// Derive the column type from a declared SQL type name.
    ///
    /// Follows SQLite's affinity rules (`INT` before `CHAR`/`CLOB`/`TEXT`,
    /// then `BLOB`, then `REAL`/`FLOA`/`DOUB`, otherwise numeric), with
    /// boolean and temporal names (`TIME*`, `DATE`) recognized first.
    pub fn from_declared(declared: &str) -> Self {
        let upper = declared.trim().to_ascii_uppercase();
        let has = |needle: &str| upper.contains(needle);

        if has("BOOL") {
            ColumnType::Boolean
        } else if has("TIME") {
            ColumnType::DateTime
        } else if has("DATE") {
            ColumnType::Date
        } else if has("INT") {
            ColumnType::Integer
        } else if has("CHAR") || has("CLOB") || has("TEXT") {
            ColumnType::Text
        } else if has("BLOB") || upper.is_empty() {
            ColumnType::Blob
        } else if has("REAL") || has("FLOA") || has("DOUB") {
            ColumnType::Float
        } else {
            ColumnType::Decimal
        }
    }

    /// Numeric coercion for literals compared against this column.
    ///
    /// Decimal columns coerce to float; everything non-numeric is compared
    /// as lower-cased text.
    pub fn numeric(&self) -> Option<Numeric> {
        match self {
            ColumnType::Integer => Some(Numeric::Int),
            ColumnType::Float | ColumnType::Decimal => Some(Numeric::Float),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Decimal => "decimal",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Text => "text",
            ColumnType::Blob => "blob",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Column {
            name: name.into(),
            ty,
        }
    }
}

/// A table and its columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Table {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Build a table from `(column, declared type)` pairs.
    pub fn from_declared<'a>(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Table::new(
            name,
            columns
                .into_iter()
                .map(|(col, decl)| Column::new(col, ColumnType::from_declared(decl))),
        )
    }

    /// Look up a column by name. SQLite identifiers are case-insensitive.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// One object in a database namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    Table(Table),
    View(String),
    Index { name: String, table: String },
    Trigger { name: String, table: String },
}

impl CatalogEntry {
    pub fn name(&self) -> &str {
        match self {
            CatalogEntry::Table(table) => &table.name,
            CatalogEntry::View(name)
            | CatalogEntry::Index { name, .. }
            | CatalogEntry::Trigger { name, .. } => name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CatalogEntry::Table(_) => "table",
            CatalogEntry::View(_) => "view",
            CatalogEntry::Index { .. } => "index",
            CatalogEntry::Trigger { .. } => "trigger",
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            CatalogEntry::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<Table> for CatalogEntry {
    fn from(table: Table) -> Self {
        CatalogEntry::Table(table)
    }
}

/// The namespace of a database, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    pub fn push(&mut self, entry: impl Into<CatalogEntry>) {
        self.entries.push(entry.into());
    }

    /// Tables in catalog order, skipping every other kind of entry.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.entries.iter().filter_map(CatalogEntry::as_table)
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Read the namespace of an open SQLite database.
    pub fn introspect(conn: &Connection) -> Result<Catalog> {
        let mut stmt = conn.prepare(
            "SELECT type, name, tbl_name FROM sqlite_master
             WHERE substr(name, 1, 7) != 'sqlite_'
             ORDER BY rowid",
        )?;
        let objects: Vec<(String, String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
            .collect::<std::result::Result<_, _>>()?;

        let mut catalog = Catalog::new();
        for (kind, name, table) in objects {
            let entry = match kind.as_str() {
                "table" => CatalogEntry::Table(introspect_table(conn, &name)?),
                "view" => CatalogEntry::View(name),
                "index" => CatalogEntry::Index { name, table },
                "trigger" => CatalogEntry::Trigger { name, table },
                other => {
                    tracing::debug!("skipping catalog object {} of type {}", name, other);
                    continue;
                }
            };
            catalog.push(entry);
        }

        tracing::debug!(
            "introspected {} catalog entries ({} tables)",
            catalog.entries.len(),
            catalog.tables().count()
        );
        Ok(catalog)
    }
}

fn introspect_table(conn: &Connection, name: &str) -> Result<Table> {
    let mut stmt = conn.prepare("SELECT name, type FROM pragma_table_info(?1) ORDER BY cid")?;
    let columns = stmt
        .query_map([name], |row| {
            let column: String = row.get(0)?;
            let declared: String = row.get(1)?;
            Ok(Column::new(column, ColumnType::from_declared(&declared)))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Table::new(name, columns))
}

impl From<Vec<Table>> for Catalog {
    fn from(tables: Vec<Table>) -> Self {
        tables.into_iter().collect()
    }
}

impl<E: Into<CatalogEntry>> FromIterator<E> for Catalog {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Catalog {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
