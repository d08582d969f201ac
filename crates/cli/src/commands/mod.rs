// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod count;
pub mod schema;
pub mod sql;
pub mod tables;

use std::io::Read;
use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use sieve_core::{Catalog, Expr, Predicate, Table};

use crate::config::Config;
use crate::error::{Error, Result};

/// The tables and database a command works against.
pub struct Context {
    /// Declared tables first, then the database's namespace.
    pub catalog: Catalog,
    pub conn: Option<Connection>,
}

impl Context {
    /// Load the config and open the database named by `--db` or the
    /// config's `database`, read-only.
    pub fn open(config: Option<&Path>, db: Option<&Path>) -> Result<Self> {
        let config = Config::discover(config)?;
        let mut catalog: Catalog = config.tables().into_iter().collect();

        let db_path = db.map(Path::to_path_buf).or(config.database);
        let conn = match db_path {
            Some(path) => {
                tracing::debug!("opening {}", path.display());
                let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
                for entry in Catalog::introspect(&conn)?.entries {
                    catalog.push(entry);
                }
                Some(conn)
            }
            None => None,
        };

        Ok(Context { catalog, conn })
    }

    pub fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::NoDatabase)
    }

    pub fn table(&self, name: &str) -> Result<&Table> {
        self.catalog
            .table(name)
            .ok_or_else(|| Error::TableNotFound(name.to_string()))
    }

    /// Translate against the named tables in order, or the whole catalog
    /// when none are named.
    pub fn filter(&self, expr: &Expr, tables: &[String]) -> Result<Predicate> {
        if tables.is_empty() {
            return Ok(expr.filter(&self.catalog)?);
        }
        let tables = tables
            .iter()
            .map(|name| self.table(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        Ok(expr.filter(&tables)?)
    }
}

/// Read a condition tree argument; `-` reads stdin.
pub fn read_expr(arg: &str) -> Result<Expr> {
    if arg == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        parse_expr(&input)
    } else {
        parse_expr(arg)
    }
}

pub fn parse_expr(text: &str) -> Result<Expr> {
    if text.trim().is_empty() {
        return Err(Error::NoInput);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
