// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sieve-core: boolean filter trees to SQLite predicates
//!
//! This crate provides the condition tree, the table catalog, and the
//! translation that turns one into a parameterized `WHERE` fragment
//! against the other. The sieve CLI is a thin layer over it.

pub mod condition;
pub mod error;
pub mod predicate;
pub mod resolve;
pub mod schema;
pub mod translate;

pub use condition::{Condition, Expr, Operator};
pub use error::{Error, Result};
pub use predicate::{BitOp, ColumnRef, CompareOp, Operand, Param, Predicate, Sql, Value};
pub use resolve::{find_field, lookup_field, resolve_schemas, SchemaArg};
pub use schema::{Catalog, CatalogEntry, Column, ColumnType, Numeric, Table};
pub use translate::{coerce_value, ParamNamer, Translator};
