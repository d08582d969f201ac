// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQL predicates produced by translation.
//!
//! A [`Predicate`] is an owned SQLite expression tree. [`Predicate::to_sql`]
//! renders it into a `WHERE` fragment with `:name` placeholders and the
//! values bound to them, ready for `rusqlite::Statement::query`:
//!
//! ```rust,ignore
//! let sql = expr.filter(&catalog)?.to_sql();
//! let mut stmt = conn.prepare(&format!("SELECT * FROM users WHERE {}", sql.text))?;
//! let rows = stmt.query(&*sql.named_params())?;
//! ```

use std::fmt;

use rusqlite::types::{ToSql, ToSqlOutput};
use serde::Serialize;

/// A value bound to a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Integer(i) => ToSqlOutput::from(*i),
            Value::Real(f) => ToSqlOutput::from(*f),
            Value::Text(s) => ToSqlOutput::from(s.as_str()),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r:?}"),
            Value::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// A `table.column` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
    pub table: String,
    pub column: String,
}

/// A named placeholder and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Placeholder name without the leading `:`.
    pub name: String,
    pub value: Value,
}

/// One side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Column(ColumnRef),
    Param(Param),
    /// `lower(...)` for case-insensitive comparison.
    Lower(Box<Operand>),
}

impl Operand {
    pub fn lower(self) -> Operand {
        Operand::Lower(Box::new(self))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "=",
            CompareOp::Ne => "!=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOp {
    And,
    Or,
}

impl BitOp {
    pub fn as_sql(&self) -> &'static str {
        match self {
            BitOp::And => "&",
            BitOp::Or => "|",
        }
    }
}

/// A SQLite boolean expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Compare {
        lhs: Operand,
        op: CompareOp,
        rhs: Operand,
    },
    Like {
        lhs: Operand,
        pattern: Operand,
    },
    Between {
        expr: Operand,
        low: Operand,
        high: Operand,
    },
    /// `(lhs op mask) > 0`
    Bitwise {
        lhs: Operand,
        op: BitOp,
        mask: Operand,
    },
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

/// A rendered predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Sql {
    pub text: String,
    /// `(":name", value)` pairs in placeholder order.
    pub bindings: Vec<(String, Value)>,
}

impl Sql {
    /// Bindings in the shape `rusqlite` takes for named parameters.
    pub fn named_params(&self) -> Vec<(&str, &dyn ToSql)> {
        self.bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value as &dyn ToSql))
            .collect()
    }

    /// The predicate with every placeholder replaced by its literal.
    ///
    /// For display only; execute [`Sql::text`] with bound parameters.
    pub fn inline(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest = self.text.as_str();
        // Placeholders are matched as whole tokens, and substituted
        // literals are never rescanned.
        while let Some(start) = rest.find(':') {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 1..];
            let len = tail
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(tail.len());
            let token = &rest[start..start + 1 + len];
            match self.bindings.iter().find(|(name, _)| name == token) {
                Some((_, value)) => out.push_str(&value.to_string()),
                None => out.push_str(token),
            }
            rest = &tail[len..];
        }
        out.push_str(rest);
        out
    }
}

impl Predicate {
    /// Render into SQL text plus named bindings.
    pub fn to_sql(&self) -> Sql {
        let mut sql = Sql {
            text: String::new(),
            bindings: Vec::new(),
        };
        self.render(&mut sql);
        tracing::trace!("rendered predicate: {}", sql.text);
        sql
    }

    /// Every bound parameter, in rendering order.
    pub fn params(&self) -> Vec<&Param> {
        let mut out = Vec::new();
        self.collect_params(&mut out);
        out
    }

    fn collect_params<'a>(&'a self, out: &mut Vec<&'a Param>) {
        match self {
            Predicate::Compare { lhs, rhs, .. } => {
                lhs.collect_params(out);
                rhs.collect_params(out);
            }
            Predicate::Like { lhs, pattern } => {
                lhs.collect_params(out);
                pattern.collect_params(out);
            }
            Predicate::Between { expr, low, high } => {
                expr.collect_params(out);
                low.collect_params(out);
                high.collect_params(out);
            }
            Predicate::Bitwise { lhs, mask, .. } => {
                lhs.collect_params(out);
                mask.collect_params(out);
            }
            Predicate::Not(inner) => inner.collect_params(out),
            Predicate::And(children) | Predicate::Or(children) => {
                for child in children {
                    child.collect_params(out);
                }
            }
        }
    }

    fn render(&self, sql: &mut Sql) {
        match self {
            Predicate::Compare { lhs, op, rhs } => {
                lhs.render(sql);
                sql.text.push(' ');
                sql.text.push_str(op.as_sql());
                sql.text.push(' ');
                rhs.render(sql);
            }
            Predicate::Like { lhs, pattern } => {
                lhs.render(sql);
                sql.text.push_str(" LIKE ");
                pattern.render(sql);
            }
            Predicate::Between { expr, low, high } => {
                expr.render(sql);
                sql.text.push_str(" BETWEEN ");
                low.render(sql);
                sql.text.push_str(" AND ");
                high.render(sql);
            }
            Predicate::Bitwise { lhs, op, mask } => {
                sql.text.push('(');
                lhs.render(sql);
                sql.text.push(' ');
                sql.text.push_str(op.as_sql());
                sql.text.push(' ');
                mask.render(sql);
                sql.text.push_str(") > 0");
            }
            Predicate::Not(inner) => {
                sql.text.push_str("NOT (");
                inner.render(sql);
                sql.text.push(')');
            }
            Predicate::And(children) => render_joined(sql, children, " AND ", "1"),
            Predicate::Or(children) => render_joined(sql, children, " OR ", "0"),
        }
    }
}

fn render_joined(sql: &mut Sql, children: &[Predicate], sep: &str, empty: &str) {
    if children.is_empty() {
        sql.text.push_str(empty);
        return;
    }
    sql.text.push('(');
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            sql.text.push_str(sep);
        }
        child.render(sql);
    }
    sql.text.push(')');
}

impl Operand {
    fn render(&self, sql: &mut Sql) {
        match self {
            Operand::Column(col) => {
                sql.text.push_str(&quote_ident(&col.table));
                sql.text.push('.');
                sql.text.push_str(&quote_ident(&col.column));
            }
            Operand::Param(param) => {
                let placeholder = format!(":{}", param.name);
                sql.text.push_str(&placeholder);
                sql.bindings.push((placeholder, param.value.clone()));
            }
            Operand::Lower(inner) => {
                sql.text.push_str("lower(");
                inner.render(sql);
                sql.text.push(')');
            }
        }
    }

    fn collect_params<'a>(&'a self, out: &mut Vec<&'a Param>) {
        match self {
            Operand::Column(_) => {}
            Operand::Param(param) => out.push(param),
            Operand::Lower(inner) => inner.collect_params(out),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql().text)
    }
}

/// Quote an SQL identifier: `users` -> `"users"`.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
