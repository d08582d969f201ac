// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of condition trees into SQL predicates.
//!
//! Each leaf is resolved to the first table exposing its field, its value
//! is coerced to the column's numeric type (or compared as lower-cased
//! text), and bound under a placeholder name unique within the call.
//! Combinators map one-to-one onto `NOT`, `AND` and `OR`.

use std::collections::{HashMap, HashSet};

use crate::condition::{Condition, Expr, Operator};
use crate::error::{Error, Result};
use crate::predicate::{BitOp, ColumnRef, CompareOp, Operand, Param, Predicate, Value};
use crate::resolve::{find_field, resolve_schemas, SchemaArg};
use crate::schema::{Column, Numeric, Table};

impl Expr {
    /// Translate this tree into a predicate against the given tables.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnresolvedField`] when no table has a leaf's
    /// field and [`Error::InvalidNumber`] when a value does not fit a
    /// numeric column; the first failure aborts the translation.
    pub fn filter<'a>(&self, schemas: impl Into<SchemaArg<'a>>) -> Result<Predicate> {
        Translator::new(resolve_schemas(schemas)?).translate(self)
    }
}

impl Condition {
    /// Translate a single leaf into a predicate against the given tables.
    pub fn filter<'a>(&self, schemas: impl Into<SchemaArg<'a>>) -> Result<Predicate> {
        Translator::new(resolve_schemas(schemas)?).condition(self)
    }
}

/// Hands out placeholder names: `users_age`, `users_age_1`, `users_age_2`...
#[derive(Debug, Default)]
pub struct ParamNamer {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl ParamNamer {
    pub fn new() -> Self {
        ParamNamer::default()
    }

    /// Next unused name derived from a qualified field name.
    pub fn next(&mut self, qualified: &str) -> String {
        let stem = placeholder_stem(qualified);
        loop {
            let count = self.counts.entry(stem.clone()).or_insert(0);
            let name = match *count {
                0 => stem.clone(),
                n => format!("{stem}_{n}"),
            };
            *count += 1;
            if self.used.insert(name.clone()) {
                return name;
            }
        }
    }
}

/// SQLite placeholders only take `[A-Za-z0-9_]` after the `:`.
fn placeholder_stem(qualified: &str) -> String {
    qualified
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Coerce a literal for a column with the given numeric kind.
pub fn coerce_value(field: &str, value: &str, numeric: Option<Numeric>) -> Result<Value> {
    let invalid = |expected: Numeric| Error::InvalidNumber {
        field: field.to_string(),
        expected: expected.as_str(),
        value: value.to_string(),
    };
    match numeric {
        None => Ok(Value::Text(value.to_string())),
        Some(Numeric::Int) => value
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid(Numeric::Int)),
        Some(Numeric::Float) => match value.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::Real(f)),
            _ => Err(invalid(Numeric::Float)),
        },
    }
}

/// Walks one condition tree; owns the placeholder counter for that walk.
pub struct Translator<'a> {
    tables: Vec<&'a Table>,
    namer: ParamNamer,
}

impl<'a> Translator<'a> {
    pub fn new(tables: Vec<&'a Table>) -> Self {
        Translator {
            tables,
            namer: ParamNamer::new(),
        }
    }

    pub fn translate(&mut self, expr: &Expr) -> Result<Predicate> {
        match expr {
            Expr::Condition(condition) => self.condition(condition),
            Expr::Not(child) => Ok(Predicate::Not(Box::new(self.translate(child)?))),
            Expr::And(children) => Ok(Predicate::And(self.translate_all(children)?)),
            Expr::Or(children) => Ok(Predicate::Or(self.translate_all(children)?)),
        }
    }

    fn translate_all(&mut self, children: &[Expr]) -> Result<Vec<Predicate>> {
        children.iter().map(|child| self.translate(child)).collect()
    }

    /// Build the predicate for one leaf.
    pub fn condition(&mut self, condition: &Condition) -> Result<Predicate> {
        let (table, column) = find_field(&self.tables, condition)?;
        tracing::debug!(
            "resolved {} to {}.{} ({})",
            condition.fullname(),
            table.name,
            column.name,
            column.ty
        );

        let leaf = Leaf {
            condition,
            column,
            field: Operand::Column(ColumnRef {
                table: table.name.clone(),
                column: column.name.clone(),
            }),
            qualified: format!("{}_{}", table.name, column.name),
            numeric: column.ty.numeric(),
        };

        match condition.operator {
            Operator::Lt => self.compare(leaf, CompareOp::Lt),
            Operator::Le => self.compare(leaf, CompareOp::Le),
            Operator::Gt => self.compare(leaf, CompareOp::Gt),
            Operator::Ge => self.compare(leaf, CompareOp::Ge),
            Operator::Ne => self.compare(leaf, CompareOp::Ne),
            Operator::StrictEq => self.compare(leaf, CompareOp::Eq),
            Operator::Eq if leaf.numeric.is_some() => self.compare(leaf, CompareOp::Eq),
            Operator::Eq => self.pattern(leaf),
            Operator::Between => self.between(leaf),
            Operator::BitAnd => self.bitwise(leaf, BitOp::And),
            Operator::BitOr => self.bitwise(leaf, BitOp::Or),
        }
    }

    fn compare(&mut self, leaf: Leaf<'_>, op: CompareOp) -> Result<Predicate> {
        let rhs = self.bind(&leaf, &leaf.condition.value)?;
        Ok(Predicate::Compare {
            lhs: leaf.lhs(),
            op,
            rhs,
        })
    }

    /// Case-insensitive `LIKE`, with `*` as the wildcard.
    fn pattern(&mut self, leaf: Leaf<'_>) -> Result<Predicate> {
        let pattern = self.bind(&leaf, &leaf.condition.value.replace('*', "%"))?;
        Ok(Predicate::Like {
            lhs: leaf.lhs(),
            pattern,
        })
    }

    fn between(&mut self, leaf: Leaf<'_>) -> Result<Predicate> {
        let high = leaf
            .condition
            .value2
            .as_deref()
            .ok_or_else(|| Error::MissingUpperBound(leaf.condition.fullname()))?;
        let low = self.bind(&leaf, &leaf.condition.value)?;
        let high = self.bind(&leaf, high)?;
        Ok(Predicate::Between {
            expr: leaf.lhs(),
            low,
            high,
        })
    }

    fn bitwise(&mut self, leaf: Leaf<'_>, op: BitOp) -> Result<Predicate> {
        if leaf.numeric != Some(Numeric::Int) {
            return Err(Error::UnsupportedOperator {
                field: leaf.condition.fullname(),
                op: leaf.condition.operator.to_string(),
                ty: leaf.column.ty.as_str(),
            });
        }
        let mask = self.bind(&leaf, &leaf.condition.value)?;
        Ok(Predicate::Bitwise {
            lhs: leaf.field,
            op,
            mask,
        })
    }

    /// Coerce and bind a value; text values are lower-cased in SQL.
    fn bind(&mut self, leaf: &Leaf<'_>, value: &str) -> Result<Operand> {
        let value = coerce_value(&leaf.condition.name, value, leaf.numeric)?;
        let param = Operand::Param(Param {
            name: self.namer.next(&leaf.qualified),
            value,
        });
        Ok(match leaf.numeric {
            Some(_) => param,
            None => param.lower(),
        })
    }
}

/// A leaf condition together with the column it resolved to.
struct Leaf<'c> {
    condition: &'c Condition,
    column: &'c Column,
    field: Operand,
    qualified: String,
    numeric: Option<Numeric>,
}

impl Leaf<'_> {
    /// The column operand, lower-cased for text comparison.
    fn lhs(self) -> Operand {
        match self.numeric {
            Some(_) => self.field,
            None => self.field.lower(),
        }
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
