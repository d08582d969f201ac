// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Condition trees handed over by an expression parser.
//!
//! A tree is built from leaf [`Condition`]s (`parameter operator value`)
//! joined by [`Expr::And`], [`Expr::Or`] and [`Expr::Not`]. Trees
//! deserialize from the dictionary form parsers emit:
//!
//! ```text
//! {"and": [
//!   {"parameter": "age", "operator": ">", "value": "30"},
//!   {"not": [{"parameter": "user.name", "operator": "=", "value": "bob"}]},
//!   {"parameter": "score", "operator": "between", "value1": "1", "value2": "5"}
//! ]}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Comparison operators a leaf condition can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
    /// Loose equality (`=`): pattern match on text fields.
    Eq,
    /// Strict equality (`==`).
    StrictEq,
    /// Not equal (`!=`).
    Ne,
    /// Bitwise and test (`&`).
    BitAnd,
    /// Bitwise or test (`|`).
    BitOr,
    /// Inclusive range (`between`).
    Between,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "=",
            Operator::StrictEq => "==",
            Operator::Ne => "!=",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::Between => "between",
        }
    }

    /// Bitwise operators take integer masks, `~` values are complemented.
    pub fn is_bitwise(&self) -> bool {
        matches!(self, Operator::BitAnd | Operator::BitOr)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            "=" => Ok(Operator::Eq),
            "==" => Ok(Operator::StrictEq),
            "!=" => Ok(Operator::Ne),
            "&" => Ok(Operator::BitAnd),
            "|" => Ok(Operator::BitOr),
            other if other.eq_ignore_ascii_case("between") => Ok(Operator::Between),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

/// A single `parameter operator value` comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Table qualifier from a dotted parameter (`user` in `user.name`).
    pub base: Option<String>,
    /// Field name.
    pub name: String,
    pub operator: Operator,
    /// Primary value, or the lower bound of a range.
    pub value: String,
    /// Upper bound of a range.
    pub value2: Option<String>,
}

impl Condition {
    /// Create a condition from a parameter such as `age` or `user.age`.
    ///
    /// # Errors
    ///
    /// Fails when the parameter has more than one `.`, or when a bitwise
    /// condition carries a `~` value that is not an integer.
    pub fn new(parameter: &str, operator: Operator, value: impl Into<String>) -> Result<Self> {
        let (base, name) = split_parameter(parameter)?;
        let value = complement_value(operator, &name, value.into())?;
        Ok(Condition {
            base,
            name,
            operator,
            value,
            value2: None,
        })
    }

    /// Create a `parameter between low and high` range condition.
    pub fn between(
        parameter: &str,
        low: impl Into<String>,
        high: impl Into<String>,
    ) -> Result<Self> {
        let mut condition = Condition::new(parameter, Operator::Between, low)?;
        condition.value2 = Some(complement_value(
            Operator::Between,
            &condition.name,
            high.into(),
        )?);
        Ok(condition)
    }

    /// Full parameter name, including the qualifier if any.
    pub fn fullname(&self) -> String {
        match &self.base {
            Some(base) => format!("{base}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Input clause form: `age > 30`, `score between 1 and 5`.
impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operator, &self.value2) {
            (Operator::Between, Some(high)) => write!(
                f,
                "{} between {} and {high}",
                self.fullname(),
                self.value
            ),
            _ => write!(f, "{} {} {}", self.fullname(), self.operator, self.value),
        }
    }
}

fn split_parameter(parameter: &str) -> Result<(Option<String>, String)> {
    let parameter = parameter.trim();
    let invalid = || Error::InvalidParameter(parameter.to_string());
    match parameter.split_once('.') {
        None if parameter.is_empty() => Err(invalid()),
        None => Ok((None, parameter.to_string())),
        Some((base, name)) => {
            if base.is_empty() || name.is_empty() || name.contains('.') {
                return Err(invalid());
            }
            Ok((Some(base.to_string()), name.to_string()))
        }
    }
}

/// Strip `~` from a value; under a bitwise operator `~n` becomes `-n - 1`.
fn complement_value(operator: Operator, name: &str, value: String) -> Result<String> {
    if !value.contains('~') {
        return Ok(value);
    }
    let stripped = value.replace('~', "");
    if !operator.is_bitwise() {
        return Ok(stripped);
    }
    let mask: i64 = stripped
        .trim()
        .parse()
        .map_err(|_| Error::InvalidNumber {
            field: name.to_string(),
            expected: "int",
            value: value.clone(),
        })?;
    Ok((!mask).to_string())
}

/// A boolean condition tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NodeRecord", into = "ExprRepr")]
pub enum Expr {
    Condition(Condition),
    Not(Box<Expr>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
}

impl Expr {
    pub fn and(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::And(children.into_iter().collect())
    }

    pub fn or(children: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Or(children.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Expr) -> Self {
        Expr::Not(Box::new(child))
    }

    /// Sorted, de-duplicated full names of every leaf parameter.
    pub fn params(&self) -> Vec<String> {
        let mut params = Vec::new();
        self.collect_params(&mut params);
        params.sort();
        params.dedup();
        params
    }

    fn collect_params(&self, out: &mut Vec<String>) {
        match self {
            Expr::Condition(condition) => out.push(condition.fullname()),
            Expr::Not(child) => child.collect_params(out),
            Expr::And(children) | Expr::Or(children) => {
                for child in children {
                    child.collect_params(out);
                }
            }
        }
    }

    /// Logic operator name of a combinator node.
    pub fn logicop(&self) -> Option<&'static str> {
        match self {
            Expr::Condition(_) => None,
            Expr::Not(_) => Some("not"),
            Expr::And(_) => Some("and"),
            Expr::Or(_) => Some("or"),
        }
    }
}

impl From<Condition> for Expr {
    fn from(condition: Condition) -> Self {
        Expr::Condition(condition)
    }
}

/// Nested form: `and_(age > 30, not_(name = bob))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: &[Expr] = match self {
            Expr::Condition(condition) => return write!(f, "{condition}"),
            Expr::Not(child) => std::slice::from_ref(child.as_ref()),
            Expr::And(children) | Expr::Or(children) => children,
        };
        write!(f, "{}_(", self.logicop().unwrap_or_default())?;
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{child}")?;
        }
        f.write_str(")")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dictionary form
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
enum ExprRepr {
    And { and: Vec<Expr> },
    Or { or: Vec<Expr> },
    Not { not: Vec<Expr> },
    Condition(ConditionRepr),
}

/// A leaf as emitted by the parser.
#[derive(Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
struct ConditionRepr {
    parameter: String,
    operator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value2: Option<String>,
}

/// One node read with every key optional. The key present picks the kind,
/// so errors from nested leaves surface with their own message.
#[derive(Deserialize)]
struct NodeRecord {
    #[serde(default)]
    and: Option<Vec<Expr>>,
    #[serde(default)]
    or: Option<Vec<Expr>>,
    #[serde(default)]
    not: Option<Vec<Expr>>,
    #[serde(default)]
    parameter: Option<String>,
    #[serde(default)]
    operator: Option<String>,
    #[serde(default, deserialize_with = "literal")]
    value: Option<String>,
    #[serde(default, deserialize_with = "literal")]
    value1: Option<String>,
    #[serde(default, deserialize_with = "literal")]
    value2: Option<String>,
}

/// Accept `"30"`, `30` or `true` for a literal value.
fn literal<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Literal {
        Text(String),
        Number(serde_json::Number),
        Bool(bool),
    }

    Ok(Option::<Literal>::deserialize(deserializer)?.map(|lit| match lit {
        Literal::Text(s) => s,
        Literal::Number(n) => n.to_string(),
        Literal::Bool(b) => b.to_string(),
    }))
}

impl TryFrom<NodeRecord> for Expr {
    type Error = Error;

    fn try_from(node: NodeRecord) -> Result<Self> {
        let NodeRecord {
            and,
            or,
            not,
            parameter,
            operator,
            value,
            value1,
            value2,
        } = node;
        match (and, or, not, parameter) {
            (Some(and), None, None, None) => Ok(Expr::And(and)),
            (None, Some(or), None, None) => Ok(Expr::Or(or)),
            (None, None, Some(not), None) => {
                let mut children = not.into_iter();
                match (children.next(), children.next()) {
                    (Some(child), None) => Ok(Expr::not(child)),
                    _ => Err(Error::InvalidNode(
                        "not takes exactly one condition".to_string(),
                    )),
                }
            }
            (None, None, None, Some(parameter)) => {
                let operator = operator
                    .ok_or_else(|| Error::InvalidNode(format!("{parameter} has no operator")))?;
                let leaf = ConditionRepr {
                    parameter,
                    operator,
                    value,
                    value1,
                    value2,
                };
                Condition::try_from(leaf).map(Expr::Condition)
            }
            (None, None, None, None) => Err(Error::InvalidNode(
                "expected one of and, or, not or parameter".to_string(),
            )),
            _ => Err(Error::InvalidNode(
                "a node takes only one of and, or, not or parameter".to_string(),
            )),
        }
    }
}

impl TryFrom<ConditionRepr> for Condition {
    type Error = Error;

    fn try_from(repr: ConditionRepr) -> Result<Self> {
        let operator: Operator = repr.operator.parse()?;
        if operator == Operator::Between {
            let low = repr
                .value1
                .or(repr.value)
                .ok_or_else(|| Error::MissingValue(repr.parameter.clone()))?;
            let high = repr
                .value2
                .ok_or_else(|| Error::MissingUpperBound(repr.parameter.clone()))?;
            return Condition::between(&repr.parameter, low, high);
        }
        let value = repr
            .value
            .ok_or_else(|| Error::MissingValue(repr.parameter.clone()))?;
        Condition::new(&repr.parameter, operator, value)
    }
}

impl From<Expr> for ExprRepr {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Condition(condition) => ExprRepr::Condition(condition.into()),
            Expr::Not(child) => ExprRepr::Not { not: vec![*child] },
            Expr::And(and) => ExprRepr::And { and },
            Expr::Or(or) => ExprRepr::Or { or },
        }
    }
}

impl From<Condition> for ConditionRepr {
    fn from(condition: Condition) -> Self {
        let parameter = condition.fullname();
        let operator = condition.operator.as_str().to_string();
        match condition.value2 {
            Some(high) => ConditionRepr {
                parameter,
                operator,
                value: None,
                value1: Some(condition.value),
                value2: Some(high),
            },
            None => ConditionRepr {
                parameter,
                operator,
                value: Some(condition.value),
                value1: None,
                value2: None,
            },
        }
    }
}

#[cfg(feature = "schemars")]
impl schemars::JsonSchema for Expr {
    fn schema_name() -> String {
        "Expr".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <ExprRepr as schemars::JsonSchema>::json_schema(gen)
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
