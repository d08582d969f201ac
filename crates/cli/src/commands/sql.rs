// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve sql`: render a condition tree as a parameterized WHERE fragment.

use schemars::JsonSchema;
use serde::Serialize;
use sieve_core::{Sql, Value};

use super::{read_expr, Context};
use crate::cli::OutputFormat;
use crate::error::Result;

/// JSON output of `sieve sql -o json`.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SqlOutputJson {
    /// WHERE fragment with `:name` placeholders.
    pub sql: String,
    /// The fragment with literals in place of placeholders, for reading.
    pub inline: String,
    /// Bound values in placeholder order.
    pub params: Vec<ParamJson>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct ParamJson {
    /// Placeholder name without the leading `:`.
    pub name: String,
    pub value: serde_json::Value,
}

impl From<&Sql> for SqlOutputJson {
    fn from(sql: &Sql) -> Self {
        SqlOutputJson {
            sql: sql.text.clone(),
            inline: sql.inline(),
            params: sql
                .bindings
                .iter()
                .map(|(name, value)| ParamJson {
                    name: name.trim_start_matches(':').to_string(),
                    value: match value {
                        Value::Integer(i) => (*i).into(),
                        Value::Real(f) => (*f).into(),
                        Value::Text(s) => s.as_str().into(),
                    },
                })
                .collect(),
        }
    }
}

pub fn run(ctx: &Context, expr: &str, tables: &[String], output: OutputFormat) -> Result<()> {
    let expr = read_expr(expr)?;
    let sql = ctx.filter(&expr, tables)?.to_sql();
    println!("{}", render(&sql, output)?);
    Ok(())
}

/// Format rendered SQL for output.
pub fn render(sql: &Sql, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SqlOutputJson::from(sql))?),
        OutputFormat::Text => {
            let mut out = sql.text.clone();
            for (name, value) in &sql.bindings {
                out.push_str(&format!("\n  {name} = {value}"));
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
#[path = "sql_tests.rs"]
mod tests;
