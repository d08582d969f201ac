// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sieve_core::Table;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::Result;

pub fn run(ctx: &Context, output: OutputFormat) -> Result<()> {
    let tables: Vec<&Table> = ctx.catalog.tables().collect();
    let out = render(&tables, output)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

/// Tables in resolution order, each column with its type.
pub fn render(tables: &[&Table], output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tables)?),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for table in tables {
                lines.push(table.name.clone());
                let width = table.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
                for column in &table.columns {
                    lines.push(format!("  {:<width$}  {}", column.name, column.ty));
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tests;
