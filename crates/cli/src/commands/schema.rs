// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the condition tree input and
//! the `sql` JSON output.

use crate::cli::SchemaCommand;
use crate::commands::sql::SqlOutputJson;
use crate::error::Result;
use schemars::schema::RootSchema;
use schemars::schema_for;
use sieve_core::Expr;

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Expr => schema_for!(Expr),
        SchemaCommand::Sql => schema_for!(SqlOutputJson),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
