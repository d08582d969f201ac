// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "sieve")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Translate boolean filter trees into SQLite predicates")]
#[command(
    long_about = "Translate boolean filter trees into SQLite predicates.\n\n\
    Each condition resolves against the first table that has its field; values are \
    coerced to the column's numeric type or compared as lower-cased text."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Config file (default: ./sieve.toml, then the user config directory)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// SQLite database whose tables conditions resolve against
    #[arg(long, global = true, value_name = "path")]
    pub db: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Filtering
    // ─────────────────────────────────────────────────────────────────────────
    /// Render a condition tree as a WHERE fragment with bound parameters
    #[command(after_help = colors::examples("\
Examples:
  sieve --db app.db sql '{\"parameter\":\"age\",\"operator\":\">\",\"value\":30}'  Compare a column
  sieve --db app.db sql - < tree.json            Read the tree from stdin
  sieve --db app.db sql - -t orders -o json      Restrict tables, JSON output

Condition Trees:
  Leaf: {\"parameter\": \"[table.]field\", \"operator\": \"<op>\", \"value\": ...}
  Range: {\"parameter\": \"score\", \"operator\": \"between\", \"value1\": 1, \"value2\": 5}
  Combinators: {\"and\": [...]}, {\"or\": [...]}, {\"not\": [tree]}
  Operators: <, <=, >, >=, = (pattern), ==, !=, &, |, between"))]
    Sql {
        /// Condition tree as JSON, or '-' to read it from stdin
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Resolve fields against these tables only, in order
        #[arg(long, short, value_name = "TABLE")]
        table: Vec<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Count the rows of a table matching a condition tree
    #[command(after_help = colors::examples("\
Examples:
  sieve --db app.db count '{\"parameter\":\"name\",\"operator\":\"=\",\"value\":\"a*\"}' -t users
  cat tree.json | sieve --db app.db count - -t users  Count from stdin"))]
    Count {
        /// Condition tree as JSON, or '-' to read it from stdin
        #[arg(value_name = "EXPR")]
        expr: String,

        /// Table to count rows of
        #[arg(long, short, value_name = "TABLE")]
        table: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────
    /// List the tables conditions resolve against, with column types
    Tables {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for the condition tree or the sql JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum SchemaCommand {
    /// Output JSON Schema for condition trees
    Expr,
    /// Output JSON Schema for 'sieve sql -o json' output
    Sql,
}

#[cfg(test)]
#[path = "../cli_tests.rs"]
mod tests;
