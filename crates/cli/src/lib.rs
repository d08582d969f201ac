// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sieve_cli - command-line front end for sieve-core.
//!
//! Reads a condition tree as JSON, resolves its fields against the tables
//! of a SQLite database and/or a `sieve.toml` config, and prints or runs
//! the resulting parameterized predicate.
//!
//! ```rust,ignore
//! use clap::Parser;
//! use sieve_cli::Cli;
//!
//! let cli = Cli::parse_from(["sieve", "--db", "app.db", "tables"]);
//! sieve_cli::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod env;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use commands::Context;

/// Install the stderr subscriber, filtered by `SIEVE_LOG` (default `warn`).
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(env::vars::SIEVE_LOG)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        db,
        command,
        ..
    } = cli;
    let open = || Context::open(config.as_deref(), db.as_deref());

    match command {
        Command::Sql {
            expr,
            table,
            output,
        } => commands::sql::run(&open()?, &expr, &table, output),
        Command::Count { expr, table } => commands::count::run(&open()?, &expr, &table),
        Command::Tables { output } => commands::tables::run(&open()?, output),
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
