// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_filter}
  {sql}       Render a condition tree as a WHERE fragment
  {count}     Count the rows of a table matching a condition tree

{header_catalog}
  {tables}    List the tables conditions resolve against
  {schema}    Output JSON Schema for the tree and sql output
",
        header_filter = colors::header("Filtering:"),
        header_catalog = colors::header("Catalog:"),
        sql = colors::literal("sql"),
        count = colors::literal("count"),
        tables = colors::literal("tables"),
        schema = colors::literal("schema"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  sieve --db app.db tables                    List tables and column types
  sieve --db app.db sql '{\"parameter\":\"age\",\"operator\":\">\",\"value\":30}'  Render a predicate
  cat tree.json | sieve --db app.db count - --table users  Count matching rows",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
