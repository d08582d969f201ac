// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

fn expected_fg(code: u8) -> String {
    format!("\x1b[38;5;{}m", code)
}

// =============================================================================
// Basic color functions
// =============================================================================

#[test]
fn test_color_wrappers() {
    assert_eq!(header("Examples:"), format!("{}Examples:\x1b[0m", expected_fg(74)));
    assert_eq!(literal("sql"), format!("{}sql\x1b[0m", expected_fg(250)));
    assert_eq!(context("<EXPR>"), format!("{}<EXPR>\x1b[0m", expected_fg(245)));
}

// =============================================================================
// Description detection
// =============================================================================

#[parameterized(
    two_spaces = { "sieve tables  List tables", Some(12) },
    many_spaces = { "sieve schema expr      Print", Some(17) },
    single_spaces = { "sieve sql - reads stdin", None },
    trailing = { "sieve tables  ", None },
    empty = { "", None },
)]
fn test_find_description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}

// =============================================================================
// Command colorization
// =============================================================================

#[test]
fn test_colorize_command_quoted_json_is_context() {
    let cmd = r#"sieve sql '{"parameter": "age", "operator": ">", "value": 30}'"#;
    let out = colorize_command(cmd);

    assert_eq!(strip_ansi(&out), cmd);
    assert!(out.contains(&literal("sieve")));
    assert!(out.contains(&literal("sql")));
    assert!(out.contains(&context(
        r#"'{"parameter": "age", "operator": ">", "value": 30}'"#
    )));
}

#[test]
fn test_colorize_command_placeholder_is_context() {
    let out = colorize_command("sieve count <EXPR> --table users");
    assert_eq!(strip_ansi(&out), "sieve count <EXPR> --table users");
    assert!(out.contains(&context("<EXPR>")));
    assert!(out.contains(&literal("--table")));
    assert!(out.contains(&literal("users")));
}

#[test]
fn test_colorize_command_unterminated_quote() {
    let out = colorize_command("sieve sql '{");
    assert_eq!(strip_ansi(&out), "sieve sql '{");
    assert!(out.contains(&context("'{")));
}

// =============================================================================
// Examples blocks
// =============================================================================

#[test]
fn test_colorize_examples_preserves_text() {
    let text = "\
Examples:
  sieve tables             List known tables
  sieve schema expr        Print the tree schema

Notes:
  plain line";
    let out = colorize_examples(text);

    assert_eq!(strip_ansi(&out), text);
    assert!(out.contains(&header("Examples:")));
    assert!(out.contains(&header("Notes:")));
    assert!(out.contains(&literal("tables")));
}
