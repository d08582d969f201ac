// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used by help output
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/descriptions: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

const RESET: &str = "\x1b[0m";

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, RESET)
}

/// Apply context color (placeholders, JSON arguments) to text.
pub fn context(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, RESET)
}

/// Colorize an examples help block.
///
/// ```text
/// Examples:
///   sieve sql '{"parameter":"age",...}'    Render a predicate
/// ```
///
/// Lines ending with `:` become headers; for example lines the command
/// (everything before the first run of two spaces) is colorized with
/// [`colorize_command`].
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }
    colorize_examples(text)
}

fn colorize_examples(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(cmd_end) = find_description_start(trimmed) {
            result.push_str(indent);
            result.push_str(&colorize_command(&trimmed[..cmd_end]));
            result.push_str(&trimmed[cmd_end..]);
            continue;
        }

        result.push_str(line);
    }

    result
}

/// Colorize a command string: words as literals, quoted JSON and
/// `<placeholders>` as context.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut chars = cmd.char_indices();
    let mut word_start = 0;

    while let Some((i, c)) = chars.next() {
        let close = match c {
            '\'' => '\'',
            '<' => '>',
            ' ' => {
                if i > word_start {
                    result.push_str(&literal(&cmd[word_start..i]));
                }
                result.push(' ');
                word_start = i + 1;
                continue;
            }
            _ => continue,
        };

        if i > word_start {
            result.push_str(&literal(&cmd[word_start..i]));
        }
        let mut end = cmd.len();
        for (j, ch) in chars.by_ref() {
            if ch == close {
                end = j + ch.len_utf8();
                break;
            }
        }
        result.push_str(&context(&cmd[i..end]));
        word_start = end;
    }

    if word_start < cmd.len() {
        result.push_str(&literal(&cmd[word_start..]));
    }
    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut space_start = None;

    for (i, &b) in bytes.iter().enumerate() {
        match (b == b' ', space_start) {
            (true, None) => space_start = Some(i),
            (false, Some(start)) if i - start >= 2 => return Some(start),
            (false, Some(_)) => space_start = None,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
