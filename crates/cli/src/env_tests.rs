// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::SIEVE_LOG, "SIEVE_LOG");
    assert_eq!(vars::SIEVE_CONFIG, "SIEVE_CONFIG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_config_path() {
    std::env::set_var("SIEVE_CONFIG", "/tmp/sieve-test.toml");
    assert_eq!(config_path(), Some(PathBuf::from("/tmp/sieve-test.toml")));

    std::env::set_var("SIEVE_CONFIG", "");
    assert_eq!(config_path(), None);

    std::env::remove_var("SIEVE_CONFIG");
    assert_eq!(config_path(), None);
}
