// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The sieve binary, isolated from the caller's config and environment.
pub fn sieve(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sieve");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env("HOME", dir)
        .env_remove("SIEVE_CONFIG")
        .env_remove("SIEVE_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Temp directory with `app.db` holding a `users` and an `orders` table.
pub fn init_db() -> TempDir {
    let temp = TempDir::new().unwrap();
    let conn = rusqlite::Connection::open(db_path(&temp)).unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
             id INTEGER PRIMARY KEY, name TEXT, age INTEGER, score REAL
         );
         CREATE TABLE orders (
             id INTEGER PRIMARY KEY, user_id INTEGER, total DECIMAL(10,2)
         );
         CREATE VIEW adults AS SELECT * FROM users WHERE age >= 18;
         INSERT INTO users (id, name, age, score) VALUES
             (1, 'Alice', 34, 9.5),
             (2, 'bob', 17, 4.0),
             (3, 'Carol', 52, 7.25);
         INSERT INTO orders (id, user_id, total) VALUES
             (10, 1, 25.00),
             (11, 3, 99.99);",
    )
    .unwrap();
    temp
}

pub fn db_path(temp: &TempDir) -> PathBuf {
    temp.path().join("app.db")
}

/// Write `sieve.toml` into the temp directory.
pub fn write_config(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("sieve.toml");
    std::fs::write(&path, content).unwrap();
    path
}
