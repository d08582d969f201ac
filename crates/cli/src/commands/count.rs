// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `sieve count`: count the rows of one table matching a condition tree.

use sieve_core::predicate::quote_ident;
use sieve_core::Expr;

use super::{read_expr, Context};
use crate::error::Result;

pub fn run(ctx: &Context, expr: &str, table: &str) -> Result<()> {
    let expr = read_expr(expr)?;
    println!("{}", count(ctx, &expr, table)?);
    Ok(())
}

/// Fields resolve against `table` alone, so the predicate only references it.
pub fn count(ctx: &Context, expr: &Expr, table: &str) -> Result<i64> {
    let conn = ctx.conn()?;
    let table = ctx.table(table)?;
    let sql = expr.filter(table)?.to_sql();

    let query = format!(
        "SELECT count(*) FROM {} WHERE {}",
        quote_ident(&table.name),
        sql.text
    );
    tracing::debug!("count query: {}", query);
    Ok(conn.query_row(&query, &*sql.named_params(), |row| row.get(0))?)
}

#[cfg(test)]
#[path = "count_tests.rs"]
mod tests;
