// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for condition tree parsing and translation.

#![allow(clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sieve_core::{Catalog, Expr, Table};

const LEAF: &str = r#"{"parameter": "age", "operator": ">", "value": 30}"#;
const NESTED: &str = r#"{"and": [
    {"parameter": "age", "operator": ">=", "value": 18},
    {"or": [
        {"parameter": "name", "operator": "=", "value": "a*"},
        {"parameter": "users.name", "operator": "==", "value": "bob"}
    ]},
    {"not": [{"parameter": "score", "operator": "between", "value1": 1, "value2": 5}]},
    {"parameter": "flags", "operator": "&", "value": "~4"}
]}"#;

fn catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..8 {
        catalog.push(Table::from_declared(
            format!("filler_{i}"),
            [("id", "INTEGER"), ("label", "TEXT")],
        ));
    }
    catalog.push(Table::from_declared(
        "users",
        [
            ("id", "INTEGER"),
            ("name", "TEXT"),
            ("age", "INTEGER"),
            ("score", "REAL"),
            ("flags", "INTEGER"),
        ],
    ));
    catalog
}

/// An OR of `n` leaves on the same field.
fn wide(n: usize) -> Expr {
    Expr::or((0..n).map(|i| {
        sieve_core::Condition::new("age", sieve_core::Operator::Ne, i.to_string())
            .expect("valid condition")
            .into()
    }))
}

fn tree_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_parsing");
    for (name, input) in [("leaf", LEAF), ("nested", NESTED)] {
        group.bench_with_input(BenchmarkId::new("from_json", name), input, |b, i| {
            b.iter(|| serde_json::from_str::<Expr>(i))
        });
    }
    group.finish();
}

fn translation(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation");
    let catalog = catalog();

    let nested: Expr = serde_json::from_str(NESTED).expect("valid tree");
    group.bench_function("nested_filter", |b| b.iter(|| nested.filter(&catalog)));
    group.bench_function("nested_filter_to_sql", |b| {
        b.iter(|| nested.filter(&catalog).map(|p| p.to_sql()))
    });

    for n in [10, 100] {
        let expr = wide(n);
        group.bench_with_input(BenchmarkId::new("repeated_field", n), &expr, |b, e| {
            b.iter(|| e.filter(&catalog))
        });
    }
    group.finish();
}

criterion_group!(benches, tree_parsing, translation);
criterion_main!(benches);
