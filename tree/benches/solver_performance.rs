//! Criterion benchmarks for tree construction and evaluation throughput

use bones_engine::{evaluate, SelectionRule, SolverConfig};
use bones_tree::{build_tree, solve_many};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn benchmark_build_tree(c: &mut Criterion) {
    c.bench_function("build_tree_heap_16", |b| {
        b.iter(|| build_tree(black_box(16)).map(|tree| tree.len()))
    });
}

fn benchmark_evaluate(c: &mut Criterion) {
    for (name, rule) in [
        ("evaluate_heap_16_always_max", SelectionRule::AlwaysMax),
        ("evaluate_heap_16_alternating", SelectionRule::Alternating),
    ] {
        let config = SolverConfig::with_rule(rule);
        c.bench_function(name, |b| {
            b.iter_batched(
                || build_tree(16),
                |tree| tree.and_then(|tree| evaluate(black_box(&tree), &config)),
                BatchSize::SmallInput,
            )
        });
    }
}

fn benchmark_solve_many(c: &mut Criterion) {
    let heaps: Vec<i64> = (1..=14).collect();
    let config = SolverConfig::default();
    c.bench_function("solve_many_heaps_1_to_14", |b| {
        b.iter(|| black_box(solve_many(black_box(&heaps), &config)))
    });
}

criterion_group!(
    benches,
    benchmark_build_tree,
    benchmark_evaluate,
    benchmark_solve_many,
);
criterion_main!(benches);
