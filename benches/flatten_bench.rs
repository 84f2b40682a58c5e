//! Nested flattening benchmark.
//!
//! Measures `flatten`, `flatten_depth` and `flatten_deep` over balanced trees
//! of increasing depth. Every tree holds the same number of scalars per level
//! so the cost of descending is visible.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rudash::sequence::{Depth, Nested, flatten, flatten_deep, flatten_depth};
use std::hint::black_box;

const DEPTHS: [usize; 4] = [1, 2, 4, 6];
const BRANCHING: usize = 4;

/// Builds a tree where every sequence holds `BRANCHING` children and one scalar.
fn build_tree(depth: usize, counter: &mut u64) -> Vec<Nested<u64>> {
    let mut level = Vec::with_capacity(BRANCHING + 1);
    *counter += 1;
    level.push(Nested::Scalar(*counter));
    if depth > 0 {
        for _ in 0..BRANCHING {
            level.push(Nested::Sequence(build_tree(depth - 1, counter)));
        }
    }
    level
}

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("nested_flatten");

    for depth in DEPTHS {
        let tree = build_tree(depth, &mut 0);
        group.bench_with_input(BenchmarkId::new("flatten", depth), &tree, |bencher, tree| {
            bencher.iter(|| black_box(flatten(black_box(tree))));
        });
        group.bench_with_input(BenchmarkId::new("flatten_depth_2", depth), &tree, |bencher, tree| {
            bencher.iter(|| black_box(flatten_depth(black_box(tree), Depth::Levels(2))));
        });
        group.bench_with_input(BenchmarkId::new("flatten_deep", depth), &tree, |bencher, tree| {
            bencher.iter(|| black_box(flatten_deep(black_box(tree))));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_flatten);
criterion_main!(benches);
