//! Benchmark for RedBlackTree vs standard BTreeMap.
//!
//! Compares insertion, lookup, removal and ordered traversal of rbmap's
//! RedBlackTree against Rust's standard BTreeMap.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rbmap::tree::RedBlackTree;
use std::collections::BTreeMap;
use std::hint::black_box;

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut tree = RedBlackTree::new();
                    for index in 0..size {
                        tree.put(black_box(index), black_box(index * 2));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for index in 0..size {
                    map.insert(black_box(index), black_box(index * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let tree: RedBlackTree<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = tree.get(&black_box(key)) {
                            sum += value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let tree: RedBlackTree<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || tree.clone(),
                    |mut tree| {
                        for key in 0..size {
                            tree.remove(&black_box(key));
                        }
                        black_box(tree)
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in 0..size {
                        map.remove(&black_box(key));
                    }
                    black_box(map)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let tree: RedBlackTree<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();
        let standard_map: BTreeMap<i32, i32> = (0..size).map(|index| (index, index * 2)).collect();

        group.bench_with_input(BenchmarkId::new("RedBlackTree_iter", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i32 = tree.iter().map(|(_, value)| *value).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("RedBlackTree_cursor_prev", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    let mut cursor = tree.iterator();
                    cursor.end();
                    let mut sum = 0;
                    while cursor.prev() {
                        if let Some(value) = cursor.value() {
                            sum += *value;
                        }
                    }
                    black_box(sum)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap_iter", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i32 = standard_map.values().sum();
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_remove,
    benchmark_traversal
);

criterion_main!(benches);
