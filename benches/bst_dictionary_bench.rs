//! Benchmark for BstDictionary vs standard BTreeMap.
//!
//! Keys are inserted in a scattered order so the tree stays shallow; the
//! `sorted` variants show the degenerate (list-shaped) worst case.

use bst_dictionary::BstDictionary;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;

/// Multiplier coprime with every benchmarked size, used to scatter keys.
const SCATTER: i64 = 7919;

fn scattered_keys(size: i64) -> impl Iterator<Item = i64> {
    (0..size).map(move |index| (index * SCATTER) % size)
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("BstDictionary", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut dictionary = BstDictionary::new();
                    for key in scattered_keys(size) {
                        dictionary.put(black_box(key), black_box(key * 2));
                    }
                    black_box(dictionary)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for key in scattered_keys(size) {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    for size in [100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("BstDictionary/sorted", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut dictionary = BstDictionary::new();
                    for key in 0..size {
                        dictionary.put(black_box(key), black_box(key * 2));
                    }
                    black_box(dictionary)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let dictionary: BstDictionary<i64, i64> =
            scattered_keys(size).map(|key| (key, key * 2)).collect();
        let standard_map: BTreeMap<i64, i64> =
            scattered_keys(size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("BstDictionary", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0;
                    for key in 0..size {
                        if let Some(&value) = dictionary.get(&black_box(key)) {
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
        let dictionary: BstDictionary<i64, i64> =
            scattered_keys(size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(
            BenchmarkId::new("BstDictionary", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || dictionary.clone(),
                    |mut dictionary| {
                        for key in 0..size {
                            black_box(dictionary.remove(&black_box(key)));
                        }
                        dictionary
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

// =============================================================================
// Traversal Benchmark
// =============================================================================

fn benchmark_traversal(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traversal");

    for size in [100, 1000, 10000] {
        let dictionary: BstDictionary<i64, i64> =
            scattered_keys(size).map(|key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("pre_order", size), &size, |bencher, _| {
            bencher.iter(|| black_box(dictionary.iter().sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("level_order", size), &size, |bencher, _| {
            bencher.iter(|| black_box(dictionary.level_order().map(|(key, _)| key).sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("display", size), &size, |bencher, _| {
            bencher.iter(|| black_box(dictionary.to_string()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_remove,
    benchmark_traversal
);

criterion_main!(benches);
