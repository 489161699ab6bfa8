//! ExtendedSet construction and combinator benchmarks.
//!
//! Compares `from_elements` against `fold + insert` (baseline), then measures
//! `map`, `reduce_from` and `join`.
//!
//! Pre-generated Vec is reused via clone() in setup to keep the input identical
//! across iterations.

use combinars::collections::ExtendedSet;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [i32; 4] = [100, 1000, 10000, 100000];

/// Half of the generated elements are duplicates.
fn generate_vec(size: i32) -> Vec<i32> {
    (0..size).map(|value| value / 2).collect()
}

fn batch_size_for(size: i32) -> BatchSize {
    if size < 1000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_construction");

    for size in SIZES {
        let base_vec = generate_vec(size);
        group.bench_with_input(
            BenchmarkId::new("from_elements", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| black_box(ExtendedSet::from_elements(black_box(elements))),
                    batch_size_for(size),
                );
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fold_insert", size),
            &size,
            |bencher, &size| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| {
                        black_box(elements.into_iter().fold(ExtendedSet::new(), |mut set, element| {
                            set.insert(element);
                            set
                        }))
                    },
                    batch_size_for(size),
                );
            },
        );
    }

    group.finish();
}

fn benchmark_map_reduce_join(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_combinators");

    for size in SIZES {
        let set = ExtendedSet::from_elements(generate_vec(size));
        group.bench_with_input(BenchmarkId::new("map", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.map(|element, _, _| element / 3).len()));
        });
        group.bench_with_input(BenchmarkId::new("reduce_from", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.reduce_from(0_i64, |sum, element, _, _| sum + i64::from(*element))));
        });
        group.bench_with_input(BenchmarkId::new("join", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.join(",").len()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_construction, benchmark_map_reduce_join);

criterion_main!(benches);
