//! Combination and permutation generation benchmark.
//!
//! Measures enumeration over distinct inputs and over inputs with many
//! repeated values, where most selections collapse during deduplication.

use combinix::combinatoric::{combinations, permutations};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const DISTINCT: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
const REPEATED: [u8; 10] = [0, 0, 0, 1, 1, 1, 2, 2, 2, 2];

fn benchmark_combinations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("combinations");

    for r in [2_i64, 5, 8] {
        group.bench_with_input(BenchmarkId::new("distinct", r), &r, |bencher, &r| {
            bencher.iter(|| combinations(black_box(&DISTINCT), r).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("repeated", r), &r, |bencher, &r| {
            bencher.iter(|| combinations(black_box(&REPEATED), r).unwrap());
        });
    }

    group.finish();
}

fn benchmark_permutations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("permutations");
    group.sample_size(20);

    for r in [2_i64, 4, 6] {
        group.bench_with_input(BenchmarkId::new("distinct", r), &r, |bencher, &r| {
            bencher.iter(|| permutations(black_box(&DISTINCT), r).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("repeated", r), &r, |bencher, &r| {
            bencher.iter(|| permutations(black_box(&REPEATED), r).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_combinations, benchmark_permutations);
criterion_main!(benches);
