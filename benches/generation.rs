//! Performance measurement for maze carving at increasing grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazekit::maze::generate_maze;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures carve plus loop-injection cost as the lattice grows
fn bench_generate_maze(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_maze");

    for size in &[21usize, 41, 81, 161] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(12345);
                black_box(generate_maze(size, size, 0.1, &mut rng))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_maze);
criterion_main!(benches);
