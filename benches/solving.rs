//! Performance comparison of the four search strategies on one maze

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazekit::maze::generate_maze;
use mazekit::solver::{Algorithm, solve};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures each strategy corner-to-corner on a shared 41x81 maze
fn bench_solve(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let Ok(grid) = generate_maze(41, 81, 0.1, &mut rng) else {
        return;
    };
    let cells = grid.path_cells();
    let (Some(&start), Some(&end)) = (cells.first(), cells.last()) else {
        return;
    };

    let mut group = c.benchmark_group("solve");
    for algorithm in Algorithm::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(algorithm.name()),
            &algorithm,
            |b, &algorithm| {
                b.iter(|| black_box(solve(algorithm, &grid, start, end)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
