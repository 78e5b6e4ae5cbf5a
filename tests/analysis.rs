//! Validates the multi-strategy comparison rows

use mazekit::analysis::compare_algorithms;
use mazekit::maze::generate_maze;
use mazekit::solver::Algorithm;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_comparison_covers_all_strategies_in_order() -> mazekit::Result<()> {
    let mut rng = StdRng::seed_from_u64(23);
    let grid = generate_maze(21, 21, 0.1, &mut rng)?;
    let cells = grid.path_cells();
    let (Some(&start), Some(&end)) = (cells.first(), cells.last()) else {
        unreachable!("Generated maze must contain path cells");
    };

    let reports = compare_algorithms(&grid, start, end)?;
    let order: Vec<Algorithm> = reports.iter().map(|report| report.algorithm).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
    for report in &reports {
        assert!(report.found, "{} must solve a connected maze", report.algorithm);
        assert!(report.nodes_explored >= 1);
    }
    Ok(())
}

#[test]
fn test_optimal_rows_agree_on_path_length() -> mazekit::Result<()> {
    let mut rng = StdRng::seed_from_u64(31);
    let grid = generate_maze(33, 33, 0.08, &mut rng)?;
    let cells = grid.path_cells();
    let (Some(&start), Some(&end)) = (cells.first(), cells.last()) else {
        unreachable!("Generated maze must contain path cells");
    };

    let reports = compare_algorithms(&grid, start, end)?;
    let steps_of = |algorithm: Algorithm| {
        reports
            .iter()
            .find(|report| report.algorithm == algorithm)
            .map(|report| report.path_steps)
    };

    let bfs = steps_of(Algorithm::Bfs);
    assert!(bfs.is_some());
    assert_eq!(steps_of(Algorithm::Dijkstra), bfs);
    assert_eq!(steps_of(Algorithm::AStar), bfs);
    Ok(())
}
