//! Side-by-side runs of all four strategies on one instance
//!
//! Exploration counts are only meaningful relative to each other, so the
//! comparison runs every strategy against the same grid and endpoints and
//! tabulates path length next to nodes explored. DFS expanding far more
//! nodes than BFS on the same maze is the expected, interesting outcome.

use crate::io::error::Result;
use crate::solver::{Algorithm, solve};
use crate::spatial::{Grid, Position};

/// One strategy's outcome on a shared instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmReport {
    /// Strategy that produced this row
    pub algorithm: Algorithm,
    /// Path length in edges; zero when no path was found
    pub path_steps: usize,
    /// Whether a path was found
    pub found: bool,
    /// Nodes removed from the frontier
    pub nodes_explored: usize,
}

/// Run all four strategies on the same grid and endpoints
///
/// # Errors
///
/// Propagates [`crate::EngineError::InvalidEndpoint`] from the underlying
/// solver; a missing path is reported per row, not as an error.
pub fn compare_algorithms(
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<Vec<AlgorithmReport>> {
    let mut reports = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let result = solve(algorithm, grid, start, end)?;
        reports.push(AlgorithmReport {
            algorithm,
            path_steps: result.steps(),
            found: result.found(),
            nodes_explored: result.nodes_explored,
        });
    }
    Ok(reports)
}
