//! Four interchangeable graph-search strategies with uniform instrumentation
//!
//! All strategies treat every path-to-path 4-adjacency as a unit-cost edge
//! and count exactly one exploration per node removed from the frontier, so
//! the counts are directly comparable across algorithms on one instance.

use std::collections::HashMap;
use std::fmt;

use crate::io::error::{EngineError, Result, computation_error};
use crate::solver::frontier::Frontier;
use crate::spatial::{CellSet, Grid, Position};

/// Search strategy selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search; shortest path in edge count
    Bfs,
    /// Depth-first search; exploratory, path not necessarily shortest
    Dfs,
    /// Cost-ordered search; path-equivalent to BFS on unit-cost grids but
    /// written generally for non-uniform costs
    Dijkstra,
    /// Cost-plus-heuristic search with Manhattan distance; optimal
    AStar,
}

impl Algorithm {
    /// All strategies in presentation order
    pub const ALL: [Self; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Lowercase strategy name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Outcome of one search run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Positions from start to end inclusive; empty when no path exists
    pub path: Vec<Position>,
    /// Nodes removed from the frontier during the run
    pub nodes_explored: usize,
}

impl SearchResult {
    /// Path length in edges
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether a path was found
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Find a path from `start` to `end` using the selected strategy
///
/// Frontier exhaustion without reaching `end` is a normal outcome: the
/// result carries an empty path and the true exploration count. The grid is
/// never mutated.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEndpoint`] when either endpoint is out of
/// bounds or a wall cell, and [`EngineError::Computation`] if predecessor
/// bookkeeping is found inconsistent during path reconstruction.
pub fn solve(
    algorithm: Algorithm,
    grid: &Grid,
    start: Position,
    end: Position,
) -> Result<SearchResult> {
    check_endpoint(grid, start, "start")?;
    check_endpoint(grid, end, "end")?;

    match algorithm {
        Algorithm::Bfs => uninformed(grid, start, end, Frontier::fifo()),
        Algorithm::Dfs => uninformed(grid, start, end, Frontier::lifo()),
        Algorithm::Dijkstra => cost_ordered(grid, start, end, false),
        Algorithm::AStar => cost_ordered(grid, start, end, true),
    }
}

fn check_endpoint(grid: &Grid, pos: Position, which: &'static str) -> Result<()> {
    if grid.is_path(pos) {
        Ok(())
    } else {
        Err(EngineError::InvalidEndpoint {
            which,
            row: pos.row,
            col: pos.col,
            grid_dimensions: (grid.rows(), grid.cols()),
        })
    }
}

/// BFS and DFS: visited-on-discovery, no cost bookkeeping
fn uninformed(
    grid: &Grid,
    start: Position,
    end: Position,
    mut frontier: Frontier,
) -> Result<SearchResult> {
    let mut visited = CellSet::for_grid(grid);
    let mut predecessor: HashMap<Position, Position> = HashMap::new();
    visited.insert(start);
    frontier.push(start, 0);

    let mut nodes_explored = 0;
    while let Some(current) = frontier.pop() {
        nodes_explored += 1;
        if current == end {
            let path = reconstruct(&predecessor, start, end, grid.cell_count())?;
            return Ok(SearchResult {
                path,
                nodes_explored,
            });
        }
        for neighbor in grid.path_neighbors(current) {
            if !visited.contains(neighbor) {
                visited.insert(neighbor);
                predecessor.insert(neighbor, current);
                frontier.push(neighbor, 0);
            }
        }
    }

    Ok(SearchResult {
        path: Vec::new(),
        nodes_explored,
    })
}

/// Dijkstra and A*: priority frontier with lazy deletion
///
/// Improved costs re-enqueue the node; stale heap entries are recognized by
/// the settled set and skipped without counting, so `nodes_explored` is one
/// per settled node. With the consistent Manhattan heuristic enabled this is
/// A* and the first settlement of `end` is optimal.
fn cost_ordered(
    grid: &Grid,
    start: Position,
    end: Position,
    use_heuristic: bool,
) -> Result<SearchResult> {
    let mut frontier = Frontier::priority();
    let mut settled = CellSet::for_grid(grid);
    let mut cost: HashMap<Position, usize> = HashMap::new();
    let mut predecessor: HashMap<Position, Position> = HashMap::new();

    cost.insert(start, 0);
    let initial = if use_heuristic {
        start.manhattan(end)
    } else {
        0
    };
    frontier.push(start, initial);

    let mut nodes_explored = 0;
    while let Some(current) = frontier.pop() {
        if settled.contains(current) {
            continue;
        }
        settled.insert(current);
        nodes_explored += 1;

        if current == end {
            let path = reconstruct(&predecessor, start, end, grid.cell_count())?;
            return Ok(SearchResult {
                path,
                nodes_explored,
            });
        }

        let current_cost = cost.get(&current).copied().unwrap_or(0);
        for neighbor in grid.path_neighbors(current) {
            let tentative = current_cost + 1;
            if tentative < cost.get(&neighbor).copied().unwrap_or(usize::MAX) {
                cost.insert(neighbor, tentative);
                predecessor.insert(neighbor, current);
                let priority = if use_heuristic {
                    tentative + neighbor.manhattan(end)
                } else {
                    tentative
                };
                frontier.push(neighbor, priority);
            }
        }
    }

    Ok(SearchResult {
        path: Vec::new(),
        nodes_explored,
    })
}

/// Walk the predecessor map end-to-start and reverse
///
/// Reconstruction length is bounded by the grid cell count to guard against
/// cycles in malformed predecessor data.
fn reconstruct(
    predecessor: &HashMap<Position, Position>,
    start: Position,
    end: Position,
    limit: usize,
) -> Result<Vec<Position>> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        match predecessor.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => {
                return Err(computation_error(
                    "path reconstruction",
                    &"predecessor link missing before reaching start",
                ));
            }
        }
        if path.len() > limit {
            return Err(computation_error(
                "path reconstruction",
                &"predecessor chain exceeds grid cell count",
            ));
        }
    }
    path.reverse();
    Ok(path)
}
