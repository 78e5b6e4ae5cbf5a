//! Randomized depth-first maze carving with loop injection
//!
//! Carving runs on a coordinate lattice where odd coordinates are rooms and
//! even coordinates are candidate walls between them. The carve pass yields
//! a perfect maze (a spanning tree of rooms); the loop pass then converts a
//! configurable share of separating walls back to paths, producing cycles
//! and therefore multiple solutions.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{EngineError, Result, invalid_parameter};
use crate::spatial::{Cell, Grid, Position};

/// Room offsets two steps away on the carving lattice
const ROOM_OFFSETS: [(isize, isize); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

/// Generate a maze with the given dimensions and loop density
///
/// `loop_factor` controls solution multiplicity: `floor(rows * cols *
/// loop_factor)` candidate walls are converted to paths after carving. Zero
/// yields a perfect maze with exactly one path between any two rooms. Odd
/// dimensions are recommended so the room lattice aligns with the border.
///
/// Identical RNG state reproduces an identical maze.
///
/// # Errors
///
/// Returns [`EngineError::DegenerateGrid`] when either dimension is below 3
/// (no interior to carve) and [`EngineError::InvalidParameter`] when
/// `loop_factor` is outside `[0, 1]` or a dimension exceeds
/// [`MAX_GRID_DIMENSION`].
pub fn generate_maze<R: Rng>(
    rows: usize,
    cols: usize,
    loop_factor: f64,
    rng: &mut R,
) -> Result<Grid> {
    if rows < 3 || cols < 3 {
        return Err(EngineError::DegenerateGrid { rows, cols });
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "dimensions",
            &format!("{rows}x{cols}"),
            &format!("dimensions may not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    if !(0.0..=1.0).contains(&loop_factor) {
        return Err(invalid_parameter(
            "loop_factor",
            &loop_factor,
            &"must lie within [0, 1]",
        ));
    }

    let mut grid = Grid::walls(rows, cols);
    carve(&mut grid, rng);

    let wall_budget = ((rows * cols) as f64 * loop_factor) as usize;
    inject_loops(&mut grid, wall_budget, rng);

    Ok(grid)
}

/// Carve a spanning tree of rooms with an explicit stack
///
/// Equivalent to the recursive backtracker but bounded in memory: the stack
/// holds at most one entry per room regardless of grid size. Each step picks
/// a random uncarved room two cells away, opens the wall between, and
/// descends; exhausted rooms are popped.
fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let seed = Position::new(1, 1);
    grid.set(seed, Cell::Path);

    let mut stack = vec![seed];
    while let Some(current) = stack.last().copied() {
        let candidates = uncarved_rooms(grid, current);
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng.random_range(0..candidates.len());
        if let Some((wall, room)) = candidates.get(pick).copied() {
            grid.set(wall, Cell::Path);
            grid.set(room, Cell::Path);
            stack.push(room);
        }
    }
}

/// Rooms two steps from `current` that are in bounds and still wall,
/// paired with the connecting wall cell between them
fn uncarved_rooms(grid: &Grid, current: Position) -> Vec<(Position, Position)> {
    ROOM_OFFSETS
        .into_iter()
        .filter_map(|(dr, dc)| {
            let room_row = current.row.checked_add_signed(dr)?;
            let room_col = current.col.checked_add_signed(dc)?;
            if room_row == 0 || room_row >= grid.rows() || room_col == 0 || room_col >= grid.cols()
            {
                return None;
            }
            let room = Position::new(room_row, room_col);
            if grid.get(room) != Some(Cell::Wall) {
                return None;
            }
            let wall_row = current.row.checked_add_signed(dr / 2)?;
            let wall_col = current.col.checked_add_signed(dc / 2)?;
            Some((Position::new(wall_row, wall_col), room))
        })
        .collect()
}

/// Convert up to `count` separating walls to paths, creating loops
///
/// A candidate is any interior lattice wall whose two flanking cells along
/// its axis are both paths. The flank test alone does not verify that
/// removal joins two distinct branches; the flanks may already be connected
/// through another route, in which case removal just shortens an existing
/// cycle. Either way the maze gains redundancy, so no stricter test is run.
fn inject_loops<R: Rng>(grid: &mut Grid, count: usize, rng: &mut R) {
    let mut candidates = separating_walls(grid);
    candidates.shuffle(rng);
    for wall in candidates.into_iter().take(count) {
        grid.set(wall, Cell::Path);
    }
}

/// Interior lattice walls whose flanking cells are both paths
fn separating_walls(grid: &Grid) -> Vec<Position> {
    let mut walls = Vec::new();
    for row in 1..grid.rows().saturating_sub(1) {
        for col in 1..grid.cols().saturating_sub(1) {
            let pos = Position::new(row, col);
            if grid.get(pos) != Some(Cell::Wall) {
                continue;
            }
            // Horizontal walls sit on odd rows, vertical walls on even rows
            let flanked = if row % 2 == 1 && col % 2 == 0 {
                grid.is_path(Position::new(row, col - 1))
                    && grid.is_path(Position::new(row, col + 1))
            } else if row % 2 == 0 && col % 2 == 1 {
                grid.is_path(Position::new(row - 1, col))
                    && grid.is_path(Position::new(row + 1, col))
            } else {
                false
            };
            if flanked {
                walls.push(pos);
            }
        }
    }
    walls
}
