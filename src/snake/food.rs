//! Random food placement with a decaying keep-away buffer
//!
//! Candidates are rejected while they sit on the body or inside a Manhattan
//! box around any segment. The box shrinks after repeated failures and is
//! abandoned entirely past a cutoff, so placement always terminates on any
//! arena with at least one free cell.

use rand::Rng;

use crate::io::configuration::{FOOD_BUFFER, FOOD_BUFFER_DECAY_AFTER, FOOD_UNBUFFERED_AFTER};
use crate::io::error::{EngineError, Result, computation_error};
use crate::spatial::{Grid, Position};

/// Choose a food cell not overlapping the body
///
/// `grid` is the occupancy view of `body`; segments are wall cells. The
/// buffer starts at [`FOOD_BUFFER`] cells, decays by one per attempt past
/// [`FOOD_BUFFER_DECAY_AFTER`] (floor 1), and is ignored after
/// [`FOOD_UNBUFFERED_AFTER`] attempts, at which point any free cell is
/// accepted.
///
/// # Errors
///
/// Returns [`EngineError::FoodExhausted`] when the arena has no free cell.
pub fn place_food<R: Rng>(body: &[Position], grid: &Grid, rng: &mut R) -> Result<Position> {
    let rows = grid.rows();
    let cols = grid.cols();
    if rows == 0 || cols == 0 {
        return Err(EngineError::FoodExhausted { rows, cols });
    }

    let mut buffer = FOOD_BUFFER;
    for attempt in 0..FOOD_UNBUFFERED_AFTER {
        if attempt > FOOD_BUFFER_DECAY_AFTER && buffer > 1 {
            buffer -= 1;
        }
        let candidate = if rows > buffer * 2 && cols > buffer * 2 {
            Position::new(
                rng.random_range(buffer..rows - buffer),
                rng.random_range(buffer..cols - buffer),
            )
        } else {
            Position::new(rng.random_range(0..rows), rng.random_range(0..cols))
        };
        if grid.is_path(candidate) && !within_buffer(body, candidate, buffer) {
            return Ok(candidate);
        }
    }

    // Buffer abandoned: any free cell qualifies
    let free = grid.path_cells();
    if free.is_empty() {
        return Err(EngineError::FoodExhausted { rows, cols });
    }
    let pick = rng.random_range(0..free.len());
    free.get(pick).copied().ok_or_else(|| {
        computation_error("food placement", &"free-cell index out of range")
    })
}

/// Whether any body segment lies within the Manhattan box around `candidate`
fn within_buffer(body: &[Position], candidate: Position, buffer: usize) -> bool {
    body.iter().any(|segment| {
        segment.row.abs_diff(candidate.row) <= buffer
            && segment.col.abs_diff(candidate.col) <= buffer
    })
}
