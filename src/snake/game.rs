//! Snake game state and tick outcomes
//!
//! The state is plain owned data threaded through by the caller; each tick
//! consumes a reference and returns a fresh state, so no mutable state is
//! shared across invocations.

use crate::io::configuration::{
    ARENA_COLS, ARENA_ROWS, INITIAL_FOOD, INITIAL_HEAD,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Direction, Grid, Position};

/// Complete snake game state for one tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeState {
    /// Body segments, head first, tail last
    pub body: Vec<Position>,
    /// Direction taken on the previous tick
    pub heading: Direction,
    /// Current food cell; never overlaps the body
    pub food: Position,
    /// Arena height
    pub rows: usize,
    /// Arena width
    pub cols: usize,
}

impl SnakeState {
    /// Initial state on the default arena: a single segment heading right
    pub fn new() -> Self {
        Self {
            body: vec![Position::new(INITIAL_HEAD.0, INITIAL_HEAD.1)],
            heading: Direction::Right,
            food: Position::new(INITIAL_FOOD.0, INITIAL_FOOD.1),
            rows: ARENA_ROWS,
            cols: ARENA_COLS,
        }
    }

    /// Build a state from caller-supplied parts, validating the body
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidParameter`] when the body is
    /// empty, leaves the arena, repeats a cell, breaks contiguity, or
    /// overlaps the food.
    pub fn from_parts(
        body: Vec<Position>,
        heading: Direction,
        food: Position,
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        if body.is_empty() {
            return Err(invalid_parameter("body", &"[]", &"body must be non-empty"));
        }
        for (index, segment) in body.iter().enumerate() {
            if segment.row >= rows || segment.col >= cols {
                return Err(invalid_parameter(
                    "body",
                    &format!("segment {index} at ({}, {})", segment.row, segment.col),
                    &"segment lies outside the arena",
                ));
            }
        }
        for (index, segment) in body.iter().enumerate() {
            if body.iter().skip(index + 1).any(|other| other == segment) {
                return Err(invalid_parameter(
                    "body",
                    &format!("({}, {})", segment.row, segment.col),
                    &"body cells must be distinct",
                ));
            }
        }
        for (a, b) in body.iter().zip(body.iter().skip(1)) {
            if a.manhattan(*b) != 1 {
                return Err(invalid_parameter(
                    "body",
                    &format!("({}, {}) -> ({}, {})", a.row, a.col, b.row, b.col),
                    &"adjacent segments must differ by one unit step",
                ));
            }
        }
        if body.contains(&food) {
            return Err(invalid_parameter(
                "food",
                &format!("({}, {})", food.row, food.col),
                &"food may not overlap the body",
            ));
        }
        Ok(Self {
            body,
            heading,
            food,
            rows,
            cols,
        })
    }

    /// Head position
    pub fn head(&self) -> Option<Position> {
        self.body.first().copied()
    }

    /// Tail position
    pub fn tail(&self) -> Option<Position> {
        self.body.last().copied()
    }

    /// Current score: segments beyond the initial single one
    pub fn score(&self) -> usize {
        self.body.len().saturating_sub(1)
    }

    /// Occupancy grid with every body segment marked as wall
    pub fn occupancy(&self) -> Grid {
        Grid::occupancy(self.rows, self.cols, &self.body)
    }
}

impl Default for SnakeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of advancing the game by one tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    /// State after the tick; unchanged from the input when the tick ended
    /// the game
    pub state: SnakeState,
    /// Whether this tick reached the terminal state
    pub game_over: bool,
    /// Score at the end of the tick
    pub score: usize,
}
