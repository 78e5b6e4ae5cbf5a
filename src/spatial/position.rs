//! Grid coordinates and movement directions
//!
//! Positions are (row, col) pairs; all arithmetic is checked so callers can
//! never step off the low edge silently. Directions model the four
//! axis-aligned unit moves shared by the solver and the snake agent.

/// A cell coordinate on a grid, row-major
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top
    pub row: usize,
    /// Column index, counted from the left
    pub col: usize,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position
    ///
    /// Admissible and consistent as a search heuristic on 4-directional
    /// unit-cost grids.
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// One of the four axis-aligned movement directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing row
    Up,
    /// Increasing row
    Down,
    /// Decreasing column
    Left,
    /// Increasing column
    Right,
}

impl Direction {
    /// All directions in fixed priority order
    ///
    /// This order breaks ties in the snake agent's direction ranking, so it
    /// must stay stable for reproducible behavior.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Row and column delta for a unit step in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The reversed direction
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Apply a unit step to a position
    ///
    /// Returns `None` when the step would leave the non-negative coordinate
    /// space; upper bounds are the grid's concern.
    pub const fn apply(self, pos: Position) -> Option<Position> {
        let (dr, dc) = self.offset();
        match (pos.row.checked_add_signed(dr), pos.col.checked_add_signed(dc)) {
            (Some(row), Some(col)) => Some(Position::new(row, col)),
            _ => None,
        }
    }

    /// Direction of the unit step from one position to an adjacent one
    ///
    /// Returns `None` when the positions are not exactly one unit step apart.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.apply(from) == Some(to))
    }
}
