//! Wall/path matrix shared by maze generation, search, and the snake agent
//!
//! A `Grid` is a fixed-size row-major matrix of [`Cell`] values backed by
//! `ndarray`. Mazes use the convention that the outer border is wall; the
//! snake arena is fully open with body segments written in as transient
//! walls. Solvers only ever read a grid.

use ndarray::Array2;

use crate::spatial::position::Position;

/// State of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Impassable to all traversal
    Wall,
    /// Traversable by search algorithms and the snake
    Path,
}

/// Rectangular wall/path matrix with checked access
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create a grid filled entirely with walls
    pub fn walls(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Wall),
        }
    }

    /// Create a fully open grid with every cell a path
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), Cell::Path),
        }
    }

    /// Create an open grid with the given cells marked as walls
    ///
    /// This is how the snake agent views its own body: an occupancy grid
    /// that is a different instance of the same abstraction a maze uses.
    /// Segments outside the grid are ignored.
    pub fn occupancy(rows: usize, cols: usize, segments: &[Position]) -> Self {
        let mut grid = Self::open(rows, cols);
        for segment in segments {
            grid.set(*segment, Cell::Wall);
        }
        grid
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total cell count
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether a position lies within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    /// Cell state at a position, `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get([pos.row, pos.col]).copied()
    }

    /// Whether a position is an in-bounds path cell
    pub fn is_path(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Path)
    }

    /// Overwrite the cell at a position; out-of-bounds writes are ignored
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if let Some(target) = self.cells.get_mut([pos.row, pos.col]) {
            *target = cell;
        }
    }

    /// In-bounds path neighbors of a position in fixed expansion order
    ///
    /// The fixed order (down, up, right, left) keeps search results and
    /// exploration counts deterministic for a given grid.
    pub fn path_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        const OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        OFFSETS.into_iter().filter_map(move |(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let neighbor = Position::new(row, col);
            self.is_path(neighbor).then_some(neighbor)
        })
    }

    /// All path cells in row-major order
    pub fn path_cells(&self) -> Vec<Position> {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), cell)| {
                (*cell == Cell::Path).then_some(Position::new(row, col))
            })
            .collect()
    }
}
