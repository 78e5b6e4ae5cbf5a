//! Bitset over grid cells for visited and reachability tracking
//!
//! Provides O(1) membership testing without hashing, sized to one bit per
//! cell. Every search in the crate (solver frontiers, tail reachability,
//! flood fill) tracks visited cells through this type.

use bitvec::prelude::{BitVec, bitvec};

use crate::spatial::grid::Grid;
use crate::spatial::position::Position;

/// Fixed-size set of grid cells backed by a bit vector
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    cols: usize,
}

impl CellSet {
    /// Create an empty set covering a `rows` by `cols` grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            cols,
        }
    }

    /// Create an empty set sized to a grid
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.col < self.cols {
            let index = pos.row * self.cols + pos.col;
            (index < self.bits.len()).then_some(index)
        } else {
            None
        }
    }

    /// Insert a position; out-of-range positions are ignored
    pub fn insert(&mut self, pos: Position) {
        if let Some(index) = self.index(pos) {
            self.bits.set(index, true);
        }
    }

    /// Test membership; out-of-range positions are never members
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no position has been inserted
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}
