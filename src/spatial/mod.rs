//! Spatial data structures shared by every component
//!
//! This module contains the grid abstraction and its supporting types:
//! - Wall/path cell matrix with checked access
//! - Coordinates and movement directions
//! - Cell bitsets for visited tracking

/// Bitset over grid cells for visited and reachability tracking
pub mod bitset;
/// Wall/path matrix and neighbor queries
pub mod grid;
/// Coordinates and movement directions
pub mod position;

pub use bitset::CellSet;
pub use grid::{Cell, Grid};
pub use position::{Direction, Position};
