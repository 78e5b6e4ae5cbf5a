//! Pluggable graph search over a grid

/// Queue, stack, and heap frontiers behind one interface
pub mod frontier;
/// Strategy dispatch, the four algorithms, and path reconstruction
pub mod search;

pub use search::{Algorithm, SearchResult, solve};
