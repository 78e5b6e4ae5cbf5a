//! Procedural maze generation

/// Depth-first carving and loop injection
pub mod generator;

pub use generator::generate_maze;
