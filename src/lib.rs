//! Grid-algorithms engine behind a maze visualizer and an autonomous snake
//!
//! Three components share one wall/path grid abstraction: a maze generator
//! carving spanning trees with controllable loop density, a solver exposing
//! four interchangeable search strategies with uniform exploration counts,
//! and a snake agent choosing safe moves on a grid that mutates under it.
//! Everything is a pure, synchronous transform over owned data; randomness
//! enters only through caller-supplied seedable RNGs.

#![forbid(unsafe_code)]

/// Comparative instrumentation across search strategies
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Procedural maze generation with loop injection
pub mod maze;
/// Autonomous snake agent and game state
pub mod snake;
/// Pluggable graph search over a grid
pub mod solver;
/// Grid, coordinates, and cell-set primitives
pub mod spatial;

pub use io::error::{EngineError, Result};
