//! Autonomous snake agent over a mutating occupancy grid

/// Decision pipeline and tick application
pub mod agent;
/// Buffered random food placement
pub mod food;
/// Game state and tick outcomes
pub mod game;

pub use agent::step;
pub use food::place_food;
pub use game::{SnakeState, TickOutcome};
