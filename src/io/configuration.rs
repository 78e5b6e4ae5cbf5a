//! Engine constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default share of candidate walls converted to paths after carving
pub const DEFAULT_LOOP_FACTOR: f64 = 0.1;

// Defaults matching the reference display size
/// Default maze height
pub const DEFAULT_MAZE_ROWS: usize = 33;
/// Default maze width
pub const DEFAULT_MAZE_COLS: usize = 69;

// Snake arena
/// Arena height in cells
pub const ARENA_ROWS: usize = 20;
/// Arena width in cells
pub const ARENA_COLS: usize = 34;
/// Starting head cell (row, col)
pub const INITIAL_HEAD: (usize, usize) = (10, 10);
/// Starting food cell (row, col)
pub const INITIAL_FOOD: (usize, usize) = (15, 15);

// Food placement
/// Initial keep-away buffer around body segments, in cells
pub const FOOD_BUFFER: usize = 3;
/// Attempt count after which the buffer starts decaying
pub const FOOD_BUFFER_DECAY_AFTER: usize = 50;
/// Attempt count after which any unoccupied cell is accepted
pub const FOOD_UNBUFFERED_AFTER: usize = 100;

// CLI defaults
/// Default episode count for batch snake simulation
pub const DEFAULT_EPISODES: usize = 1;
/// Default tick cap per snake episode
pub const DEFAULT_MAX_TICKS: usize = 2_000;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
