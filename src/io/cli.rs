//! Command-line interface for exercising the engine from a terminal
//!
//! The CLI is a consumer of the core contracts, not part of them: it wires
//! seeds, picks endpoints, and formats grids as text. All engine data flows
//! through the same plain-data calls available to any other caller.

use crate::analysis::compare_algorithms;
use crate::io::configuration::{
    DEFAULT_EPISODES, DEFAULT_LOOP_FACTOR, DEFAULT_MAX_TICKS, DEFAULT_MAZE_COLS,
    DEFAULT_MAZE_ROWS, DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::maze::generate_maze;
use crate::snake::{SnakeState, step};
use crate::solver::{Algorithm, solve};
use crate::spatial::{Cell, Grid, Position};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "mazekit")]
#[command(
    author,
    version,
    about = "Maze generation, pathfinding comparison, and an autonomous snake agent"
)]
/// Command-line arguments for the engine demo tool
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for reproducible runs
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Clone, Subcommand)]
pub enum Command {
    /// Generate a maze and print it
    Generate {
        /// Maze height in cells (odd values align the room lattice)
        #[arg(short, long, default_value_t = DEFAULT_MAZE_ROWS)]
        rows: usize,

        /// Maze width in cells
        #[arg(short, long, default_value_t = DEFAULT_MAZE_COLS)]
        cols: usize,

        /// Share of candidate walls converted to paths
        #[arg(short, long, default_value_t = DEFAULT_LOOP_FACTOR)]
        loop_factor: f64,
    },

    /// Generate a maze and solve it corner to corner
    Solve {
        /// Maze height in cells
        #[arg(short, long, default_value_t = DEFAULT_MAZE_ROWS)]
        rows: usize,

        /// Maze width in cells
        #[arg(short, long, default_value_t = DEFAULT_MAZE_COLS)]
        cols: usize,

        /// Share of candidate walls converted to paths
        #[arg(short, long, default_value_t = DEFAULT_LOOP_FACTOR)]
        loop_factor: f64,

        /// Strategy to run; omit to compare all four
        #[arg(short, long)]
        algorithm: Option<AlgorithmChoice>,
    },

    /// Run autonomous snake episodes and report scores
    Snake {
        /// Number of episodes to simulate
        #[arg(short, long, default_value_t = DEFAULT_EPISODES)]
        episodes: usize,

        /// Tick cap per episode
        #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TICKS)]
        max_ticks: usize,
    },
}

/// Search strategy as a CLI value
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AlgorithmChoice {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// Dijkstra's algorithm
    Dijkstra,
    /// A* with Manhattan heuristic
    Astar,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Bfs => Self::Bfs,
            AlgorithmChoice::Dfs => Self::Dfs,
            AlgorithmChoice::Dijkstra => Self::Dijkstra,
            AlgorithmChoice::Astar => Self::AStar,
        }
    }
}

/// Executes subcommands against the engine
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Propagates engine errors from generation, solving, or simulation.
    pub fn run(&self) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        match self.cli.command.clone() {
            Command::Generate {
                rows,
                cols,
                loop_factor,
            } => {
                let grid = generate_maze(rows, cols, loop_factor, &mut rng)?;
                Self::print_text(&render_grid(&grid, &[], None, None));
                Ok(())
            }
            Command::Solve {
                rows,
                cols,
                loop_factor,
                algorithm,
            } => {
                let grid = generate_maze(rows, cols, loop_factor, &mut rng)?;
                let (start, end) = corner_endpoints(&grid)?;
                match algorithm {
                    Some(choice) => Self::run_single(&grid, choice.into(), start, end),
                    None => Self::run_comparison(&grid, start, end),
                }
            }
            Command::Snake {
                episodes,
                max_ticks,
            } => self.run_snake(episodes, max_ticks),
        }
    }

    fn run_single(grid: &Grid, algorithm: Algorithm, start: Position, end: Position) -> Result<()> {
        let result = solve(algorithm, grid, start, end)?;
        Self::print_text(&render_grid(grid, &result.path, Some(start), Some(end)));
        Self::print_text(&format!(
            "{algorithm}: {} steps, {} nodes explored",
            result.steps(),
            result.nodes_explored
        ));
        Ok(())
    }

    fn run_comparison(grid: &Grid, start: Position, end: Position) -> Result<()> {
        let reports = compare_algorithms(grid, start, end)?;
        Self::print_text(&render_grid(grid, &[], Some(start), Some(end)));
        for report in reports {
            let steps = if report.found {
                report.path_steps.to_string()
            } else {
                "no path".to_string()
            };
            Self::print_text(&format!(
                "{:>8}: {steps:>8} steps, {:>8} nodes explored",
                report.algorithm, report.nodes_explored
            ));
        }
        Ok(())
    }

    fn run_snake(&self, episodes: usize, max_ticks: usize) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);
        let mut progress = (!self.cli.quiet).then(ProgressManager::new);
        if let Some(ref mut pm) = progress {
            pm.initialize(episodes);
        }

        let mut scores = Vec::with_capacity(episodes);
        for episode in 0..episodes {
            if let Some(ref mut pm) = progress {
                pm.start_episode(episode, max_ticks);
            }

            let mut state = SnakeState::new();
            let mut final_score = 0;
            for tick in 0..max_ticks {
                let outcome = step(&state, &mut rng)?;
                final_score = outcome.score;
                if let Some(ref mut pm) = progress {
                    pm.update_tick(episode, tick + 1);
                }
                if outcome.game_over {
                    break;
                }
                state = outcome.state;
            }

            if let Some(ref mut pm) = progress {
                pm.complete_episode(episode, final_score);
            }
            scores.push(final_score);
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        let total: usize = scores.iter().sum();
        let mean = if scores.is_empty() {
            0.0
        } else {
            total as f64 / scores.len() as f64
        };
        let best = scores.iter().max().copied().unwrap_or(0);
        Self::print_text(&format!(
            "{} episode(s): best score {best}, mean score {mean:.1}",
            scores.len()
        ));
        Ok(())
    }

    // Primary program output belongs on stdout
    #[allow(clippy::print_stdout)]
    fn print_text(text: &str) {
        println!("{text}");
    }
}

/// First and last path cells in row-major order
///
/// On a freshly carved maze these sit near opposite corners, giving the
/// solver a long instance without any interactive endpoint picking.
fn corner_endpoints(grid: &Grid) -> Result<(Position, Position)> {
    let cells = grid.path_cells();
    match (cells.first(), cells.last()) {
        (Some(&start), Some(&end)) if start != end => Ok((start, end)),
        _ => Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.rows(), grid.cols()),
            &"grid has fewer than two path cells",
        )),
    }
}

/// Render a grid as text, optionally overlaying a solution path
fn render_grid(
    grid: &Grid,
    path: &[Position],
    start: Option<Position>,
    end: Option<Position>,
) -> String {
    let on_path: std::collections::HashSet<Position> = path.iter().copied().collect();
    let mut out = String::with_capacity((grid.cols() + 1) * grid.rows());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let glyph = if start == Some(pos) {
                'S'
            } else if end == Some(pos) {
                'E'
            } else if on_path.contains(&pos) {
                '·'
            } else {
                match grid.get(pos) {
                    Some(Cell::Wall) => '#',
                    _ => ' ',
                }
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}
