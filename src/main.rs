//! CLI entry point for the grid-algorithms engine

use clap::Parser;
use mazekit::io::cli::{Cli, CommandRunner};

fn main() -> mazekit::Result<()> {
    let cli = Cli::parse();
    let runner = CommandRunner::new(cli);
    runner.run()
}
