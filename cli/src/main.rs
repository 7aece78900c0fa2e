//! Command-line arrow maze solver.
//!
//! Reads a maze description file, builds the doubled graph, and prints the
//! entry-to-exit path as 1-based `(row,col)` pairs, or `No solution exists`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use arrow_maze_core::{parse_grid, solve};

/// Solve an arrow maze description file.
#[derive(Parser)]
#[command(name = "arrow-maze", version)]
struct Cli {
    /// Maze description file (`rows cols` header, then one
    /// `row col color circled heading` line per cell).
    input: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt().with_env_filter(filter).init();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let grid = parse_grid(&text)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    debug!(rows = grid.rows(), cols = grid.cols(), "maze loaded");

    // Entry is always the top-left cell.
    match solve(&grid) {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(|c| c.to_string()).collect();
            println!("{}", steps.join(" "));
        }
        None => println!("No solution exists"),
    }

    Ok(())
}
