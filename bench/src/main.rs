use std::time::Instant;

use arrow_maze_core::{bfs, extract_path, Cell, Color, Grid, Heading, MazeGraph, NodeRef};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let max_side: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(256);

    if mode == "help" || mode == "--help" {
        println!("Usage: arrow-maze-bench [mode] [max_side]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  uniform  Uniform random colors and headings, sparse circles");
        println!("  stripes  Alternating color rows (dense edges)");
        println!("  circled  Half the cells circled (heavy side-toggling)");
        println!();
        println!("Default max_side: 256");
        return;
    }

    println!("arrow-maze-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(usize, u64) -> Grid)> = match mode {
        "uniform" => vec![("Uniform random", gen_uniform)],
        "stripes" => vec![("Striped rows", gen_stripes)],
        "circled" => vec![("Circled-heavy", gen_circled)],
        "all" => vec![
            ("Uniform random", gen_uniform as fn(usize, u64) -> Grid),
            ("Striped rows", gen_stripes),
            ("Circled-heavy", gen_circled),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, max_side);
    }
}

fn run_benchmark(name: &str, generator: fn(usize, u64) -> Grid, max_side: usize) {
    println!("--- {} ---", name);
    println!(
        "{:>6} {:>10} {:>12} {:>10} {:>10} {:>8}",
        "side", "cells", "edges", "build", "solve", "path"
    );

    let mut side = 8;
    while side <= max_side {
        let grid = generator(side, 42);

        let t = Instant::now();
        let graph = MazeGraph::build(&grid);
        let build = t.elapsed();

        let t = Instant::now();
        let tree = bfs(&graph, NodeRef::forward(0));
        let path = extract_path(&grid, &tree);
        let solve = t.elapsed();

        println!(
            "{:>6} {:>10} {:>12} {:>8.1}ms {:>8.1}ms {:>8}",
            side,
            grid.num_cells(),
            graph.edge_count(),
            build.as_secs_f64() * 1000.0,
            solve.as_secs_f64() * 1000.0,
            path.map(|p| p.len().to_string())
                .unwrap_or_else(|| "-".to_string()),
        );

        side *= 2;
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators — all deterministic, exit fixed at the bottom-right cell
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

const HEADINGS: [Heading; 8] = [
    Heading::North,
    Heading::NorthEast,
    Heading::East,
    Heading::SouthEast,
    Heading::South,
    Heading::SouthWest,
    Heading::West,
    Heading::NorthWest,
];

fn random_arrow(rng: &mut FastRng, circled_one_in: u64) -> Cell {
    Cell::Arrow {
        color: if rng.next(2) == 0 {
            Color::Red
        } else {
            Color::Blue
        },
        heading: HEADINGS[rng.next(8) as usize],
        circled: rng.next(circled_one_in) == 0,
    }
}

/// Uniform random colors and headings, roughly one cell in eight circled.
fn gen_uniform(side: usize, seed: u64) -> Grid {
    let mut rng = FastRng::new(seed);
    let mut cells: Vec<Cell> = (0..side * side - 1)
        .map(|_| random_arrow(&mut rng, 8))
        .collect();
    cells.push(Cell::Exit);
    Grid::new(side, side, cells)
}

/// Alternating color rows: every vertical or diagonal ray alternates colors,
/// so edge counts approach the per-ray maximum.
fn gen_stripes(side: usize, seed: u64) -> Grid {
    let mut rng = FastRng::new(seed);
    let mut cells = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            if row == side - 1 && col == side - 1 {
                cells.push(Cell::Exit);
            } else {
                cells.push(Cell::Arrow {
                    color: if row % 2 == 0 { Color::Red } else { Color::Blue },
                    heading: HEADINGS[rng.next(8) as usize],
                    circled: false,
                });
            }
        }
    }
    Grid::new(side, side, cells)
}

/// Half the cells circled: traversal bounces between the two graph halves.
fn gen_circled(side: usize, seed: u64) -> Grid {
    let mut rng = FastRng::new(seed);
    let mut cells: Vec<Cell> = (0..side * side - 1)
        .map(|_| random_arrow(&mut rng, 2))
        .collect();
    cells.push(Cell::Exit);
    Grid::new(side, side, cells)
}
