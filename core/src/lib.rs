//! arrow-maze-core: doubled-graph arrow maze solver.
//!
//! A pure Rust library that turns a grid of colored, direction-tagged cells
//! into a doubled directed graph via per-cell ray casting, runs a
//! parent-pointer BFS over it, and extracts the entry-to-exit coordinate
//! path. No I/O beyond the text loader — this crate compiles standalone.
//!
//! Movement rule: standing on a cell, you may jump to any differently-colored
//! cell along the arrow's line of sight. Crossing a circled cell reverses
//! every subsequent arrow, which the graph encodes as a second "backward"
//! copy of every cell instead of an explicit traversal state.

mod graph;
mod grid;
mod parse;
mod traversal;

pub use graph::{MazeGraph, NodeRef, Side};
pub use grid::{Cell, CellIndex, Color, Grid, Heading};
pub use parse::{parse_grid, ParseError};
pub use traversal::{bfs, extract_path, solve, Coord, SpanningTree};
