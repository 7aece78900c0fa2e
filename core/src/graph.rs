use tracing::debug;

use crate::grid::{Cell, CellIndex, Grid};

/// Which copy of a cell a doubled-graph node refers to.
///
/// Traveling through a circled cell toggles the traversal between the two
/// copies: `Forward` follows each arrow's stored heading, `Backward` follows
/// the negated heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Forward,
    Backward,
}

/// A node of the doubled graph: a physical cell tagged with its side.
///
/// This replaces the `id + numNodes` offset encoding with an explicit tag, so
/// no modulo arithmetic is needed to recover the physical cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRef {
    pub cell: CellIndex,
    pub side: Side,
}

impl NodeRef {
    pub fn forward(cell: CellIndex) -> Self {
        Self {
            cell,
            side: Side::Forward,
        }
    }

    pub fn backward(cell: CellIndex) -> Self {
        Self {
            cell,
            side: Side::Backward,
        }
    }
}

/// Fixed-size storage with one slot per (side, cell) pair.
pub(crate) struct Doubled<T> {
    forward: Vec<T>,
    backward: Vec<T>,
}

impl<T: Clone> Doubled<T> {
    pub(crate) fn filled(num_cells: usize, value: T) -> Self {
        Self {
            forward: vec![value.clone(); num_cells],
            backward: vec![value; num_cells],
        }
    }

    pub(crate) fn get(&self, node: NodeRef) -> &T {
        match node.side {
            Side::Forward => &self.forward[node.cell],
            Side::Backward => &self.backward[node.cell],
        }
    }

    pub(crate) fn set(&mut self, node: NodeRef, value: T) {
        match node.side {
            Side::Forward => self.forward[node.cell] = value,
            Side::Backward => self.backward[node.cell] = value,
        }
    }

    pub(crate) fn halves(&self) -> impl Iterator<Item = &T> {
        self.forward.iter().chain(self.backward.iter())
    }

    pub(crate) fn len_per_side(&self) -> usize {
        self.forward.len()
    }
}

/// Doubled adjacency list over a maze grid.
///
/// Built once per grid by casting a ray from every arrow cell along its
/// heading (forward half) and the negated heading (backward half). A ray
/// records one edge per differing-color cell it crosses and only stops at
/// the grid boundary — never at a hit. The exit cell's two copies are
/// present but have no outgoing edges.
pub struct MazeGraph {
    adj: Doubled<Vec<NodeRef>>,
}

impl MazeGraph {
    pub fn build(grid: &Grid) -> Self {
        let mut adj = Doubled::filled(grid.num_cells(), Vec::new());
        for side in [Side::Forward, Side::Backward] {
            for cell in 0..grid.num_cells() {
                adj.set(NodeRef { cell, side }, cast_ray(grid, cell, side));
            }
        }
        let graph = Self { adj };
        debug!(
            cells = grid.num_cells(),
            edges = graph.edge_count(),
            "built doubled adjacency list"
        );
        graph
    }

    /// Outgoing edges of a node, in ray order.
    pub fn neighbors(&self, node: NodeRef) -> &[NodeRef] {
        self.adj.get(node)
    }

    /// Number of physical cells (half the doubled node count).
    pub fn num_cells(&self) -> usize {
        self.adj.len_per_side()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.halves().map(Vec::len).sum()
    }
}

/// Walk from `cell` along its heading (negated for the backward side),
/// collecting an edge for every differing-color cell until the walk leaves
/// the grid.
fn cast_ray(grid: &Grid, cell: CellIndex, side: Side) -> Vec<NodeRef> {
    let Cell::Arrow { color, heading, .. } = grid.cell(cell) else {
        return Vec::new();
    };

    let (mut dx, mut dy) = heading.step();
    if side == Side::Backward {
        dx = -dx;
        dy = -dy;
    }

    let (start_row, start_col) = grid.coord(cell);
    let mut row = start_row as i64;
    let mut col = start_col as i64;
    let mut adj = Vec::new();

    loop {
        row += dy;
        col += dx;
        if row < 0 || col < 0 || row >= grid.rows() as i64 || col >= grid.cols() as i64 {
            break;
        }
        let target_index = grid.index(row as usize, col as usize);
        let target = grid.cell(target_index);
        if target.color() == Some(color) {
            continue;
        }
        // Which copy the edge lands on depends on the half being built:
        // forward edges flip to Backward on circled targets; backward edges
        // flip back to Forward on circled or exit targets.
        let target_side = match side {
            Side::Forward => {
                if target.is_circled() {
                    Side::Backward
                } else {
                    Side::Forward
                }
            }
            Side::Backward => match target {
                Cell::Arrow { circled: false, .. } => Side::Backward,
                _ => Side::Forward,
            },
        };
        adj.push(NodeRef {
            cell: target_index,
            side: target_side,
        });
    }

    adj
}
