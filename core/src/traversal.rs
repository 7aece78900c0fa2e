use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use crate::graph::{Doubled, MazeGraph, NodeRef};
use crate::grid::Grid;

/// Parent-pointer tree produced by [`bfs`].
///
/// One slot per doubled-graph node; `None` means the node was never reached.
/// Rebuilt from scratch on every traversal.
pub struct SpanningTree {
    parents: Doubled<Option<NodeRef>>,
}

impl SpanningTree {
    fn new(num_cells: usize) -> Self {
        Self {
            parents: Doubled::filled(num_cells, None),
        }
    }

    /// Predecessor a node was reached from, `None` for unreached nodes and
    /// for the entry itself.
    pub fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        *self.parents.get(node)
    }

    fn set_parent(&mut self, node: NodeRef, parent: NodeRef) {
        self.parents.set(node, Some(parent));
    }
}

/// Breadth-first search over the doubled graph from `entry`.
///
/// A node is marked visited when it is dequeued, not when it is enqueued, so
/// a node may sit in the queue several times before its first dequeue and
/// each enqueue overwrites its parent pointer. The recorded parent is
/// therefore the last equally-near predecessor, not the first. Reachability
/// and hop counts are unaffected; only which equally-short route gets
/// reported depends on this tie-break.
pub fn bfs(graph: &MazeGraph, entry: NodeRef) -> SpanningTree {
    let mut tree = SpanningTree::new(graph.num_cells());
    let mut visited = Doubled::filled(graph.num_cells(), false);
    let mut queue = VecDeque::new();
    queue.push_back(entry);

    let mut reached = 0usize;
    while let Some(current) = queue.pop_front() {
        if !*visited.get(current) {
            reached += 1;
        }
        visited.set(current, true);
        for &next in graph.neighbors(current) {
            if !*visited.get(next) {
                queue.push_back(next);
                tree.set_parent(next, current);
            }
        }
    }

    debug!(reached, "traversal complete");
    tree
}

/// A 1-based (row, col) position on the grid, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Walk the spanning tree backward from the exit and return the entry-to-exit
/// coordinate path, or `None` if the exit was never reached.
///
/// Every edge into the exit lands on its forward copy (the exit is never
/// circled), so only that copy is consulted. Forward and backward copies of
/// the cells on the path collapse to the same physical coordinates.
pub fn extract_path(grid: &Grid, tree: &SpanningTree) -> Option<Vec<Coord>> {
    let mut trail = vec![NodeRef::forward(grid.exit())];
    let mut current = trail[0];
    while let Some(parent) = tree.parent(current) {
        trail.push(parent);
        current = parent;
    }

    if trail.len() == 1 {
        return None;
    }

    trail.reverse();
    Some(
        trail
            .into_iter()
            .map(|node| {
                let (row, col) = grid.coord(node.cell);
                Coord {
                    row: row + 1,
                    col: col + 1,
                }
            })
            .collect(),
    )
}

/// Build the doubled graph, traverse from the forward copy of cell (0,0),
/// and extract the path. The graph is discarded afterwards; callers that
/// solve repeatedly should hold a [`MazeGraph`] and call [`bfs`] directly.
pub fn solve(grid: &Grid) -> Option<Vec<Coord>> {
    let graph = MazeGraph::build(grid);
    let tree = bfs(&graph, NodeRef::forward(0));
    extract_path(grid, &tree)
}
