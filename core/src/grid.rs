/// 0-based index of a cell in row-major order.
pub type CellIndex = usize;

/// Color of an arrow cell. The exit cell carries no color — see [`Cell::Exit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

/// Compass heading of an arrow cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    /// Unit step as `(dx, dy)` where x is the column axis and y the row axis
    /// (y grows downward). The backward builder pass negates this step rather
    /// than keeping a second table.
    pub fn step(self) -> (i64, i64) {
        match self {
            Heading::North => (0, -1),
            Heading::NorthEast => (1, -1),
            Heading::East => (1, 0),
            Heading::SouthEast => (1, 1),
            Heading::South => (0, 1),
            Heading::SouthWest => (-1, 1),
            Heading::West => (-1, 0),
            Heading::NorthWest => (-1, -1),
        }
    }
}

/// A single maze cell.
///
/// Exactly one cell of a well-formed grid is the exit; it has no color,
/// heading, or circled flag, so those combinations are unrepresentable
/// instead of being runtime invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// The destination cell. Contributes no outgoing edges.
    Exit,
    /// A colored cell pointing along a compass heading.
    Arrow {
        color: Color,
        heading: Heading,
        circled: bool,
    },
}

impl Cell {
    /// Color of the cell, `None` for the exit.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Exit => None,
            Cell::Arrow { color, .. } => Some(color),
        }
    }

    pub fn is_circled(self) -> bool {
        matches!(self, Cell::Arrow { circled: true, .. })
    }

    pub fn is_exit(self) -> bool {
        matches!(self, Cell::Exit)
    }
}

/// A fixed rows × cols maze grid, row-major, immutable after construction.
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    exit: CellIndex,
}

impl Grid {
    /// Build a grid from row-major cells. `cells.len()` must equal
    /// `rows * cols` and exactly one cell must be [`Cell::Exit`]; the loader
    /// in [`crate::parse`] enforces both before calling this.
    pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        let exit = cells.iter().position(|c| c.is_exit()).unwrap_or(0);
        Self {
            rows,
            cols,
            cells,
            exit,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Index of the exit cell.
    pub fn exit(&self) -> CellIndex {
        self.exit
    }

    pub fn cell(&self, index: CellIndex) -> Cell {
        self.cells[index]
    }

    /// Row-major index for a 0-based (row, col) pair.
    pub fn index(&self, row: usize, col: usize) -> CellIndex {
        row * self.cols + col
    }

    /// 0-based (row, col) of a cell index.
    pub fn coord(&self, index: CellIndex) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}
