use thiserror::Error;

use crate::grid::{Cell, Color, Grid, Heading};

/// Failure modes of the maze text format.
///
/// The format is strict: unrecognized tokens and unspecified cells are
/// rejected instead of being defaulted, so a typo cannot silently produce a
/// different maze.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing header line with grid dimensions")]
    MissingHeader,
    #[error("line {line}: expected `rows cols` header, got {text:?}")]
    BadHeader { line: usize, text: String },
    #[error("grid dimensions must be at least 1x1, got {rows}x{cols}")]
    BadDimensions { rows: usize, cols: usize },
    #[error("line {line}: expected `row col color circled heading`, got {text:?}")]
    BadLine { line: usize, text: String },
    #[error("line {line}: cell ({row},{col}) is outside the {rows}x{cols} grid")]
    OutOfRange {
        line: usize,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("line {line}: unknown color token {token:?} (expected R, B, or O)")]
    BadColor { line: usize, token: String },
    #[error("line {line}: unknown circled token {token:?} (expected C or U)")]
    BadCircled { line: usize, token: String },
    #[error("line {line}: unknown heading token {token:?}")]
    BadHeading { line: usize, token: String },
    #[error("line {line}: the exit cell must be written `O U X`")]
    BadExit { line: usize },
    #[error("line {line}: cell ({row},{col}) specified more than once")]
    DuplicateCell { line: usize, row: usize, col: usize },
    #[error("cell ({row},{col}) was never specified")]
    MissingCell { row: usize, col: usize },
    #[error("expected exactly one exit cell, found {found}")]
    ExitCount { found: usize },
}

/// Parse a maze description.
///
/// First non-empty line: `rows cols`. Each following non-empty line is
/// `row col color circled heading` with 1-based coordinates, color `R`/`B`/`O`
/// (`O` marks the exit), circled `C`/`U`, and heading one of the eight
/// compass tokens or `X` for the exit. Every cell must appear exactly once
/// and exactly one cell must be the exit.
pub fn parse_grid(input: &str) -> Result<Grid, ParseError> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let (rows, cols) = parse_header(header_line, header)?;
    if rows == 0 || cols == 0 {
        return Err(ParseError::BadDimensions { rows, cols });
    }

    let mut cells: Vec<Option<Cell>> = vec![None; rows * cols];
    for (line_no, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[row, col, color, circled, heading] = tokens.as_slice() else {
            return Err(ParseError::BadLine {
                line: line_no,
                text: line.to_string(),
            });
        };

        let row = parse_coord(line_no, line, row)?;
        let col = parse_coord(line_no, line, col)?;
        if row == 0 || col == 0 || row > rows || col > cols {
            return Err(ParseError::OutOfRange {
                line: line_no,
                row,
                col,
                rows,
                cols,
            });
        }

        let cell = parse_cell(line_no, color, circled, heading)?;
        let slot = &mut cells[(row - 1) * cols + (col - 1)];
        if slot.is_some() {
            return Err(ParseError::DuplicateCell {
                line: line_no,
                row,
                col,
            });
        }
        *slot = Some(cell);
    }

    let mut filled = Vec::with_capacity(cells.len());
    for (index, cell) in cells.into_iter().enumerate() {
        match cell {
            Some(cell) => filled.push(cell),
            None => {
                return Err(ParseError::MissingCell {
                    row: index / cols + 1,
                    col: index % cols + 1,
                })
            }
        }
    }

    let exits = filled.iter().filter(|c| c.is_exit()).count();
    if exits != 1 {
        return Err(ParseError::ExitCount { found: exits });
    }

    Ok(Grid::new(rows, cols, filled))
}

fn parse_header(line: usize, text: &str) -> Result<(usize, usize), ParseError> {
    let bad = || ParseError::BadHeader {
        line,
        text: text.to_string(),
    };
    let mut tokens = text.split_whitespace();
    let rows = tokens.next().ok_or_else(&bad)?.parse().map_err(|_| bad())?;
    let cols = tokens.next().ok_or_else(&bad)?.parse().map_err(|_| bad())?;
    if tokens.next().is_some() {
        return Err(bad());
    }
    Ok((rows, cols))
}

fn parse_coord(line: usize, text: &str, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::BadLine {
        line,
        text: text.to_string(),
    })
}

fn parse_cell(
    line: usize,
    color: &str,
    circled: &str,
    heading: &str,
) -> Result<Cell, ParseError> {
    let color = match color {
        "R" => Color::Red,
        "B" => Color::Blue,
        "O" => {
            // An exit is never circled and has no heading.
            if circled != "U" || heading != "X" {
                return Err(ParseError::BadExit { line });
            }
            return Ok(Cell::Exit);
        }
        other => {
            return Err(ParseError::BadColor {
                line,
                token: other.to_string(),
            })
        }
    };

    let circled = match circled {
        "C" => true,
        "U" => false,
        other => {
            return Err(ParseError::BadCircled {
                line,
                token: other.to_string(),
            })
        }
    };

    let heading = match heading {
        "N" => Heading::North,
        "NE" => Heading::NorthEast,
        "E" => Heading::East,
        "SE" => Heading::SouthEast,
        "S" => Heading::South,
        "SW" => Heading::SouthWest,
        "W" => Heading::West,
        "NW" => Heading::NorthWest,
        other => {
            return Err(ParseError::BadHeading {
                line,
                token: other.to_string(),
            })
        }
    };

    Ok(Cell::Arrow {
        color,
        heading,
        circled,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
        2 2
        1 1 R U E
        1 2 B C S
        2 1 B U NE
        2 2 O U X
    ";

    #[test]
    fn test_parse_small_grid() {
        let grid = parse_grid(SMALL).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(
            grid.cell(0),
            Cell::Arrow {
                color: Color::Red,
                heading: Heading::East,
                circled: false,
            }
        );
        assert_eq!(
            grid.cell(1),
            Cell::Arrow {
                color: Color::Blue,
                heading: Heading::South,
                circled: true,
            }
        );
        assert_eq!(grid.cell(3), Cell::Exit);
        assert_eq!(grid.exit(), 3);
    }

    #[test]
    fn test_cell_lines_in_any_order() {
        let shuffled = "2 2\n2 2 O U X\n2 1 B U NE\n1 1 R U E\n1 2 B C S\n";
        let a = parse_grid(SMALL).unwrap();
        let b = parse_grid(shuffled).unwrap();
        for i in 0..4 {
            assert_eq!(a.cell(i), b.cell(i));
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_grid(""), Err(ParseError::MissingHeader)));
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(
            parse_grid("two by two\n"),
            Err(ParseError::BadHeader { line: 1, .. })
        ));
        assert!(matches!(
            parse_grid("2 2 9\n"),
            Err(ParseError::BadHeader { .. })
        ));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            parse_grid("0 3\n"),
            Err(ParseError::BadDimensions { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        let input = "1 2\n1 1 R U\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::BadLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_color_rejected() {
        let input = "1 2\n1 1 G U E\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::BadColor { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_circled_rejected() {
        let input = "1 2\n1 1 R Y E\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::BadCircled { line: 2, .. })
        ));
    }

    #[test]
    fn test_unknown_heading_rejected() {
        let input = "1 2\n1 1 R U EE\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::BadHeading { line: 2, .. })
        ));
    }

    #[test]
    fn test_exit_with_heading_rejected() {
        let input = "1 2\n1 1 R U E\n1 2 O U N\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::BadExit { line: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_cell() {
        let input = "1 2\n1 3 R U E\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::OutOfRange {
                line: 2,
                row: 1,
                col: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_cell() {
        let input = "1 2\n1 1 R U E\n1 1 B U W\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::DuplicateCell {
                line: 3,
                row: 1,
                col: 1
            })
        ));
    }

    #[test]
    fn test_missing_cell() {
        let input = "1 2\n1 1 R U E\n";
        assert!(matches!(
            parse_grid(input),
            Err(ParseError::MissingCell { row: 1, col: 2 })
        ));
    }

    #[test]
    fn test_exit_count_enforced() {
        let none = "1 2\n1 1 R U E\n1 2 B U W\n";
        assert!(matches!(
            parse_grid(none),
            Err(ParseError::ExitCount { found: 0 })
        ));
        let two = "1 2\n1 1 O U X\n1 2 O U X\n";
        assert!(matches!(
            parse_grid(two),
            Err(ParseError::ExitCount { found: 2 })
        ));
    }

    #[test]
    fn test_parse_then_solve() {
        let path = crate::solve(&parse_grid(SMALL).unwrap());
        // (1,1) east hits the circled blue cell at (1,2); its backward copy
        // points north, off-grid, so the maze has no solution.
        assert_eq!(path, None);
    }
}
