//! Board grid rows.
//!
//! A grid is a contiguous run of lines made of `|`-introduced cells, each cell
//! holding a piece code of at most two characters:
//!
//! ```text
//! |rd|nd|bd|qd|kd|bd|nd|rd|
//! |pd|pd|pd|pd|pd|pd|pd|pd|
//! |  |  |  |  |  |  |  |  |
//! ```
//!
//! The closing `|` is optional and spaces around a code are ignored. The
//! first line that does not have this shape ends the run; lines after it are
//! not part of the grid even if they look like rows.

use log::{debug, trace};
use winnow::{
    ModalResult, Parser as _,
    ascii::space0,
    combinator::{delimited, preceded, repeat},
    token::take_while,
};

use chessmark_core::semantic::{BoardGrid, CellCode};

/// Cell delimiter.
pub const DELIMITER: char = '|';

/// Longest code a cell may hold, in characters.
pub const MAX_CELL_WIDTH: usize = 2;

/// Extracts the board grid from a diagram source.
///
/// Without any grid row the result is the 1×1 grid holding one empty cell.
///
/// # Examples
///
/// ```
/// use chessmark_parser::grid::parse_grid;
///
/// let grid = parse_grid("title demo\n|kl|__|nd|\n|qd|\n");
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert!(grid.cell(2, 1).unwrap().is_empty());
///
/// let empty = parse_grid("no grid here");
/// assert_eq!((empty.width(), empty.height()), (1, 1));
/// ```
pub fn parse_grid(text: &str) -> BoardGrid {
    let rows: Vec<Vec<CellCode>> = text
        .lines()
        .map(parse_row)
        .skip_while(Option::is_none)
        .map_while(|row| row)
        .collect();

    if rows.is_empty() {
        debug!("No grid rows found, using a single empty cell");
    }

    BoardGrid::from_rows(rows)
}

/// Parses one grid line, or returns `None` when the line is not a grid row.
pub fn parse_row(line: &str) -> Option<Vec<CellCode>> {
    let line = line.trim();
    if !line.starts_with(DELIMITER) {
        return None;
    }

    let mut cells = match grid_row.parse(line) {
        Ok(cells) => cells,
        Err(err) => {
            trace!(line, offset = err.offset(); "Line is not a grid row");
            return None;
        }
    };

    // A closing delimiter leaves one empty field behind it
    if line.len() > 1 && line.ends_with(DELIMITER) {
        cells.pop();
    }

    Some(cells.into_iter().map(CellCode::new).collect())
}

fn grid_row<'s>(input: &mut &'s str) -> ModalResult<Vec<&'s str>> {
    repeat(1.., preceded(DELIMITER, cell)).parse_next(input)
}

fn cell<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(
        space0,
        take_while(0..=MAX_CELL_WIDTH, |c: char| {
            c != DELIMITER && !c.is_whitespace()
        }),
        space0,
    )
    .parse_next(input)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn codes(row: &[CellCode]) -> Vec<&str> {
        row.iter().map(CellCode::as_str).collect()
    }

    #[test]
    fn test_parse_row_closed_and_open() {
        assert_eq!(parse_row("|kl|__|").map(|r| r.len()), Some(2));
        assert_eq!(parse_row("|kl|__").map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_parse_row_keeps_inner_empty_cells() {
        let row = parse_row("|kl||qd|").unwrap();
        assert_eq!(codes(&row), vec!["kl", "", "qd"]);
    }

    #[test]
    fn test_parse_row_trims_spaces() {
        let row = parse_row("  | kl |  | qd|  ").unwrap();
        assert_eq!(codes(&row), vec!["kl", "", "qd"]);
    }

    #[test]
    fn test_parse_row_single_delimiter() {
        let row = parse_row("|").unwrap();
        assert_eq!(codes(&row), vec![""]);
    }

    #[test]
    fn test_parse_row_rejects_non_rows() {
        assert!(parse_row("title demo").is_none());
        assert!(parse_row("").is_none());
        assert!(parse_row("kl|qd|").is_none());
        assert!(parse_row("|kld|").is_none());
        assert!(parse_row("|k l|").is_none());
    }

    #[test]
    fn test_parse_grid_end_to_end_rows() {
        let grid = parse_grid("theme dark\ntitle demo\n|kl|__|\n|__|qd|\n");

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(codes(&grid.rows()[0]), vec!["kl", "__"]);
        assert_eq!(codes(&grid.rows()[1]), vec!["__", "qd"]);
    }

    #[test]
    fn test_parse_grid_pads_short_rows() {
        let grid = parse_grid("|kl|__|nd|\n|qd|");

        assert_eq!(grid.width(), 3);
        assert_eq!(codes(&grid.rows()[1]), vec!["qd", "", ""]);
    }

    #[test]
    fn test_parse_grid_pads_single_row() {
        let grid = parse_grid("|kl||");
        assert_eq!(grid.height(), 1);
        assert_eq!(codes(&grid.rows()[0]), vec!["kl", ""]);
    }

    #[test]
    fn test_parse_grid_without_rows() {
        for source in ["", "theme dark\ntitle nothing", "| too wide |"] {
            let grid = parse_grid(source);
            assert_eq!(grid, BoardGrid::single_empty(), "{source:?}");
        }
    }

    #[test]
    fn test_parse_grid_stops_at_first_non_row() {
        let grid = parse_grid("|kl|\n|kd|\nnotes between\n|ql|ql|ql|");
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 1);
    }

    #[test]
    fn test_parse_grid_windows_line_endings() {
        let grid = parse_grid("|kl|pd|\r\n|pl|kd|\r\n");
        assert_eq!(grid.height(), 2);
        assert_eq!(codes(&grid.rows()[1]), vec!["pl", "kd"]);
    }

    proptest! {
        #[test]
        fn prop_rows_share_widest_width(
            rows in prop::collection::vec(prop::collection::vec("[a-z_]{0,2}", 1..10), 1..10)
        ) {
            let source: String = rows
                .iter()
                .map(|cells| format!("|{}|\n", cells.join("|")))
                .collect();
            let widest = rows.iter().map(Vec::len).max().unwrap_or(1);

            let grid = parse_grid(&source);

            prop_assert_eq!(grid.height(), rows.len());
            prop_assert_eq!(grid.width(), widest);
            for row in grid.rows() {
                prop_assert_eq!(row.len(), widest);
            }
        }

        #[test]
        fn prop_text_without_delimiter_is_single_cell(text in "[^|]*") {
            prop_assert_eq!(parse_grid(&text), BoardGrid::single_empty());
        }
    }
}
