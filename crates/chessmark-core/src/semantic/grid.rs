//! Board grid model.
//!
//! A [`BoardGrid`] is a rectangular matrix of [`CellCode`]s. The rectangle is
//! enforced at construction: rows shorter than the widest row are padded on
//! the right with the empty cell, and an empty input becomes a single empty
//! cell. Width and height are always derived from the rows themselves.

use std::fmt;

use super::PieceKind;

/// The raw code written in one grid cell.
///
/// Codes are kept verbatim (after trimming surrounding spaces) so that
/// placeholders such as `__` survive parsing; [`CellCode::piece`] decides
/// whether a code names a piece.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct CellCode(String);

impl CellCode {
    /// Creates a cell code from its text.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the empty cell sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` for the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the piece this code selects, if any.
    pub fn piece(&self) -> Option<PieceKind> {
        PieceKind::from_code(&self.0)
    }
}

impl fmt::Display for CellCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CellCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A rectangular grid of cell codes, row 0 at the top.
///
/// # Examples
///
/// ```
/// # use chessmark_core::semantic::{BoardGrid, CellCode};
/// let grid = BoardGrid::from_rows(vec![
///     vec!["kl".into(), "__".into(), "nd".into()],
///     vec!["qd".into()],
/// ]);
///
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert!(grid.cell(2, 1).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    rows: Vec<Vec<CellCode>>,
}

impl BoardGrid {
    /// Builds a grid from parsed rows, padding every row to the widest one.
    ///
    /// Zero rows, or rows that are all empty, produce the minimal 1×1 grid.
    pub fn from_rows(mut rows: Vec<Vec<CellCode>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0).max(1);
        if rows.is_empty() {
            rows.push(Vec::new());
        }
        for row in &mut rows {
            row.resize_with(width, CellCode::empty);
        }
        Self { rows }
    }

    /// Returns the minimal grid: one empty cell.
    pub fn single_empty() -> Self {
        Self::from_rows(Vec::new())
    }

    /// Number of columns. Always at least 1.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows. Always at least 1.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[Vec<CellCode>] {
        &self.rows
    }

    /// Returns the cell at column `x` and row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&CellCode> {
        self.rows.get(y).and_then(|row| row.get(x))
    }

    /// Iterates over `(column, row, code)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &CellCode)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, code)| (x, y, code))
        })
    }

    /// Iterates over `(column, row, piece)` for every cell holding a piece.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, PieceKind)> {
        self.cells()
            .filter_map(|(x, y, code)| code.piece().map(|piece| (x, y, piece)))
    }
}

impl Default for BoardGrid {
    fn default() -> Self {
        Self::single_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn row(codes: &[&str]) -> Vec<CellCode> {
        codes.iter().map(|code| CellCode::from(*code)).collect()
    }

    #[test]
    fn test_single_empty() {
        let grid = BoardGrid::single_empty();
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert!(grid.cell(0, 0).unwrap().is_empty());
        assert_eq!(grid.pieces().count(), 0);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = BoardGrid::from_rows(vec![row(&["kl", "__", "nd"]), row(&["qd"])]);

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows()[1], row(&["qd", "", ""]));
    }

    #[test]
    fn test_from_rows_single_empty_row() {
        let grid = BoardGrid::from_rows(vec![Vec::new()]);
        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
    }

    #[test]
    fn test_pieces_skip_placeholders() {
        let grid = BoardGrid::from_rows(vec![row(&["kl", "__"]), row(&["", "qd"])]);

        let pieces: Vec<_> = grid
            .pieces()
            .map(|(x, y, piece)| (x, y, piece.code()))
            .collect();
        assert_eq!(
            pieces,
            vec![(0, 0, "kl".to_string()), (1, 1, "qd".to_string())]
        );
    }

    #[test]
    fn test_cell_out_of_range() {
        let grid = BoardGrid::single_empty();
        assert!(grid.cell(1, 0).is_none());
        assert!(grid.cell(0, 1).is_none());
    }

    proptest! {
        #[test]
        fn prop_rows_are_rectangular(lengths in prop::collection::vec(0usize..12, 0..10)) {
            let rows: Vec<Vec<CellCode>> = lengths
                .iter()
                .map(|len| vec![CellCode::from("pl"); *len])
                .collect();
            let widest = lengths.iter().copied().max().unwrap_or(0).max(1);

            let grid = BoardGrid::from_rows(rows);

            prop_assert_eq!(grid.width(), widest);
            prop_assert_eq!(grid.height(), lengths.len().max(1));
            for row in grid.rows() {
                prop_assert_eq!(row.len(), widest);
            }
        }
    }
}
