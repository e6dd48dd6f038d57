//! Board geometry.
//!
//! [`BoardLayout`] turns grid dimensions and a canvas size into positions in
//! SVG user units. A board of `W × H` cells uses a cell side
//! `S = canvas / (W + 1)` and sits at `(S/2, S/2)`, leaving half a cell of
//! margin on every side of the square canvas.
//!
//! Dark squares are not individual rectangles. Each row contributes one
//! horizontal [`RowSegment`] that is stroked with a dash pattern of one cell,
//! so the segment's start decides which cells of the row are dark.

use chessmark_core::{
    geometry::{Point, Size},
    semantic::BoardGrid,
};

/// A horizontal run along the middle of one board row.
///
/// `offset` is relative to the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSegment {
    offset: Point,
    length: f32,
}

impl RowSegment {
    /// Start of the run, relative to the board origin.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Horizontal length of the run.
    pub fn length(&self) -> f32 {
        self.length
    }
}

/// Positions of everything drawn on a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    width: usize,
    height: usize,
    canvas_size: f32,
    cell_size: f32,
}

impl BoardLayout {
    /// Creates a layout for a board of `width × height` cells.
    pub fn new(width: usize, height: usize, canvas_size: f32) -> Self {
        let cell_size = canvas_size / (width + 1) as f32;
        Self {
            width,
            height,
            canvas_size,
            cell_size,
        }
    }

    /// Creates a layout sized for `grid`.
    pub fn for_grid(grid: &BoardGrid, canvas_size: f32) -> Self {
        Self::new(grid.width(), grid.height(), canvas_size)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Side of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Top-left corner of the board.
    pub fn origin(&self) -> Point {
        let half = self.cell_size / 2.0;
        Point::new(half, half)
    }

    /// Extent of the cell area.
    pub fn board_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32).scale(self.cell_size)
    }

    /// Extent of the coordinate space, margins included.
    ///
    /// The width is always the canvas size. The height keeps the same margin
    /// below the last row, so square boards get a square view box.
    pub fn view_box(&self) -> Size {
        let height = self.canvas_size * (self.height + 1) as f32 / (self.width + 1) as f32;
        Size::new(self.canvas_size, height)
    }

    /// Top-left corner of the cell at column `x`, row `y`.
    pub fn cell_position(&self, x: usize, y: usize) -> Point {
        self.origin().add_point(Point::new(
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
        ))
    }

    /// Whether row `row` starts its dash at the left edge of the board.
    ///
    /// Rows alternate phase. The first row's phase depends on whether width
    /// and height share parity.
    pub fn starts_at_edge(&self, row: usize) -> bool {
        let offset_type = self.width % 2 == self.height % 2;
        (row % 2 == 0) == offset_type
    }

    /// Dash runs for the dark squares, one per row at most.
    ///
    /// A row whose dash starts one cell in covers `W − 1` cells; on a board
    /// one cell wide that run is empty and is omitted.
    pub fn row_segments(&self) -> impl Iterator<Item = RowSegment> + '_ {
        let s = self.cell_size;
        (0..self.height).filter_map(move |row| {
            let y = row as f32 * s + s / 2.0;
            let (x, cells) = if self.starts_at_edge(row) {
                (0.0, self.width)
            } else {
                (s, self.width.saturating_sub(1))
            };

            (cells > 0).then(|| RowSegment {
                offset: Point::new(x, y),
                length: cells as f32 * s,
            })
        })
    }
}
