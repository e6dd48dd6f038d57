//! SVG rendering of the board.
//!
//! The board is drawn in three layers: the light background, the dark square
//! pattern, and the piece placements. Glyphs are emitted once as `<defs>` and
//! each placed piece is a `<use>` reference to its glyph.

use log::{debug, info, trace};
use svg::node::element::{self as svg_element, path::Data};

use chessmark_core::{
    apply_stroke,
    draw::{Drawable, GlyphLibrary, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Point,
    semantic::{BoardGrid, PieceKind},
};

use super::Error;
use crate::{layout::BoardLayout, theme::Palette};

/// The squares of a board: background plus dark square pattern.
///
/// Anchored at the board's top-left corner.
#[derive(Debug, Clone)]
pub struct Checkerboard {
    layout: BoardLayout,
    palette: Palette,
}

impl Checkerboard {
    pub fn new(layout: BoardLayout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    fn squares_data(&self, position: Point) -> Data {
        self.layout
            .row_segments()
            .fold(Data::new(), |data, segment| {
                let start = position.add_point(segment.offset());
                data.move_to((start.x(), start.y()))
                    .horizontal_line_by(segment.length())
            })
    }
}

impl Drawable for Checkerboard {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let size = self.layout.board_size();

        let background = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", size.width())
            .set("height", size.height())
            .set("fill", &self.palette.light());
        output.add_to_layer(RenderLayer::Background, Box::new(background));

        let stroke = StrokeDefinition::dashed(self.palette.dark(), self.layout.cell_size());
        let squares = svg_element::Path::new()
            .set("d", self.squares_data(position))
            .set("fill", "none");
        let squares = apply_stroke!(squares, &stroke);
        output.add_to_layer(RenderLayer::Squares, Box::new(squares));

        output
    }
}

/// One piece standing on a cell.
///
/// Anchored at the cell's top-left corner, which is also the glyph origin.
#[derive(Debug, Clone, Copy)]
pub struct PiecePlacement {
    kind: PieceKind,
}

impl PiecePlacement {
    pub fn new(kind: PieceKind) -> Self {
        Self { kind }
    }
}

impl Drawable for PiecePlacement {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let placement = svg_element::Use::new()
            .set("href", format!("#{}", self.kind.glyph_id()))
            .set("x", position.x())
            .set("y", position.y());
        output.add_to_layer(RenderLayer::Pieces, Box::new(placement));
        output
    }
}

/// Renders `grid` as a standalone SVG document.
///
/// The document has `width` and `height` of `100%` so it fills its container,
/// and a view box of `canvas_size` user units across.
///
/// # Errors
///
/// Returns [`Error::Render`] if `canvas_size` is not a positive finite number.
pub fn render_board(
    grid: &BoardGrid,
    palette: Palette,
    canvas_size: f32,
) -> Result<svg::Document, Error> {
    if !canvas_size.is_finite() || canvas_size <= 0.0 {
        return Err(Error::Render(format!(
            "canvas size must be a positive number, got {canvas_size}"
        )));
    }

    let layout = BoardLayout::for_grid(grid, canvas_size);
    debug!(
        width = layout.width(),
        height = layout.height(),
        cell_size = layout.cell_size();
        "Board layout calculated"
    );

    let mut output = Checkerboard::new(layout, palette).render_to_layers(layout.origin());

    for (x, y, code) in grid.cells() {
        match code.piece() {
            Some(kind) => {
                trace!(x, y, piece:% = kind; "Placing piece");
                let placement = PiecePlacement::new(kind);
                output.merge(placement.render_to_layers(layout.cell_position(x, y)));
            }
            None if !code.is_empty() => {
                trace!(x, y, code = code.as_str(); "Ignoring unrecognized cell code");
            }
            None => {}
        }
    }

    info!(pieces = output.layer_len(RenderLayer::Pieces); "Board rendered");

    let view_box = layout.view_box();
    let doc = svg::Document::new()
        .set("width", "100%")
        .set("height", "100%")
        .set(
            "viewBox",
            format!("0 0 {} {}", view_box.width(), view_box.height()),
        )
        .add(GlyphLibrary::new(layout.cell_size()).render());

    Ok(output
        .render()
        .into_iter()
        .fold(doc, |doc, node| doc.add(node)))
}
