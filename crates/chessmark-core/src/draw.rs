//! Drawing primitives for board rendering.
//!
//! All board elements implement the [`Drawable`] trait, which renders them to
//! a [`LayeredOutput`]. Layers are ordered during final SVG generation, so the
//! squares never cover a piece regardless of emission order.

mod glyph;
mod layer;
mod stroke;

pub use glyph::{BASE_GLYPH_SIZE, GlyphDefinition, GlyphLibrary};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};

use crate::geometry::Point;

/// Trait for board elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to one or more layers.
    ///
    /// `position` is the drawable's anchor in board coordinates; each
    /// implementation documents which point of itself it anchors there.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
