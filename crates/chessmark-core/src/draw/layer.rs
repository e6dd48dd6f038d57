//! Layer-based rendering for SVG output.
//!
//! Drawables declare which z-order layer each of their SVG elements belongs
//! to; [`LayeredOutput::render`] emits one `<g data-layer="…">` group per
//! non-empty layer, bottom to top.
//!
//! # Example
//!
//! ```
//! # use chessmark_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Use};
//!
//! let mut output = LayeredOutput::new();
//!
//! // Pieces added first still render above the board
//! output.add_to_layer(RenderLayer::Pieces, Box::new(Use::new()));
//! output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use std::collections::BTreeMap;

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// The `Ord` derive uses declaration order, so the first variant renders first
/// (bottom) and the last variant renders last (top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Board base tone
    Background,
    /// Dark square pattern
    Squares,
    /// Piece glyph placements
    Pieces,
}

impl RenderLayer {
    /// Returns the name written to the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Squares => "squares",
            Self::Pieces => "pieces",
        }
    }
}

/// SVG nodes grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    layers: BTreeMap<RenderLayer, Vec<SvgNode>>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node on top of everything already in `layer`.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.layers.entry(layer).or_default().push(node);
    }

    /// Moves every node of `other` on top of the matching layer of `self`.
    pub fn merge(&mut self, other: LayeredOutput) {
        for (layer, nodes) in other.layers {
            self.layers.entry(layer).or_default().extend(nodes);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.values().all(Vec::is_empty)
    }

    /// Returns the number of nodes in `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.layers.get(&layer).map_or(0, Vec::len)
    }

    /// Renders one `<g data-layer="…">` per non-empty layer, bottom first.
    pub fn render(self) -> Vec<SvgNode> {
        self.layers
            .into_iter()
            .filter(|(_, nodes)| !nodes.is_empty())
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}
