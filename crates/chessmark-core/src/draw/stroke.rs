//! Stroke definitions.
//!
//! Two kinds of stroke appear on a board. Glyph outlines use a thin solid
//! stroke with round caps and joins. The dark squares use a dashed stroke as
//! wide as one square whose dashes and gaps are also one square long, so a
//! single horizontal line per row paints every other square.
//!
//! [`apply_stroke!`](crate::apply_stroke!) writes a [`StrokeDefinition`] onto
//! any SVG element builder.

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// Dashes and gaps of the given equal length
    Dashed(f32),
}

impl StrokeStyle {
    /// The `stroke-dasharray` value, `None` for solid strokes.
    pub fn dasharray(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed(length) => Some(length.to_string()),
        }
    }
}

/// Shape of stroke endpoints (`stroke-linecap`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Dashes end exactly on square edges
    #[default]
    Butt,
    Round,
}

impl StrokeCap {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// Shape of stroke corners (`stroke-linejoin`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Round,
}

impl StrokeJoin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
        }
    }
}

/// Color, width and shape of a stroke.
///
/// # Examples
///
/// ```
/// use chessmark_core::color::Color;
/// use chessmark_core::draw::{StrokeDefinition, StrokeStyle};
///
/// // Rows of a board with 125 unit squares
/// let squares = StrokeDefinition::dashed(Color::new("olivedrab").unwrap(), 125.0);
/// assert_eq!(squares.width(), 125.0);
/// assert_eq!(squares.style(), StrokeStyle::Dashed(125.0));
///
/// // Glyph outline
/// let outline = StrokeDefinition::solid(Color::default(), 1.5).rounded();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// A solid stroke with butt caps and miter joins.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }

    /// A stroke as wide as its dashes are long.
    ///
    /// Drawn horizontally, it paints squares of side `size` separated by
    /// gaps of the same size.
    pub fn dashed(color: Color, size: f32) -> Self {
        Self {
            style: StrokeStyle::Dashed(size),
            ..Self::solid(color, size)
        }
    }

    /// The same stroke with round caps and joins.
    pub fn rounded(self) -> Self {
        Self {
            cap: StrokeCap::Round,
            join: StrokeJoin::Round,
            ..self
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn cap(&self) -> StrokeCap {
        self.cap
    }

    pub fn join(&self) -> StrokeJoin {
        self.join
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::solid(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use chessmark_core::draw::StrokeDefinition;
/// use chessmark_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::new("olivedrab").unwrap(), 125.0);
/// let path = svg_element::Path::new().set("d", "M62.5,125 h1000");
///
/// let path = chessmark_core::apply_stroke!(path, &stroke);
/// assert!(path.to_string().contains(r#"stroke-dasharray="125""#));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let mut elem = $element
            .set("stroke", stroke.color().to_string())
            .set("stroke-opacity", stroke.color().alpha())
            .set("stroke-width", stroke.width())
            .set("stroke-linecap", stroke.cap().as_str())
            .set("stroke-linejoin", stroke.join().as_str());

        if let Some(dasharray) = stroke.style().dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
