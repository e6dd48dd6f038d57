//! Chessmark - chess board diagrams from plain text.
//!
//! A diagram source is a handful of keyword lines (`theme`, `align`, `size`,
//! `title`, `notes`, `moves`, ...) and a grid of `|`-delimited two-letter piece
//! codes. Chessmark parses it and renders a self-contained HTML fragment with
//! an inline SVG board.
//!
//! ```text
//! theme dark
//! title demo
//! |kl|__|
//! |__|qd|
//! ```
//!
//! The quickest entry point is [`render`]. [`DiagramBuilder`] exposes the
//! individual stages and takes an [`AppConfig`](config::AppConfig).

pub mod config;
pub mod markdown;
pub mod theme;

mod error;
mod export;
mod layout;

pub use chessmark_core::{color, draw, semantic};

pub use error::ChessmarkError;

use log::{debug, info, trace};

use config::AppConfig;
use theme::Palette;

/// Renders a diagram source with the default configuration.
///
/// Never fails: every input, including the empty string, yields a fragment.
///
/// # Examples
///
/// ```
/// let html = chessmark::render("title demo\n|kl|__|\n|__|qd|");
///
/// assert!(html.contains("Demo"));
/// assert!(html.contains("#piece-kl"));
/// ```
pub fn render(source: &str) -> String {
    // The default configuration has a valid canvas and no color overrides
    DiagramBuilder::default()
        .render(source)
        .expect("default configuration renders every diagram")
}

/// Builder for parsing and rendering Chessmark diagrams.
///
/// # Examples
///
/// ```
/// use chessmark::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to semantic model
/// let diagram = builder.parse("theme light\n|rl|nd|");
///
/// // Bare board, or the full fragment
/// let svg = builder.render_board(&diagram).expect("Failed to render");
/// let html = builder.render_fragment(&diagram).expect("Failed to render");
///
/// assert!(svg.starts_with("<svg"));
/// assert!(html.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a semantic diagram.
    ///
    /// Parsing is total: missing or malformed settings take their defaults and
    /// a source without grid rows yields a single empty square.
    pub fn parse(&self, source: &str) -> semantic::Diagram {
        info!("Parsing diagram");
        let diagram = chessmark_parser::parse(source);
        trace!(diagram:?; "Parsed diagram");
        diagram
    }

    /// Render the board of a diagram as a bare SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`ChessmarkError::Config`] for an invalid configured square
    /// color and [`ChessmarkError::Export`] for an unusable canvas size.
    pub fn render_board(&self, diagram: &semantic::Diagram) -> Result<String, ChessmarkError> {
        Ok(self.board_document(diagram)?.to_string())
    }

    /// Render a diagram as an HTML fragment embedding its board.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`render_board`](Self::render_board).
    pub fn render_fragment(&self, diagram: &semantic::Diagram) -> Result<String, ChessmarkError> {
        let board = self.board_document(diagram)?;
        let fragment = export::fragment::assemble(diagram.settings(), board, self.config.text());

        info!(bytes = fragment.len(); "Fragment rendered");
        Ok(fragment)
    }

    /// Parse and render a diagram source to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`render_board`](Self::render_board).
    pub fn render(&self, source: &str) -> Result<String, ChessmarkError> {
        let diagram = self.parse(source);
        self.render_fragment(&diagram)
    }

    /// Render every chess block of a Markdown document.
    ///
    /// See [`markdown::render_markdown`].
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`render_board`](Self::render_board).
    pub fn render_markdown(&self, document: &str) -> Result<String, ChessmarkError> {
        markdown::render_markdown(document, self)
    }

    fn palette(&self, diagram: &semantic::Diagram) -> Result<Palette, ChessmarkError> {
        let theme = diagram.settings().theme();
        debug!(theme:% = theme; "Resolving palette");

        Palette::for_theme(theme)
            .with_overrides(self.config.style())
            .map_err(ChessmarkError::Config)
    }

    fn board_document(&self, diagram: &semantic::Diagram) -> Result<svg::Document, ChessmarkError> {
        let palette = self.palette(diagram)?;
        let canvas_size = self.config.board().canvas_size();
        info!(canvas_size; "Rendering board");

        Ok(export::board::render_board(
            diagram.grid(),
            palette,
            canvas_size,
        )?)
    }
}
