//! Export of parsed diagrams to markup.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Diagram (settings + grid)
//!     ↓ layout
//! BoardLayout
//!     ↓ export (this module)
//! SVG board, HTML fragment
//! ```
//!
//! # Submodules
//!
//! - [`board`] - The board as an `svg::Document`
//! - [`fragment`] - The HTML fragment embedding a board with its title and text
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`ChessmarkError::Export`] at the crate boundary.
//!
//! [`ChessmarkError::Export`]: crate::ChessmarkError::Export

pub mod board;
pub mod fragment;

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
