//! Semantic diagram model types.
//!
//! This module contains the representation of a chess diagram after parsing.
//! Every value here is built fresh from the source text on each render call.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ settings parser        ↓ grid parser
//! DiagramSettings          BoardGrid (of CellCode)
//!     ↓                        ↓ piece lookup
//!     │                    PieceKind placements
//!     ↓ assemble               ↓ board renderer
//! HTML fragment  ◄──────── SVG board
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - [`Diagram`], the pair of settings and grid
//! - [`settings`] - [`DiagramSettings`] and its value types
//! - [`grid`] - [`BoardGrid`] and [`CellCode`]
//! - [`piece`] - [`PieceKind`], [`PieceType`], [`PieceColor`]

pub mod diagram;
pub mod grid;
pub mod piece;
pub mod settings;

pub use diagram::*;
pub use grid::*;
pub use piece::*;
pub use settings::*;
