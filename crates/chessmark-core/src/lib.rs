//! Chessmark Core Types and Definitions
//!
//! This crate provides the foundational types and definitions for Chessmark
//! board diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG output, strokes and piece glyphs ([`draw`] module)
//! - **Semantic**: Parsed diagram model: settings, grid and pieces ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
