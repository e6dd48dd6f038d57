//! Parser for the Chessmark diagram notation.
//!
//! A diagram source mixes two small languages in free-form text:
//!
//! - keyword lines such as `theme dark` or `title Opening trap`, read by the
//!   [`settings`] module;
//! - a block of `|`-delimited rows such as `|kl|__|`, read by the [`grid`]
//!   module.
//!
//! Both parsers are total. Missing or malformed input yields documented
//! defaults, never an error.
//!
//! # Example
//!
//! ```
//! let diagram = chessmark_parser::parse("title demo\n|kl|__|\n|__|qd|\n");
//!
//! assert_eq!(diagram.settings().title(), "demo");
//! assert_eq!(diagram.grid().width(), 2);
//! assert_eq!(diagram.grid().height(), 2);
//! ```

pub mod grid;
pub mod settings;

use log::{debug, info};

use chessmark_core::semantic::Diagram;

/// Parses a diagram source into its settings and grid.
pub fn parse(source: &str) -> Diagram {
    info!(source_len = source.len(); "Parsing diagram source");

    let settings = settings::parse_settings(source);
    let grid = grid::parse_grid(source);

    debug!(
        width = grid.width(),
        height = grid.height(),
        theme = settings.theme().as_str();
        "Diagram parsed"
    );

    Diagram::new(settings, grid)
}
