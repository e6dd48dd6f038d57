//! Configuration types for Chessmark rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file. Every field has a default, so an
//! empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`BoardConfig`] - Coordinate space of the generated board.
//! - [`StyleConfig`] - Square tone overrides applied on top of the theme.
//! - [`TextConfig`] - Handling of free-text settings (title, notes, moves).
//!
//! # Example
//!
//! ```
//! # use chessmark::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.board().canvas_size(), 1000.0);
//! assert!(config.text().escape());
//! assert!(config.style().light_square().unwrap().is_none());
//! ```

use serde::Deserialize;

use chessmark_core::color::Color;

/// Side of the square coordinate space a board is laid out in.
pub const DEFAULT_CANVAS_SIZE: f32 = 1000.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Board geometry section.
    #[serde(default)]
    board: BoardConfig,

    /// Style section.
    #[serde(default)]
    style: StyleConfig,

    /// Text handling section.
    #[serde(default)]
    text: TextConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(board: BoardConfig, style: StyleConfig, text: TextConfig) -> Self {
        Self { board, style, text }
    }

    /// Returns the board configuration.
    pub fn board(&self) -> &BoardConfig {
        &self.board
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the text configuration.
    pub fn text(&self) -> &TextConfig {
        &self.text
    }
}

/// Board geometry configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Width of the coordinate space, in SVG user units.
    #[serde(default = "default_canvas_size")]
    canvas_size: f32,
}

fn default_canvas_size() -> f32 {
    DEFAULT_CANVAS_SIZE
}

impl BoardConfig {
    /// Creates a board configuration with the given canvas size.
    pub fn new(canvas_size: f32) -> Self {
        Self { canvas_size }
    }

    /// Returns the canvas size.
    pub fn canvas_size(&self) -> f32 {
        self.canvas_size
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}

/// Square tone overrides.
///
/// Fields that are not set keep the tone of the diagram's theme.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Light square [`Color`], as a color string.
    #[serde(default)]
    light_square: Option<String>,

    /// Dark square [`Color`], as a color string.
    #[serde(default)]
    dark_square: Option<String>,
}

impl StyleConfig {
    /// Creates a style configuration from optional color strings.
    pub fn new(light_square: Option<String>, dark_square: Option<String>) -> Self {
        Self {
            light_square,
            dark_square,
        }
    }

    /// Returns the parsed light square [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn light_square(&self) -> Result<Option<Color>, String> {
        parse_color(self.light_square.as_deref(), "light_square")
    }

    /// Returns the parsed dark square [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid color.
    pub fn dark_square(&self) -> Result<Option<Color>, String> {
        parse_color(self.dark_square.as_deref(), "dark_square")
    }
}

fn parse_color(value: Option<&str>, field: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Free-text handling.
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Escape markup-special characters in title, notes and moves.
    #[serde(default = "default_escape")]
    escape: bool,
}

fn default_escape() -> bool {
    true
}

impl TextConfig {
    /// Creates a text configuration.
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    /// Returns whether free text is escaped.
    pub fn escape(&self) -> bool {
        self.escape
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self::new(default_escape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board().canvas_size(), DEFAULT_CANVAS_SIZE);
        assert!(config.text().escape());
        assert!(config.style().dark_square().unwrap().is_none());
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r##"
            [board]
            canvas_size = 800.0

            [style]
            light_square = "#f0d9b5"
            dark_square = "sienna"

            [text]
            escape = false
            "##,
        )
        .unwrap();

        assert_eq!(config.board().canvas_size(), 800.0);
        assert!(config.style().light_square().unwrap().is_some());
        assert!(config.style().dark_square().unwrap().is_some());
        assert!(!config.text().escape());
    }

    #[test]
    fn test_invalid_color() {
        let style = StyleConfig::new(None, Some("plaid".to_string()));
        let err = style.dark_square().unwrap_err();
        assert!(err.contains("dark_square"));
        assert!(err.contains("plaid"));
    }
}
