//! Square palettes for the diagram themes.
//!
//! A [`Palette`] holds the two square tones of a board. Each [`Theme`] maps to
//! a built-in palette, and a [`StyleConfig`] may replace either tone.

use log::debug;

use chessmark_core::{color::Color, semantic::Theme};

use crate::config::StyleConfig;

/// Light and dark square tones of one board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    light: Color,
    dark: Color,
}

impl Palette {
    /// Creates a palette from explicit tones.
    pub fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// Returns the built-in palette of `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        let (light, dark) = match theme {
            Theme::Base => ("bisque", "olivedrab"),
            Theme::Dark => ("#b0b0b0", "#4a4a4a"),
            Theme::Light => ("#f0d9b5", "#b58863"),
        };

        Self::new(
            Color::new(light).expect("Failed to parse built-in light square color"),
            Color::new(dark).expect("Failed to parse built-in dark square color"),
        )
    }

    /// Replaces the tones configured in `style`.
    ///
    /// # Errors
    ///
    /// Returns an error message if a configured tone is not a valid color.
    pub fn with_overrides(mut self, style: &StyleConfig) -> Result<Self, String> {
        if let Some(light) = style.light_square()? {
            debug!(color:% = light; "Overriding light square tone");
            self.light = light;
        }
        if let Some(dark) = style.dark_square()? {
            debug!(color:% = dark; "Overriding dark square tone");
            self.dark = dark;
        }
        Ok(self)
    }

    /// Tone of the light squares, also the board background.
    pub fn light(&self) -> Color {
        self.light
    }

    /// Tone of the dark squares.
    pub fn dark(&self) -> Color {
        self.dark
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_theme_tones() {
        let palette = Palette::for_theme(Theme::Base);
        assert_eq!(palette.light().to_string(), "bisque");
        assert_eq!(palette.dark().to_string(), "olivedrab");
        assert_eq!(palette, Palette::default());
    }

    #[test]
    fn test_themes_differ() {
        let base = Palette::for_theme(Theme::Base);
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);

        assert_ne!(base, dark);
        assert_ne!(base, light);
        assert_ne!(dark, light);
    }

    #[test]
    fn test_overrides_replace_configured_tones_only() {
        let style = StyleConfig::new(None, Some("sienna".to_string()));
        let palette = Palette::for_theme(Theme::Base)
            .with_overrides(&style)
            .unwrap();

        assert_eq!(palette.light().to_string(), "bisque");
        assert_eq!(palette.dark().to_string(), "sienna");
    }

    #[test]
    fn test_invalid_override() {
        let style = StyleConfig::new(Some("not-a-color".to_string()), None);
        assert!(Palette::default().with_overrides(&style).is_err());
    }
}
