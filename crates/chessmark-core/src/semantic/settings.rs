//! Diagram settings.
//!
//! [`DiagramSettings`] holds every keyword setting recognized in a diagram
//! source. Each field has a documented default, so a source without any
//! setting lines still produces a complete value.

use std::{fmt, str::FromStr};

/// Square palette selection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Base,
    Dark,
    Light,
}

impl Theme {
    /// Returns the keyword for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "base" => Ok(Self::Base),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!(
                "invalid theme `{s}`, valid values: base, dark, light"
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal placement of the diagram container.
///
/// Maps directly to the CSS `float` property.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    Right,
    #[default]
    None,
}

impl Align {
    /// Returns the CSS `float` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::None => "none",
        }
    }
}

impl FromStr for Align {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "none" => Ok(Self::None),
            _ => Err(format!(
                "invalid align `{s}`, valid values: left, right, none"
            )),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS length units accepted by the `size` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Cm,
    Mm,
    In,
    Px,
    Pt,
    Pc,
    Em,
    Ex,
    Ch,
    Rem,
    Vw,
    Vh,
    Vmin,
    Vmax,
    Percent,
}

impl LengthUnit {
    /// All units, ordered so that no unit is a prefix of a later one.
    pub const ALL: [LengthUnit; 15] = [
        Self::Vmin,
        Self::Vmax,
        Self::Rem,
        Self::Cm,
        Self::Mm,
        Self::In,
        Self::Px,
        Self::Pt,
        Self::Pc,
        Self::Em,
        Self::Ex,
        Self::Ch,
        Self::Vw,
        Self::Vh,
        Self::Percent,
    ];

    /// Returns the CSS spelling of this unit.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Ch => "ch",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
            Self::Vmin => "vmin",
            Self::Vmax => "vmax",
            Self::Percent => "%",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == lowered)
            .ok_or_else(|| format!("invalid length unit `{s}`"))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Container width: an integer magnitude and its unit.
///
/// Both halves always come from the same source; a size is never assembled
/// from one parsed half and one default half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    magnitude: u32,
    unit: LengthUnit,
}

impl BoardSize {
    /// Creates a size from a magnitude and unit.
    pub fn new(magnitude: u32, unit: LengthUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Returns the numeric magnitude.
    pub fn magnitude(self) -> u32 {
        self.magnitude
    }

    /// Returns the unit.
    pub fn unit(self) -> LengthUnit {
        self.unit
    }
}

impl Default for BoardSize {
    /// `50%`
    fn default() -> Self {
        Self::new(50, LengthUnit::Percent)
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

/// All settings of one diagram.
///
/// # Examples
///
/// ```
/// # use chessmark_core::semantic::{Align, DiagramSettings, Theme};
/// let settings = DiagramSettings::default()
///     .with_theme(Theme::Dark)
///     .with_title("demo");
///
/// assert_eq!(settings.theme(), Theme::Dark);
/// assert_eq!(settings.align(), Align::None);
/// assert_eq!(settings.size().to_string(), "50%");
/// assert_eq!(settings.title(), "demo");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DiagramSettings {
    theme: Theme,
    align: Align,
    size: BoardSize,
    title: String,
    notes: String,
    moves: String,
    show_letters: bool,
    show_numbers: bool,
}

impl DiagramSettings {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_size(mut self, size: BoardSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_moves(mut self, moves: impl Into<String>) -> Self {
        self.moves = moves.into();
        self
    }

    pub fn with_letters(mut self, show: bool) -> Self {
        self.show_letters = show;
        self
    }

    pub fn with_numbers(mut self, show: bool) -> Self {
        self.show_numbers = show;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn moves(&self) -> &str {
        &self.moves
    }

    /// File letters requested. Reserved: parsed but not drawn.
    pub fn show_letters(&self) -> bool {
        self.show_letters
    }

    /// Rank numbers requested. Reserved: parsed but not drawn.
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }
}
