//! Piece identities.
//!
//! A cell code selects a piece with two characters: the piece type followed by
//! the piece color, compared case-insensitively.
//!
//! | Type   | Char | | Color | Char |
//! |--------|------|-|-------|------|
//! | King   | `k`  | | Light | `l`  |
//! | Queen  | `q`  | | Dark  | `d`  |
//! | Rook   | `r`  | |       |      |
//! | Bishop | `b`  | |       |      |
//! | Knight | `n`  | |       |      |
//! | Pawn   | `p`  | |       |      |
//!
//! Codes outside this closed set of twelve are not pieces. This is not an
//! error: placeholder cells such as `__` are common in diagram sources.

use std::fmt;

/// The six standard piece types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    /// All piece types in glyph library order.
    pub const ALL: [PieceType; 6] = [
        Self::King,
        Self::Queen,
        Self::Rook,
        Self::Bishop,
        Self::Knight,
        Self::Pawn,
    ];

    /// Returns the piece type for a code character, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(Self::King),
            'q' => Some(Self::Queen),
            'r' => Some(Self::Rook),
            'b' => Some(Self::Bishop),
            'n' => Some(Self::Knight),
            'p' => Some(Self::Pawn),
            _ => None,
        }
    }

    /// Returns the lowercase code character.
    pub fn as_char(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }
}

/// Piece side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    /// White pieces, code `l`
    Light,
    /// Black pieces, code `d`
    Dark,
}

impl PieceColor {
    /// Both colors, light first.
    pub const ALL: [PieceColor; 2] = [Self::Light, Self::Dark];

    /// Returns the color for a code character, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Self::Light),
            'd' => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the lowercase code character.
    pub fn as_char(self) -> char {
        match self {
            Self::Light => 'l',
            Self::Dark => 'd',
        }
    }

    /// Returns the other side.
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// One of the twelve drawable pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceKind {
    piece_type: PieceType,
    color: PieceColor,
}

impl PieceKind {
    /// Creates a piece kind from its type and color.
    pub fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self { piece_type, color }
    }

    /// Looks up the piece selected by a cell code.
    ///
    /// Returns `None` for anything that is not exactly a type character
    /// followed by a color character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chessmark_core::semantic::{PieceColor, PieceKind, PieceType};
    /// let king = PieceKind::from_code("Kl").unwrap();
    /// assert_eq!(king.piece_type(), PieceType::King);
    /// assert_eq!(king.color(), PieceColor::Light);
    ///
    /// assert!(PieceKind::from_code("__").is_none());
    /// assert!(PieceKind::from_code("kld").is_none());
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let piece_type = PieceType::from_char(chars.next()?)?;
        let color = PieceColor::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(piece_type, color))
    }

    /// Iterates over all twelve kinds, light pieces first.
    pub fn all() -> impl Iterator<Item = PieceKind> {
        PieceColor::ALL.into_iter().flat_map(|color| {
            PieceType::ALL
                .into_iter()
                .map(move |piece_type| Self::new(piece_type, color))
        })
    }

    /// Returns the piece type.
    pub fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// Returns the piece color.
    pub fn color(self) -> PieceColor {
        self.color
    }

    /// Returns the canonical lowercase two-character code, e.g. `kl`.
    pub fn code(self) -> String {
        format!("{}{}", self.piece_type.as_char(), self.color.as_char())
    }

    /// Returns the id of the shared glyph definition for this kind.
    pub fn glyph_id(self) -> String {
        format!("piece-{}", self.code())
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.color, self.piece_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_all_kinds() {
        for kind in PieceKind::all() {
            assert_eq!(PieceKind::from_code(&kind.code()), Some(kind));
            assert_eq!(
                PieceKind::from_code(&kind.code().to_uppercase()),
                Some(kind)
            );
        }
        assert_eq!(PieceKind::all().count(), 12);
    }

    #[test]
    fn test_from_code_rejects_malformed() {
        for code in ["", "k", "__", "lk", "kx", "xl", "kll", " kl", "ké"] {
            assert!(PieceKind::from_code(code).is_none(), "code {code:?}");
        }
    }

    #[test]
    fn test_glyph_ids_differ_only_by_color() {
        let light = PieceKind::from_code("kl").unwrap();
        let dark = PieceKind::from_code("kd").unwrap();

        assert_eq!(light.glyph_id(), "piece-kl");
        assert_eq!(dark.glyph_id(), "piece-kd");
        assert_eq!(light.piece_type(), dark.piece_type());
        assert_eq!(light.color().opposite(), dark.color());
    }

    #[test]
    fn test_display() {
        let kind = PieceKind::new(PieceType::Knight, PieceColor::Dark);
        assert_eq!(kind.to_string(), "Dark Knight");
    }
}
