//! Keyword settings.
//!
//! A setting is a line whose first word is a keyword, followed by whitespace
//! and a value running to the end of the line:
//!
//! ```text
//! theme dark
//! align right
//! size 300px
//! title Opera game
//! moves 1. e4 e5 2. Nf3 d6
//! letters true
//! ```
//!
//! Keywords match case-insensitively; the first matching line wins. Values
//! keep their written case. [`parse_setting`] is the raw primitive and the
//! typed accessors validate on top of it, falling back to the default of
//! [`DiagramSettings`] whenever a value is missing or not recognized.

use std::str::FromStr;

use log::debug;
use winnow::{
    ModalResult, Parser as _,
    ascii::{Caseless, digit1, space0, space1},
    combinator::{delimited, preceded, separated_pair},
    token::{literal, rest, take_while},
};

use chessmark_core::semantic::{Align, BoardSize, DiagramSettings, LengthUnit, Theme};

/// Setting keywords.
pub mod keyword {
    pub const THEME: &str = "theme";
    pub const ALIGN: &str = "align";
    pub const SIZE: &str = "size";
    pub const TITLE: &str = "title";
    pub const NOTES: &str = "notes";
    pub const MOVES: &str = "moves";
    pub const LETTERS: &str = "letters";
    pub const NUMBERS: &str = "numbers";
}

/// Returns the raw value of setting `name`, or `""` when no line sets it.
///
/// # Examples
///
/// ```
/// use chessmark_parser::settings::parse_setting;
///
/// let source = "TITLE  Scholar's Mate\n|kl|";
/// assert_eq!(parse_setting(source, "title"), "Scholar's Mate");
/// assert_eq!(parse_setting(source, "notes"), "");
/// ```
pub fn parse_setting(text: &str, name: &str) -> String {
    text.lines()
        .find_map(|line| {
            let mut input = line;
            setting_value(&mut input, name).ok()
        })
        .map(|value| value.trim_end().to_string())
        .unwrap_or_default()
}

fn setting_value<'s>(input: &mut &'s str, name: &str) -> ModalResult<&'s str> {
    preceded((space0, literal(Caseless(name)), space1), rest).parse_next(input)
}

/// Parses a whitelisted value, falling back to the default.
fn parse_enum<T>(text: &str, name: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    let value = parse_setting(text, name);
    if value.is_empty() {
        return T::default();
    }

    value.parse::<T>().unwrap_or_else(|err| {
        debug!(setting = name, reason = err.as_str(); "Ignoring setting value");
        T::default()
    })
}

/// Returns the `theme` setting; unknown values fall back to `base`.
pub fn parse_theme(text: &str) -> Theme {
    parse_enum(text, keyword::THEME)
}

/// Returns the `align` setting; unknown values fall back to `none`.
pub fn parse_align(text: &str) -> Align {
    parse_enum(text, keyword::ALIGN)
}

/// Returns the `size` setting.
///
/// The value must be an integer followed by a CSS length unit, optionally
/// separated by spaces. Anything else yields the default `50%` as a whole.
///
/// # Examples
///
/// ```
/// use chessmark_core::semantic::{BoardSize, LengthUnit};
/// use chessmark_parser::settings::parse_size;
///
/// assert_eq!(parse_size("size 320px"), BoardSize::new(320, LengthUnit::Px));
/// assert_eq!(parse_size("size 80 %"), BoardSize::new(80, LengthUnit::Percent));
/// assert_eq!(parse_size("size 320"), BoardSize::default());
/// assert_eq!(parse_size("size big px"), BoardSize::default());
/// ```
pub fn parse_size(text: &str) -> BoardSize {
    let value = parse_setting(text, keyword::SIZE);
    if value.is_empty() {
        return BoardSize::default();
    }

    board_size.parse(value.as_str()).unwrap_or_else(|err| {
        debug!(
            setting = keyword::SIZE,
            value = value.as_str(),
            offset = err.offset();
            "Ignoring setting value"
        );
        BoardSize::default()
    })
}

fn board_size(input: &mut &str) -> ModalResult<BoardSize> {
    delimited(space0, separated_pair(magnitude, space0, length_unit), space0)
        .map(|(magnitude, unit)| BoardSize::new(magnitude, unit))
        .parse_next(input)
}

fn magnitude(input: &mut &str) -> ModalResult<u32> {
    digit1
        .verify_map(|digits: &str| digits.parse().ok())
        .parse_next(input)
}

fn length_unit(input: &mut &str) -> ModalResult<LengthUnit> {
    take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '%')
        .verify_map(|unit: &str| unit.parse().ok())
        .parse_next(input)
}

/// Returns the free-text `title` setting.
pub fn parse_title(text: &str) -> String {
    parse_setting(text, keyword::TITLE)
}

/// Returns the free-text `notes` setting.
pub fn parse_notes(text: &str) -> String {
    parse_setting(text, keyword::NOTES)
}

/// Returns the free-text `moves` setting.
pub fn parse_moves(text: &str) -> String {
    parse_setting(text, keyword::MOVES)
}

/// Returns `true` only when `letters` is set to `true`.
pub fn parse_letters(text: &str) -> bool {
    parse_setting(text, keyword::LETTERS).eq_ignore_ascii_case("true")
}

/// Returns `true` only when `numbers` is set to `true`.
pub fn parse_numbers(text: &str) -> bool {
    parse_setting(text, keyword::NUMBERS).eq_ignore_ascii_case("true")
}

/// Reads every setting of a diagram source.
pub fn parse_settings(text: &str) -> DiagramSettings {
    DiagramSettings::default()
        .with_theme(parse_theme(text))
        .with_align(parse_align(text))
        .with_size(parse_size(text))
        .with_title(parse_title(text))
        .with_notes(parse_notes(text))
        .with_moves(parse_moves(text))
        .with_letters(parse_letters(text))
        .with_numbers(parse_numbers(text))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_parse_setting_basic() {
        assert_eq!(parse_setting("theme dark", "theme"), "dark");
        assert_eq!(parse_setting("  title   A Game  \n", "title"), "A Game");
        assert_eq!(parse_setting("title\tTabbed", "title"), "Tabbed");
    }

    #[test]
    fn test_parse_setting_case_insensitive_keyword() {
        assert_eq!(parse_setting("THEME Dark", "theme"), "Dark");
        assert_eq!(parse_setting("Title Demo", "title"), "Demo");
    }

    #[test]
    fn test_parse_setting_requires_separator() {
        assert_eq!(parse_setting("themedark", "theme"), "");
        assert_eq!(parse_setting("theme", "theme"), "");
        assert_eq!(parse_setting("themes dark", "theme"), "");
    }

    #[test]
    fn test_parse_setting_does_not_cross_lines() {
        assert_eq!(parse_setting("title\n|kl|", "title"), "");
    }

    #[test]
    fn test_parse_setting_first_line_wins() {
        let source = "theme light\ntheme dark";
        assert_eq!(parse_setting(source, "theme"), "light");
    }

    #[test]
    fn test_parse_setting_keyword_must_start_line() {
        let source = "notes black moves first\nmoves 1... e5";
        assert_eq!(parse_setting(source, "moves"), "1... e5");
        assert_eq!(parse_notes(source), "black moves first");
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!(parse_theme("theme dark"), Theme::Dark);
        assert_eq!(parse_theme("theme LIGHT"), Theme::Light);
        assert_eq!(parse_theme("theme wood"), Theme::Base);
        assert_eq!(parse_theme("theme dark wood"), Theme::Base);
        assert_eq!(parse_theme(""), Theme::Base);
    }

    #[test]
    fn test_parse_enum_typed_fallback() {
        assert_eq!(parse_enum::<Theme>("Theme Dark", keyword::THEME), Theme::Dark);
        assert_eq!(parse_enum::<Align>("align sideways", keyword::ALIGN), Align::None);
        assert_eq!(parse_enum::<Align>("", keyword::ALIGN), Align::None);
    }

    #[test]
    fn test_parse_align() {
        assert_eq!(parse_align("align left"), Align::Left);
        assert_eq!(parse_align("align right"), Align::Right);
        assert_eq!(parse_align("align center"), Align::None);
        assert_eq!(parse_align("no settings"), Align::None);
    }

    #[test]
    fn test_parse_size_units() {
        for unit in LengthUnit::ALL {
            let source = format!("size 42{unit}");
            assert_eq!(parse_size(&source), BoardSize::new(42, unit), "{source}");
        }
    }

    #[test]
    fn test_parse_size_falls_back_as_a_whole() {
        assert_eq!(parse_size("size px"), BoardSize::default());
        assert_eq!(parse_size("size 300"), BoardSize::default());
        assert_eq!(parse_size("size 300 parsecs"), BoardSize::default());
        assert_eq!(parse_size("size -5px"), BoardSize::default());
        assert_eq!(parse_size("size 1.5em"), BoardSize::default());
        assert_eq!(parse_size("size 99999999999px"), BoardSize::default());
    }

    #[test]
    fn test_parse_size_case_insensitive_unit() {
        assert_eq!(parse_size("SIZE 10PX"), BoardSize::new(10, LengthUnit::Px));
    }

    #[test]
    fn test_parse_booleans() {
        assert!(parse_letters("letters true"));
        assert!(parse_numbers("numbers TRUE"));
        assert!(!parse_letters("letters yes"));
        assert!(!parse_numbers("numbers false"));
        assert!(!parse_letters(""));
    }

    #[test]
    fn test_parse_settings_defaults() {
        assert_eq!(parse_settings(""), DiagramSettings::default());
        assert_eq!(parse_settings("|kl|kd|"), DiagramSettings::default());
    }

    #[test]
    fn test_parse_settings_all() {
        let source = "theme light\nalign right\nsize 20em\ntitle Demo\n\
                      notes White to move\nmoves 1. e4\nletters true\nnumbers true\n|kl|";
        let settings = parse_settings(source);

        assert_eq!(settings.theme(), Theme::Light);
        assert_eq!(settings.align(), Align::Right);
        assert_eq!(settings.size(), BoardSize::new(20, LengthUnit::Em));
        assert_eq!(settings.title(), "Demo");
        assert_eq!(settings.notes(), "White to move");
        assert_eq!(settings.moves(), "1. e4");
        assert!(settings.show_letters());
        assert!(settings.show_numbers());
    }

    proptest! {
        #[test]
        fn prop_theme_and_align_never_panic(value in "\\PC*") {
            let theme = parse_theme(&format!("theme {value}"));
            let align = parse_align(&format!("align {value}"));
            prop_assert!(matches!(theme, Theme::Base | Theme::Dark | Theme::Light));
            prop_assert!(matches!(align, Align::Left | Align::Right | Align::None));
        }

        #[test]
        fn prop_size_is_all_parsed_or_all_default(value in "[0-9a-z% ]{0,12}") {
            let size = parse_size(&format!("size {value}"));
            let compact: String = value.split_whitespace().collect();
            if size != BoardSize::default() {
                let unit = size.unit().as_str();
                prop_assert!(compact.ends_with(unit));
                let digits = &compact[..compact.len() - unit.len()];
                prop_assert_eq!(digits.parse::<u32>().ok(), Some(size.magnitude()));
            }
        }

        #[test]
        fn prop_parsed_size_round_trips(magnitude in 0u32..100_000, unit_index in 0usize..15) {
            let unit = LengthUnit::ALL[unit_index];
            let size = parse_size(&format!("size {magnitude}{unit}"));
            prop_assert_eq!(size, BoardSize::new(magnitude, unit));
        }
    }
}
