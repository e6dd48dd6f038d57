//! HTML fragment assembly.
//!
//! The fragment is built as a node tree and serialized once:
//!
//! ```text
//! div.chess                  outer wrapper, centered
//! └── div                    sized box: width, float, frame colors
//!     ├── h3                 title
//!     ├── svg                board
//!     ├── p                  moves
//!     └── p                  notes
//! ```
//!
//! The heading and both paragraphs are always present, empty when the
//! corresponding setting is unset.

use log::debug;
use svg::{
    Node,
    node::{Blob, element::Element},
};

use chessmark_core::semantic::DiagramSettings;

use crate::config::TextConfig;

const WRAPPER_CLASS: &str = "chess";
const WRAPPER_STYLE: &str = "text-align: center; margin: auto; display: block;";
const FRAME_BORDER: &str = "1px solid #666564";
const FRAME_BACKGROUND: &str = "#312e2b";
const TITLE_STYLE: &str = "text-transform: capitalize";

/// Builds the HTML fragment for a rendered board.
pub fn assemble(settings: &DiagramSettings, board: svg::Document, text: &TextConfig) -> String {
    let frame_style = format!(
        "width: {}; margin: 0 auto; border: {FRAME_BORDER}; background: {FRAME_BACKGROUND}; float: {}; clear: both;",
        settings.size(),
        settings.align()
    );
    debug!(style = frame_style.as_str(); "Assembling fragment");

    let title = capitalize_words(settings.title());

    let mut frame = Element::new("div");
    frame.assign("style", frame_style);
    frame.append(text_element("h3", &title, text, Some(TITLE_STYLE)));
    frame.append(board);
    frame.append(text_element("p", settings.moves(), text, None));
    frame.append(text_element("p", settings.notes(), text, None));

    let mut wrapper = Element::new("div");
    wrapper.assign("class", WRAPPER_CLASS);
    wrapper.assign("style", WRAPPER_STYLE);
    wrapper.append(frame);

    wrapper.to_string()
}

/// An element holding one piece of free text, as inline markup.
///
/// The serializer puts every element child on its own line, which leaves
/// blank lines inside empty elements and ends an HTML block in Markdown
/// hosts. Writing the element as one blob keeps it on a single line and
/// never self-closing, which HTML does not allow for `h3` or `p`.
fn text_element(name: &str, content: &str, text: &TextConfig, style: Option<&str>) -> Blob {
    let content = if text.escape() {
        escape_text(content)
    } else {
        content.to_string()
    };

    let markup = match style {
        Some(style) => format!(r#"<{name} style="{style}">{content}</{name}>"#),
        None => format!("<{name}>{content}</{name}>"),
    };
    Blob::new(markup)
}

/// Replaces `&`, `<` and `>` with entity references.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Uppercases the first letter of every whitespace-separated word.
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        word_start = c.is_whitespace();
    }

    result
}
