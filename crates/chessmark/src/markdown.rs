//! Markdown host adapter.
//!
//! Replaces chess diagram blocks inside a Markdown document with rendered
//! fragments and leaves every other byte of the document untouched.
//!
//! Two block forms are recognized:
//!
//! - A container opened by a `::: chess` line and closed by a `:::` line. It
//!   is replaced by the fragment itself.
//! - A fenced code block (backticks or tildes) whose language, the first
//!   word of the info string, contains `chess` as a whole word. It is replaced by the fragment wrapped in
//!   `<pre style="all:unset;">`, so hosts that style `pre` leave it alone.
//!
//! Fenced blocks of any other language are copied verbatim, including any
//! container markers inside them. A block without a closing line runs to the
//! end of the document.

use log::{debug, info};
use winnow::{
    ModalResult, Parser as _,
    ascii::space0,
    combinator::{alt, delimited},
    token::{literal, rest, take_while},
};

use crate::{ChessmarkError, DiagramBuilder};

const CONTAINER_INFO: &str = "chess";
const PRE_OPEN: &str = r#"<pre style="all:unset;">"#;
const PRE_CLOSE: &str = "</pre>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceChar {
    Backtick,
    Tilde,
}

impl FenceChar {
    fn as_char(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }
}

/// An opening code fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence<'a> {
    marker: FenceChar,
    len: usize,
    info: &'a str,
}

impl Fence<'_> {
    /// The first word of the info string.
    fn language(&self) -> &str {
        self.info.split_whitespace().next().unwrap_or_default()
    }

    fn is_chess(&self) -> bool {
        self.language()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .any(|word| word.eq_ignore_ascii_case(CONTAINER_INFO))
    }

    fn is_closed_by(&self, line: &str) -> bool {
        let mut input = line;
        fence_close(&mut input, self.marker, self.len).is_ok() && input.is_empty()
    }
}

fn fence_close<'s>(input: &mut &'s str, marker: FenceChar, len: usize) -> ModalResult<&'s str> {
    delimited(space0, take_while(len.., marker.as_char()), space0).parse_next(input)
}

fn fence_marker(input: &mut &str) -> ModalResult<(FenceChar, usize)> {
    alt((
        take_while(3.., '`').map(|run: &str| (FenceChar::Backtick, run.len())),
        take_while(3.., '~').map(|run: &str| (FenceChar::Tilde, run.len())),
    ))
    .parse_next(input)
}

fn fence_open(line: &str) -> Option<Fence<'_>> {
    fence.parse(line).ok()
}

fn fence<'s>(input: &mut &'s str) -> ModalResult<Fence<'s>> {
    let (_, (marker, len), info) = (space0, fence_marker, rest).parse_next(input)?;
    Ok(Fence {
        marker,
        len,
        info: info.trim(),
    })
}

fn container_marker<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(space0, take_while(3.., ':'), space0).parse_next(input)
}

fn container_open<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(container_marker, literal(CONTAINER_INFO), space0).parse_next(input)
}

fn is_container_open(line: &str) -> bool {
    container_open.parse(line).is_ok()
}

fn is_container_close(line: &str) -> bool {
    container_marker.parse(line).is_ok()
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn line_ending(line: &str) -> &str {
    &line[strip_line_ending(line).len()..]
}

/// The body of a diagram block and the line ending that followed it.
struct Block<'a> {
    body: String,
    ending: &'a str,
}

/// Consumes lines up to and including the one `is_close` accepts.
fn collect_block<'a>(
    opening: &'a str,
    lines: &mut impl Iterator<Item = &'a str>,
    is_close: impl Fn(&str) -> bool,
) -> Block<'a> {
    let mut body = String::new();
    let mut last = opening;

    for line in lines.by_ref() {
        last = line;
        if is_close(strip_line_ending(line)) {
            break;
        }
        body.push_str(line);
    }

    Block {
        body,
        ending: line_ending(last),
    }
}

/// Renders every chess block of a Markdown `document`.
///
/// # Errors
///
/// Returns an error if rendering a block fails, which only happens with an
/// invalid render configuration.
pub fn render_markdown(document: &str, builder: &DiagramBuilder) -> Result<String, ChessmarkError> {
    info!(bytes = document.len(); "Rendering Markdown document");

    let mut output = String::with_capacity(document.len());
    let mut lines = document.split_inclusive('\n');
    let mut blocks = 0usize;

    while let Some(line) = lines.next() {
        let content = strip_line_ending(line);

        if is_container_open(content) {
            let block = collect_block(line, &mut lines, is_container_close);
            output.push_str(&builder.render(&block.body)?);
            output.push_str(block.ending);
            blocks += 1;
        } else if let Some(fence) = fence_open(content) {
            if fence.is_chess() {
                let block = collect_block(line, &mut lines, |l| fence.is_closed_by(l));
                output.push_str(PRE_OPEN);
                output.push_str(&builder.render(&block.body)?);
                output.push_str(PRE_CLOSE);
                output.push_str(block.ending);
                blocks += 1;
            } else {
                debug!(info = fence.info; "Copying fenced block");
                output.push_str(line);
                for line in lines.by_ref() {
                    output.push_str(line);
                    if fence.is_closed_by(strip_line_ending(line)) {
                        break;
                    }
                }
            }
        } else {
            output.push_str(line);
        }
    }

    info!(blocks; "Markdown document rendered");
    Ok(output)
}
