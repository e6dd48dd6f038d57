//! CLI logic for the Chessmark diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use chessmark::{ChessmarkError, DiagramBuilder};

/// Run the Chessmark CLI application
///
/// Reads the input file, renders it in the form selected by `args`, and
/// writes the markup to the output file.
///
/// # Errors
///
/// Returns `ChessmarkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Rendering errors caused by the configuration
pub fn run(args: &Args) -> Result<(), ChessmarkError> {
    let output_path = args.output_path();
    info!(
        input_path = args.input,
        output_path,
        markdown = args.markdown,
        svg_only = args.svg_only;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let markup = if args.markdown {
        builder.render_markdown(&source)?
    } else {
        let diagram = builder.parse(&source);
        if args.svg_only {
            builder.render_board(&diagram)?
        } else {
            builder.render_fragment(&diagram)?
        }
    };

    fs::write(output_path, markup)?;

    info!(output_file = output_path; "Output written successfully");

    Ok(())
}
