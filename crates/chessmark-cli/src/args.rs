//! Command-line argument definitions for the Chessmark CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the input and output
//! forms, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Chessmark diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram or Markdown file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(
        short,
        long,
        help = "Path to the output file [default: out.html, out.md with --markdown, out.svg with --svg-only]"
    )]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Treat the input as a Markdown document and render its chess blocks
    #[arg(long, conflicts_with = "svg_only")]
    pub markdown: bool,

    /// Write the bare board SVG instead of the HTML fragment
    #[arg(long)]
    pub svg_only: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the output path, defaulting by output form.
    pub fn output_path(&self) -> &str {
        match &self.output {
            Some(output) => output,
            None if self.markdown => "out.md",
            None if self.svg_only => "out.svg",
            None => "out.html",
        }
    }
}
