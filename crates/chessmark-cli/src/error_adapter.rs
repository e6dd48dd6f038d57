//! Error adapter for converting ChessmarkError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's report formatting used in the CLI. Chessmark sources never
//! produce parse errors, so no variant carries source spans.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use chessmark::ChessmarkError;

/// Adapter rendering a [`ChessmarkError`] through miette.
pub struct ErrorAdapter<'a>(pub &'a ChessmarkError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChessmarkError::Io(_) => "chessmark::io",
            ChessmarkError::Config(_) => "chessmark::config",
            ChessmarkError::Export(_) => "chessmark::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ChessmarkError::Io(_) => return None,
            ChessmarkError::Config(_) => {
                "check the configuration file; colors accept any CSS color string"
            }
            ChessmarkError::Export(_) => "board.canvas_size must be a positive number",
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_codes_per_variant() {
        let io_err = ChessmarkError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let config_err = ChessmarkError::Config("bad color".to_string());

        assert_eq!(
            ErrorAdapter(&io_err).code().unwrap().to_string(),
            "chessmark::io"
        );
        assert_eq!(
            ErrorAdapter(&config_err).code().unwrap().to_string(),
            "chessmark::config"
        );
    }

    #[test]
    fn test_display_passes_through() {
        let err = ChessmarkError::Config("bad color".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Configuration error: bad color"
        );
    }

    #[test]
    fn test_help_only_for_config_and_export() {
        let io_err = ChessmarkError::Io(io::Error::other("disk"));
        let config_err = ChessmarkError::Config("x".to_string());

        assert!(ErrorAdapter(&io_err).help().is_none());
        assert!(ErrorAdapter(&config_err).help().is_some());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = ChessmarkError::Config("bad color".to_string());
        let mut writer = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut writer, &ErrorAdapter(&err))
            .unwrap();

        assert!(writer.contains("bad color"));
    }
}
