//! Error types for Chessmark operations.
//!
//! Parsing a diagram never fails: malformed input degrades to documented
//! defaults. The errors here come from an invalid render configuration or
//! from I/O performed by callers such as the CLI.

use std::io;

use thiserror::Error;

/// The main error type for Chessmark operations.
#[derive(Debug, Error)]
pub enum ChessmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for ChessmarkError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
