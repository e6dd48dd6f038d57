//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use chessmark::{ChessmarkError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for ChessmarkError {
    fn from(err: ConfigError) -> Self {
        ChessmarkError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (chessmark/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ChessmarkError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("chessmark/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "chessmark", "chessmark") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ChessmarkError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    validate(&config)?;

    Ok(config)
}

/// Rejects values that would only fail later, at render time.
fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let canvas_size = config.board().canvas_size();
    if !canvas_size.is_finite() || canvas_size <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "board.canvas_size must be a positive number, got {canvas_size}"
        )));
    }

    config
        .style()
        .light_square()
        .and_then(|_| config.style().dark_square())
        .map_err(ConfigError::Validation)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_explicit_config() {
        let file = config_file("[board]\ncanvas_size = 800.0\n\n[text]\nescape = false\n");

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.board().canvas_size(), 800.0);
        assert!(!config.text().escape());
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = load_config(Some("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("Missing configuration file"));
    }

    #[test]
    fn test_unparseable_config() {
        let file = config_file("[board\ncanvas_size = ");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ChessmarkError::Config(_)));
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let file = config_file("[style]\ndark_square = \"not-a-color\"\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("dark_square"));
    }

    #[test]
    fn test_invalid_canvas_rejected() {
        let file = config_file("[board]\ncanvas_size = -1.0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("canvas_size"));
    }
}
