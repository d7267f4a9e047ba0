//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Output file name must be a plain file name: {0}")]
    InvalidFileName(String),

    #[error("Output file {file_name} must end in .{extension}")]
    WrongExtension {
        file_name: String,
        extension: &'static str,
    },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
