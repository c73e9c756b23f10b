//! Configuration error module.
//!
//! Error types for configuration loading, parsing, and validation. All of
//! these are raised before any search iteration runs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error when the configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Error when parsing the configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Error when validating the configuration.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError("max_shift must be at most 22".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration validation error: max_shift must be at most 22"
        );
    }
}
