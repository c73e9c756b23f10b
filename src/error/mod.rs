//! Error module for the hash constant search tool.
//!
//! One thiserror enum per module, folded into a single top-level error for
//! the entry point. There are no partial-failure or retry semantics: any
//! failure aborts the run rather than producing a corrupted partial answer.

use thiserror::Error;

pub mod config;

/// Result type alias used throughout the tool.
pub type AppResult<T> = Result<T, AppError>;

/// Core error enum for the hash constant search tool.
#[derive(Error, Debug)]
pub enum AppError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors from key set construction or loading.
    #[error("Key set error: {0}")]
    KeySet(#[from] crate::keyset::KeySetError),

    /// Errors from hash parameter construction.
    #[error("Hash parameter error: {0}")]
    HashParams(#[from] crate::hasher::HashParamsError),

    /// Errors from the search engine.
    #[error("Search error: {0}")]
    Search(#[from] crate::search::SearchError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyset::KeySetError;
    use crate::search::SearchError;

    #[test]
    fn test_from_conversions() {
        let err: AppError = KeySetError::Empty.into();
        assert!(matches!(err, AppError::KeySet(_)));

        let err: AppError = SearchError::EmptyKeySet.into();
        assert!(matches!(err, AppError::Search(_)));
    }

    #[test]
    fn test_display_includes_module_context() {
        let err: AppError = KeySetError::Empty.into();
        assert_eq!(err.to_string(), "Key set error: Key set is empty");
    }
}
