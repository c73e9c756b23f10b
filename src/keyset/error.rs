// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for key set construction.

/// Errors that can occur while building identifiers and key sets.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum KeySetError {
    /// A key set must contain at least one identifier.
    #[error("Key set is empty")]
    Empty,

    /// An identifier must contain at least one character.
    #[error("Identifier is empty")]
    EmptyIdentifier,

    /// An identifier contained a character outside the `A-Z` / `0-9` classes.
    #[error("Invalid character {character:?} in identifier {name:?}: expected ASCII A-Z or 0-9")]
    InvalidCharacter {
        /// The offending identifier as supplied
        name: String,
        /// The first character that failed validation
        character: char,
    },

    /// The same identifier appeared twice in one key set.
    #[error("Duplicate identifier {0:?} in key set")]
    Duplicate(String),

    /// A key file could not be read.
    #[error("Failed to read key file: {0}")]
    FileRead(String),
}

/// Result type for key set operations
pub type Result<T> = std::result::Result<T, KeySetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(KeySetError::Empty.to_string(), "Key set is empty");

        let err = KeySetError::InvalidCharacter {
            name: "cvol".to_string(),
            character: 'c',
        };
        assert_eq!(
            err.to_string(),
            "Invalid character 'c' in identifier \"cvol\": expected ASCII A-Z or 0-9"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = KeySetError::Duplicate("CVOL".to_string());
        let err2 = KeySetError::Duplicate("CVOL".to_string());
        assert_eq!(err1, err2);
        assert_ne!(err1, KeySetError::Empty);
    }
}
