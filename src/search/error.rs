// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the search engine.

/// Errors that can occur while setting up or running a search.
///
/// A failure aborts the run entirely; there are no partial results or
/// retries.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SearchError {
    /// Scoring is undefined over an empty key set.
    #[error("Cannot score an empty key set")]
    EmptyKeySet,

    /// The search configuration failed validation.
    #[error("Invalid search configuration: {0}")]
    InvalidConfiguration(String),

    /// The configured candidate space contained no candidates.
    #[error("Search space is empty")]
    EmptySearchSpace,
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
