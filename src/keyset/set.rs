// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Validated identifiers and the immutable key set they form.

use std::fmt;
use std::path::Path;

use crate::keyset::error::{KeySetError, Result};
use crate::keyset::params::SYNTH_PARAM_NAMES;

/// A validated parameter name.
///
/// Construction rejects the empty string and any character outside ASCII
/// `A-Z` / `0-9`, so every existing `Identifier` can be hashed without a
/// fallible character-class check in the hot path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Create a validated identifier from a name.
    ///
    /// # Errors
    ///
    /// Returns `KeySetError::EmptyIdentifier` for the empty string and
    /// `KeySetError::InvalidCharacter` for the first character outside the
    /// uppercase-letter / digit classes.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(KeySetError::EmptyIdentifier);
        }

        if let Some(character) = name
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit()))
        {
            return Err(KeySetError::InvalidCharacter { name, character });
        }

        Ok(Self(name))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the identifier.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; retained for clippy's `len` convention.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An ordered, non-empty, duplicate-free collection of identifiers.
///
/// The key set is fixed for the lifetime of a search run; the dense index of
/// an identifier is its position in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySet {
    keys: Vec<Identifier>,
}

impl KeySet {
    /// Create a key set from already-validated identifiers.
    ///
    /// # Errors
    ///
    /// Returns `KeySetError::Empty` for an empty list and
    /// `KeySetError::Duplicate` if any identifier appears twice.
    pub fn new(keys: Vec<Identifier>) -> Result<Self> {
        if keys.is_empty() {
            return Err(KeySetError::Empty);
        }

        let mut seen = hashbrown::HashSet::with_capacity(keys.len());
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(KeySetError::Duplicate(key.as_str().to_string()));
            }
        }
        drop(seen);

        Ok(Self { keys })
    }

    /// Create a key set from raw names, validating each one.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let keys = names
            .iter()
            .map(|name| Identifier::new(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::new(keys)
    }

    /// The compiled-in synthesizer parameter name table.
    pub fn synth_params() -> Self {
        // The table is pure data verified by tests; see keyset::params.
        Self::from_names(SYNTH_PARAM_NAMES)
            .expect("compiled-in parameter table failed validation")
    }

    /// Load a key set from a file with one name per line.
    ///
    /// Blank lines and surrounding whitespace are ignored; every remaining
    /// line must be a valid identifier.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| KeySetError::FileRead(format!("{}: {e}", path.as_ref().display())))?;

        let names: Vec<&str> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        Self::from_names(&names)
    }

    /// Number of identifiers in the set.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a key set cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the identifiers in dense-index order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.keys.iter()
    }

    /// The identifier at the given dense index, if any.
    pub fn get(&self, index: usize) -> Option<&Identifier> {
        self.keys.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_identifier_accepts_uppercase_and_digits() {
        for name in ["CVOL", "F10RND", "A", "0", "MF2QIA"] {
            let id = Identifier::new(name).unwrap();
            assert_eq!(id.as_str(), name);
        }
    }

    #[test_case("" => KeySetError::EmptyIdentifier; "empty string")]
    #[test_case("cvol" => KeySetError::InvalidCharacter { name: "cvol".to_string(), character: 'c' }; "lowercase")]
    #[test_case("C VOL" => KeySetError::InvalidCharacter { name: "C VOL".to_string(), character: ' ' }; "space")]
    #[test_case("CV-1" => KeySetError::InvalidCharacter { name: "CV-1".to_string(), character: '-' }; "punctuation")]
    fn test_identifier_rejects(name: &str) -> KeySetError {
        Identifier::new(name).unwrap_err()
    }

    #[test]
    fn test_key_set_rejects_empty_list() {
        assert_eq!(KeySet::new(Vec::new()).unwrap_err(), KeySetError::Empty);
    }

    #[test]
    fn test_key_set_rejects_duplicates() {
        let err = KeySet::from_names(&["MIX", "PM", "MIX"]).unwrap_err();
        assert_eq!(err, KeySetError::Duplicate("MIX".to_string()));
    }

    #[test]
    fn test_key_set_preserves_order() {
        let keys = KeySet::from_names(&["MIX", "PM", "FM"]).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.get(0).unwrap().as_str(), "MIX");
        assert_eq!(keys.get(2).unwrap().as_str(), "FM");
        assert!(keys.get(3).is_none());
    }

    #[test]
    fn test_synth_params_table_loads() {
        let keys = KeySet::synth_params();
        assert_eq!(keys.len(), SYNTH_PARAM_NAMES.len());
        assert_eq!(keys.get(0).unwrap().as_str(), "AM");
    }

    #[test]
    fn test_from_file_skips_blank_lines() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MIX\n\n  PM  \nFM").unwrap();

        let keys = KeySet::from_file(file.path()).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.get(1).unwrap().as_str(), "PM");
    }

    #[test]
    fn test_from_file_rejects_invalid_name() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MIX\nbad-name").unwrap();

        assert!(matches!(
            KeySet::from_file(file.path()).unwrap_err(),
            KeySetError::InvalidCharacter { .. }
        ));
    }

    #[test]
    fn test_from_file_missing_file() {
        assert!(matches!(
            KeySet::from_file("/nonexistent/keys.txt").unwrap_err(),
            KeySetError::FileRead(_)
        ));
    }
}
