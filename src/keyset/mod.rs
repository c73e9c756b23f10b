// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The fixed key set the hash constants are searched for.
//!
//! A key set is an ordered, immutable collection of short parameter-name
//! identifiers. Identifiers are validated at construction (ASCII `A-Z` and
//! `0-9` only), which keeps the hash computation itself total and infallible.
//! The compiled-in synthesizer table lives in [`params`]; a one-name-per-line
//! key file can be supplied instead to search against a newer snapshot
//! without rebuilding.
//!
//! # Example
//!
//! ```
//! use param_hash_search_lib::keyset::KeySet;
//!
//! let keys = KeySet::from_names(&["MIX", "PM", "FM"]).unwrap();
//! assert_eq!(keys.len(), 3);
//!
//! // The full synthesizer parameter table is compiled in.
//! assert!(KeySet::synth_params().len() > 600);
//! ```

mod error;
pub mod params;
mod set;

// Re-exports
pub use error::{KeySetError, Result};
pub use set::{Identifier, KeySet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_public_api() {
        let keys = KeySet::from_names(&["CVOL", "CC1"]).unwrap();
        let names: Vec<&str> = keys.iter().map(Identifier::as_str).collect();
        assert_eq!(names, vec!["CVOL", "CC1"]);
    }
}
