// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The multiply-shift-reduce hash over short parameter names.
//!
//! This module provides the candidate hash function the search engine
//! evaluates: a deterministic map from an identifier to a slot in
//! `[0, modulus)` using a handful of integer operations. The three constants
//! (multiplier, shift, modulus) are not derived analytically; they are
//! discovered offline by [`crate::search`] because the key set is small,
//! fixed, and known at build time.
//!
//! # Example
//!
//! ```
//! use param_hash_search_lib::hasher::HashParams;
//! use param_hash_search_lib::keyset::Identifier;
//!
//! let params = HashParams::new(23781, 9, 128).unwrap();
//! let slot = params.slot(&Identifier::new("CVOL").unwrap());
//! assert!(slot < 128);
//! ```

mod error;
mod hash;
mod params;

// Re-exports
pub use error::{HashParamsError, Result};
pub use params::{HashParams, MAX_SHIFT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyset::Identifier;

    #[test]
    fn test_public_surface() {
        let params = HashParams::new(3, 2, 256).unwrap();
        let id = Identifier::new("POLY").unwrap();
        assert!(params.slot(&id) < params.modulus());
    }

    #[test]
    fn test_rejects_shift_past_max() {
        assert_eq!(
            HashParams::new(3, MAX_SHIFT + 1, 128).unwrap_err(),
            HashParamsError::ShiftOutOfRange(MAX_SHIFT + 1)
        );
    }
}
