// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Search engine for collision-minimizing hash constants.
//!
//! The engine drives everything: it enumerates candidate `(multiplier,
//! shift, modulus)` triples, evaluates each against the full key set with
//! the [`crate::hasher`] slot function, and retains the best candidate under
//! a lexicographic ordering (minimize worst-case bucket size, then average
//! bucket occupancy). Strict improvements are streamed to a progress sink as
//! they are found; the search always runs its configured space to
//! exhaustion.
//!
//! # Example
//!
//! ```
//! use param_hash_search_lib::config::SearchConfig;
//! use param_hash_search_lib::keyset::KeySet;
//! use param_hash_search_lib::search::{RecordingSink, SearchEngine};
//!
//! let keys = KeySet::from_names(&["MIX", "PM", "FM", "AM"]).unwrap();
//! let config = SearchConfig {
//!     max_multiplier_index: 20,
//!     max_shift: 8,
//!     modulus_candidates: vec![128],
//! };
//!
//! let engine = SearchEngine::new(keys, config).unwrap();
//! let mut sink = RecordingSink::default();
//! let best = engine.run(&mut sink).unwrap();
//!
//! assert!(best.score.max_bucket >= 1);
//! assert_eq!(sink.records.last().unwrap(), &best);
//! ```

mod engine;
mod error;
mod score;

// Re-exports
pub use engine::{BestRecord, ProgressSink, RecordingSink, SearchEngine, TracingSink};
pub use error::{Result, SearchError};
pub use score::{BucketMap, CandidateScore};

#[cfg(test)]
mod tests;
