//! Hash constant search library.
//!
//! This library computes compact, collision-minimizing hash constants for a
//! fixed set of short synthesizer parameter names, so the consuming native
//! codebase can resolve a parameter name to a dense index with a handful of
//! integer operations and a tiny compiled-in lookup table.
//!
//! The hash itself is a multiply-shift-reduce mix over the first five
//! characters of a name ([`hasher`]); the interesting part is the offline
//! search ([`search`]) that discovers the multiplier, shift, and table size
//! minimizing worst-case bucket collisions over the whole key set
//! ([`keyset`]).
//!
//! # Architecture
//!
//! - Validated inputs: identifiers and configurations are checked at
//!   construction, so the search hot path is infallible
//! - A pure `evaluate(candidate, key_set) -> score` core with a fold over
//!   the candidate space keeping the minimum under a custom ordering
//! - Strict-improvement progress reporting through a sink trait
//! - Deterministic: identical inputs always yield identical results

// Re-export public modules
pub mod config;
pub mod error;
pub mod hasher;
pub mod keyset;
pub mod search;

/// Version information for the hash constant search tool.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
