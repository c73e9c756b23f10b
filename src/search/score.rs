// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bucket maps and candidate scoring.
//!
//! A bucket map groups the key set by slot for one candidate parameter
//! triple; it is rebuilt from scratch for every candidate and never persisted
//! across candidates. Its score is compared lexicographically: lower maximum
//! bucket size first, lower average occupancy second. The utilized-bucket
//! count is reported but never ranked.

use hashbrown::HashMap;
use serde::Serialize;

use crate::hasher::HashParams;
use crate::keyset::KeySet;
use crate::search::error::{Result, SearchError};

/// Slot-to-identifiers grouping for one candidate parameter triple.
///
/// Identifiers are stored by dense index into the key set that built the
/// map.
#[derive(Debug, Clone)]
pub struct BucketMap {
    buckets: HashMap<u64, Vec<usize>>,
}

impl BucketMap {
    /// Group every identifier of the key set by its slot under `params`.
    pub fn build(params: &HashParams, keys: &KeySet) -> Self {
        let mut buckets: HashMap<u64, Vec<usize>> = HashMap::new();

        for (index, id) in keys.iter().enumerate() {
            buckets.entry(params.slot(id)).or_default().push(index);
        }

        Self { buckets }
    }

    /// Dense key indices occupying the given slot, if any.
    pub fn bucket(&self, slot: u64) -> Option<&[usize]> {
        self.buckets.get(&slot).map(Vec::as_slice)
    }

    /// Number of non-empty buckets.
    pub fn utilized(&self) -> usize {
        self.buckets.len()
    }

    /// Score this distribution.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::EmptyKeySet` if the map holds no buckets; the
    /// average over zero buckets is undefined and must not be silently
    /// reported as a score.
    pub fn score(&self) -> Result<CandidateScore> {
        let max_bucket = self
            .buckets
            .values()
            .map(Vec::len)
            .max()
            .ok_or(SearchError::EmptyKeySet)?;

        let utilized = self.buckets.len();
        let total: usize = self.buckets.values().map(Vec::len).sum();
        let avg_bucket = total as f64 / utilized as f64;

        Ok(CandidateScore {
            max_bucket,
            avg_bucket,
            utilized,
        })
    }
}

/// Collision statistics of one candidate's bucket distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateScore {
    /// Largest bucket cardinality (worst-case collision count)
    pub max_bucket: usize,

    /// Mean cardinality over non-empty buckets
    pub avg_bucket: f64,

    /// Number of non-empty buckets; informational only, never ranked
    pub utilized: usize,
}

impl CandidateScore {
    /// Strict-improvement ordering: lower `max_bucket` wins; among equal
    /// `max_bucket`, lower `avg_bucket` wins. Exact ties are not
    /// improvements, so the earlier candidate is retained.
    pub fn improves_on(&self, other: &CandidateScore) -> bool {
        self.max_bucket < other.max_bucket
            || (self.max_bucket == other.max_bucket && self.avg_bucket < other.avg_bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(max_bucket: usize, avg_bucket: f64) -> CandidateScore {
        CandidateScore {
            max_bucket,
            avg_bucket,
            utilized: 0,
        }
    }

    #[test]
    fn test_lower_max_bucket_improves() {
        assert!(score(1, 1.0).improves_on(&score(2, 1.0)));
        assert!(!score(2, 1.0).improves_on(&score(1, 1.5)));
    }

    #[test]
    fn test_avg_breaks_max_ties() {
        assert!(score(2, 1.1).improves_on(&score(2, 1.25)));
        assert!(!score(2, 1.25).improves_on(&score(2, 1.1)));
    }

    #[test]
    fn test_exact_tie_is_not_an_improvement() {
        assert!(!score(2, 1.25).improves_on(&score(2, 1.25)));
    }

    #[test]
    fn test_utilized_is_never_ranked() {
        let sparse = CandidateScore {
            max_bucket: 2,
            avg_bucket: 1.25,
            utilized: 4,
        };
        let dense = CandidateScore {
            max_bucket: 2,
            avg_bucket: 1.25,
            utilized: 100,
        };
        assert!(!sparse.improves_on(&dense));
        assert!(!dense.improves_on(&sparse));
    }

    #[test]
    fn test_build_groups_by_slot() {
        let keys = KeySet::from_names(&["AB", "AC"]).unwrap();
        let params = HashParams::new(3, 0, 128).unwrap();

        let map = BucketMap::build(&params, &keys);
        assert_eq!(map.utilized(), 2);
        assert_eq!(map.bucket(75), Some(&[0usize][..]));
        assert_eq!(map.bucket(99), Some(&[1usize][..]));
        assert_eq!(map.bucket(0), None);
    }

    #[test]
    fn test_score_collision_free_distribution() {
        let keys = KeySet::from_names(&["AB", "AC"]).unwrap();
        let params = HashParams::new(3, 0, 128).unwrap();

        let score = BucketMap::build(&params, &keys).score().unwrap();
        assert_eq!(score.max_bucket, 1);
        assert_eq!(score.avg_bucket, 1.0);
        assert_eq!(score.utilized, 2);
    }

    #[test]
    fn test_score_counts_collisions() {
        // Identifiers of length >= 5 sharing a five-character prefix always
        // collide, whatever the parameters.
        let keys = KeySet::from_names(&["ABCDE", "ABCDEF", "MIX"]).unwrap();
        let params = HashParams::new(7919, 11, 128).unwrap();

        let score = BucketMap::build(&params, &keys).score().unwrap();
        assert_eq!(score.max_bucket, 2);
        assert_eq!(score.utilized, 2);
        assert!((score.avg_bucket - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_rejects_empty_map() {
        let empty = BucketMap {
            buckets: HashMap::new(),
        };
        assert_eq!(empty.score().unwrap_err(), SearchError::EmptyKeySet);
    }
}
