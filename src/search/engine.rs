// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The exhaustive candidate search.
//!
//! The engine enumerates parameter triples in a fixed nested order (outer:
//! multiplier, middle: shift, inner: modulus), scores each against the full
//! key set, and keeps the single best-so-far record under the strict
//! lexicographic ordering of [`CandidateScore`]. Every strict improvement is
//! pushed to a [`ProgressSink`]; the search always runs the configured space
//! to exhaustion, and the final record is the answer.
//!
//! The whole sweep is single-threaded and read-only over the key set. The
//! outer multiplier dimension could be sharded across threads, with per-shard
//! bests merged under the same ordering as a final reduction; nothing here
//! requires it for the fixed key sets this tool targets.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::config::{SearchConfig, Validate};
use crate::hasher::HashParams;
use crate::keyset::KeySet;
use crate::search::error::{Result, SearchError};
use crate::search::score::{BucketMap, CandidateScore};

/// The best parameter triple and score observed so far in a run.
///
/// Once updated, the record is monotonically non-worsening for the remainder
/// of the run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRecord {
    /// The winning parameter triple
    pub params: HashParams,

    /// Its bucket distribution score
    pub score: CandidateScore,

    /// Wall-clock time from search start to this improvement
    pub elapsed: Duration,
}

/// Receives every strict improvement as the search finds it.
pub trait ProgressSink {
    /// Called once per strict improvement, in discovery order.
    fn report(&mut self, record: &BestRecord);
}

/// Logs one structured line per strict improvement.
#[derive(Debug, Default)]
pub struct TracingSink;

impl ProgressSink for TracingSink {
    fn report(&mut self, record: &BestRecord) {
        info!(
            elapsed_secs = record.elapsed.as_secs_f64(),
            multiplier = record.params.multiplier(),
            shift = record.params.shift(),
            modulus = record.params.modulus(),
            max_bucket = record.score.max_bucket,
            avg_bucket = record.score.avg_bucket,
            utilized = record.score.utilized,
            "improved hash constants"
        );
    }
}

/// Collects every reported record; test and inspection support.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Reported records in discovery order
    pub records: Vec<BestRecord>,
}

impl ProgressSink for RecordingSink {
    fn report(&mut self, record: &BestRecord) {
        self.records.push(record.clone());
    }
}

/// Multiplier for the given base index; `2 * index + 1` is always odd, which
/// the multiply-shift step needs to avoid wasting a bit of entropy.
#[inline]
pub(crate) fn multiplier_for_index(index: u64) -> u64 {
    2 * index + 1
}

/// Exhaustive search over the configured candidate space.
#[derive(Debug)]
pub struct SearchEngine {
    keys: KeySet,
    config: SearchConfig,
}

impl SearchEngine {
    /// Create an engine over a key set and a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidConfiguration` if the configuration
    /// fails validation; nothing is enumerated in that case.
    pub fn new(keys: KeySet, config: SearchConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SearchError::InvalidConfiguration(e.to_string()))?;

        Ok(Self { keys, config })
    }

    /// The key set this engine searches over.
    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    /// The configuration this engine enumerates.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search to exhaustion, reporting each strict improvement.
    ///
    /// The first candidate always becomes the first report; afterwards a
    /// candidate is reported only if it strictly improves on the best so
    /// far. Exact ties keep the earlier candidate, which makes the whole run
    /// deterministic for a fixed key set and configuration.
    pub fn run(&self, sink: &mut dyn ProgressSink) -> Result<BestRecord> {
        let start = Instant::now();
        let mut best: Option<BestRecord> = None;

        for index in 1..self.config.max_multiplier_index {
            let multiplier = multiplier_for_index(index);

            for shift in 0..=self.config.max_shift {
                for &modulus in &self.config.modulus_candidates {
                    // Candidate domains are pre-validated, so a constructor
                    // failure here is a configuration bug worth surfacing.
                    let params = HashParams::new(multiplier, shift, modulus)
                        .map_err(|e| SearchError::InvalidConfiguration(e.to_string()))?;

                    let score = BucketMap::build(&params, &self.keys).score()?;

                    let improved = best
                        .as_ref()
                        .map_or(true, |record| score.improves_on(&record.score));
                    if improved {
                        let record = BestRecord {
                            params,
                            score,
                            elapsed: start.elapsed(),
                        };
                        sink.report(&record);
                        best = Some(record);
                    }
                }
            }
        }

        best.ok_or(SearchError::EmptySearchSpace)
    }
}
