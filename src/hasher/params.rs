// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The tunable constants of the multiply-shift-reduce hash.

use serde::Serialize;

use crate::hasher::error::{HashParamsError, Result};

/// Largest permitted right-shift.
///
/// The folded accumulator occupies fewer than 29 bits, so shifting past 22
/// bits would discard all of the multiplied low entropy for small
/// multipliers.
pub const MAX_SHIFT: u32 = 22;

/// One candidate hash function instance: `((acc * multiplier) >> shift) % modulus`.
///
/// Construction validates the triple (odd positive multiplier, shift in
/// `[0, MAX_SHIFT]`, power-of-two modulus), so an existing value always
/// denotes a usable hash function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HashParams {
    multiplier: u64,
    shift: u32,
    modulus: u64,
}

impl HashParams {
    /// Create a validated hash parameter triple.
    ///
    /// # Errors
    ///
    /// Returns a `HashParamsError` if the multiplier is zero or even, the
    /// shift exceeds [`MAX_SHIFT`], or the modulus is not a power of two of
    /// at least 2.
    pub fn new(multiplier: u64, shift: u32, modulus: u64) -> Result<Self> {
        if multiplier == 0 {
            return Err(HashParamsError::ZeroMultiplier);
        }

        if multiplier % 2 == 0 {
            return Err(HashParamsError::EvenMultiplier(multiplier));
        }

        if shift > MAX_SHIFT {
            return Err(HashParamsError::ShiftOutOfRange(shift));
        }

        if modulus < 2 || !modulus.is_power_of_two() {
            return Err(HashParamsError::InvalidModulus(modulus));
        }

        Ok(Self {
            multiplier,
            shift,
            modulus,
        })
    }

    /// The odd multiplier of the mixing step.
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// The right-shift of the mixing step.
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// The power-of-two table size.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Bit mask equivalent of the modulus reduction.
    pub(crate) fn slot_mask(&self) -> u64 {
        self.modulus - 1
    }
}
