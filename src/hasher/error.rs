// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for hash parameter construction.

use crate::hasher::params::MAX_SHIFT;

/// Errors that can occur while constructing a hash parameter triple.
///
/// All of these are configuration-time rejections; once a `HashParams`
/// value exists, hashing cannot fail.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum HashParamsError {
    /// The multiplier must be a positive integer.
    #[error("Multiplier must be positive")]
    ZeroMultiplier,

    /// An even multiplier wastes a bit of entropy in the multiply-shift step.
    #[error("Multiplier must be odd: got {0}")]
    EvenMultiplier(u64),

    /// The shift must stay within the accumulator's useful bit range.
    #[error("Shift must be at most {MAX_SHIFT}: got {0}")]
    ShiftOutOfRange(u32),

    /// The modulus must be a power of two so reduction is a bit mask.
    #[error("Modulus must be a power of two of at least 2: got {0}")]
    InvalidModulus(u64),
}

/// Result type for hash parameter operations
pub type Result<T> = std::result::Result<T, HashParamsError>;
