// Copyright (c) 2026 Param Hash Search Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character encoding and slot computation.
//!
//! The hash folds at most the first five characters of an identifier into a
//! base-36 accumulator, injects the capped length as low-order entropy, then
//! applies the multiply-shift-mask mixing step. Five characters packed into a
//! single word keep the runtime evaluation to a handful of integer ops, with
//! no loop proportional to arbitrary string length.

use crate::hasher::params::HashParams;
use crate::keyset::Identifier;

/// Letters `A-Z` encode as 10..=35.
const LETTER_OFFSET: u8 = b'A' - 10;

/// Digits `0-9` encode as 0..=9.
const DIGIT_OFFSET: u8 = b'0';

/// Number of leading characters that contribute to the accumulator.
const FOLDED_CHARS: usize = 5;

/// Map one identifier byte to its 6-bit value.
///
/// `Identifier` validation guarantees the byte is an ASCII uppercase letter
/// or digit, so this is total.
#[inline]
fn encode(byte: u8) -> u64 {
    if byte.is_ascii_uppercase() {
        u64::from(byte - LETTER_OFFSET)
    } else {
        u64::from(byte - DIGIT_OFFSET)
    }
}

/// Fold the first up-to-five characters and the capped length into one word.
///
/// Returns `(acc << 3) + n` where `acc` is the base-36 fold and `n` is the
/// index of the last character consumed. Identifiers that share a prefix but
/// differ in (capped) length still diverge through the low three bits.
#[inline]
fn fold(id: &Identifier) -> u64 {
    let bytes = id.as_str().as_bytes();

    let mut acc: u64 = 0;
    let mut last: u64 = 0;
    for (index, &byte) in bytes.iter().take(FOLDED_CHARS).enumerate() {
        acc = acc * 36 + encode(byte);
        last = index as u64;
    }

    // acc < 36^5 < 2^27, so the shifted value stays under 2^30.
    (acc << 3) + last
}

impl HashParams {
    /// Hash an identifier into a slot in `[0, modulus)`.
    ///
    /// Pure, total, and deterministic: the same identifier and parameters
    /// always produce the same slot.
    pub fn slot(&self, id: &Identifier) -> u64 {
        let mixed = fold(id).wrapping_mul(self.multiplier()) >> self.shift();
        mixed & self.slot_mask()
    }
}
