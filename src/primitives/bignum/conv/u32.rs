//! Conversions between `BigNum` and 32-bit words
//!
//! A single `u32` maps to a one-word value. Word sequences are read and
//! written least significant word first, matching the internal layout.

use crate::primitives::bignum::core::BigNum;

/// Converts a `u32` into a single-word `BigNum`.
impl From<u32> for BigNum {
    fn from(value: u32) -> Self {
        BigNum { words: vec![value] }
    }
}

/// Attempts to convert a `BigNum` into a `u32`.
///
/// The conversion succeeds only if the value fits in one word.
impl TryFrom<&BigNum> for u32 {
    type Error = ();

    fn try_from(value: &BigNum) -> Result<Self, Self::Error> {
        match value.words.as_slice() {
            [word] => Ok(*word),
            _ => Err(()),
        }
    }
}

/// Builds a `BigNum` from little-endian words, normalizing them.
impl From<Vec<u32>> for BigNum {
    fn from(value: Vec<u32>) -> Self {
        BigNum::from_raw(value)
    }
}

/// Builds a `BigNum` from little-endian words, normalizing them.
impl From<&[u32]> for BigNum {
    fn from(value: &[u32]) -> Self {
        BigNum::from_raw(value.to_vec())
    }
}

/// Returns the normalized little-endian words of a `BigNum`.
impl From<BigNum> for Vec<u32> {
    fn from(value: BigNum) -> Self {
        value.words
    }
}
