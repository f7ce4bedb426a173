//! Conversions between `BigNum` and 64-bit integers

use crate::primitives::bignum::core::{BigNum, WORD_BITS};

/// Converts a `u64` into a `BigNum` of at most two words.
impl From<u64> for BigNum {
    fn from(value: u64) -> Self {
        BigNum::from_raw(vec![value as u32, (value >> WORD_BITS) as u32])
    }
}

/// Attempts to convert a `BigNum` into a `u64`.
///
/// The conversion succeeds only if the value has at most two words.
impl TryFrom<&BigNum> for u64 {
    type Error = ();

    fn try_from(value: &BigNum) -> Result<Self, Self::Error> {
        if value.words.len() > 2 {
            return Err(());
        }

        Ok(value
            .words
            .iter()
            .rev()
            .fold(0u64, |acc, &word| (acc << WORD_BITS) | word as u64))
    }
}
