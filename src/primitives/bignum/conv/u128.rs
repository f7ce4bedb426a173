//! Conversions between `BigNum` and 128-bit integers

use crate::primitives::bignum::core::{BigNum, WORD_BITS};

/// Converts a `u128` into a `BigNum` of at most four words.
impl From<u128> for BigNum {
    fn from(value: u128) -> Self {
        let words = (0..4)
            .map(|i| (value >> (i * WORD_BITS)) as u32)
            .collect();

        BigNum::from_raw(words)
    }
}

/// Attempts to convert a `BigNum` into a `u128`.
///
/// The conversion succeeds only if the upper bits beyond 128 are zero,
/// i.e. the value has at most four words.
impl TryFrom<&BigNum> for u128 {
    type Error = ();

    fn try_from(value: &BigNum) -> Result<Self, Self::Error> {
        if value.words.len() > 4 {
            return Err(());
        }

        Ok(value
            .words
            .iter()
            .rev()
            .fold(0u128, |acc, &word| (acc << WORD_BITS) | word as u128))
    }
}
