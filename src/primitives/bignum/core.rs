//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines `BigNum`, an unsigned integer of unbounded size
//! stored as a sequence of 32-bit words.
//!
//! Unlike the fixed-size primitives, a `BigNum` grows and shrinks with its
//! value. The word sequence is kept in **normalized form** at all times:
//! - it is never empty
//! - it never ends with a zero word, except for the value zero itself,
//!   which is exactly one zero word
//!
//! Every constructor and every operation re-establishes this invariant
//! before returning, so comparisons and equality can work directly on the
//! stored words.
//!
//! The internal representation is little-endian at the word level: index
//! zero holds the least significant word.

use std::cmp::Ordering;

/// Width of a single storage word, in bits.
pub const WORD_BITS: usize = 32;

/// Number of hexadecimal digits encoded by a single storage word.
pub const HEX_DIGITS_PER_WORD: usize = WORD_BITS / 4;

/// Arbitrary-precision unsigned integer.
///
/// The value is `Σ words[i] · 2^(32·i)`. Each instance owns its word
/// buffer exclusively; cloning performs a deep copy, and all operations
/// borrow their operands and return a fresh value.
///
/// Equality and hashing are derived from the normalized words and are
/// therefore value-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigNum {
    pub(crate) words: Vec<u32>,
}

impl BigNum {
    /// The value zero.
    pub fn zero() -> Self {
        BigNum { words: vec![0] }
    }

    /// The value one.
    pub fn one() -> Self {
        BigNum { words: vec![1] }
    }

    /// Builds a value from little-endian words (least significant first).
    ///
    /// Redundant most-significant zero words are removed, and an empty
    /// sequence is read as zero.
    pub fn from_words(words: Vec<u32>) -> Self {
        Self::from_raw(words)
    }

    /// Returns `2^bits − 1`, the value with the low `bits` bits set.
    pub fn all_ones(bits: usize) -> Self {
        BigNum::zero().invert(bits)
    }

    pub(crate) fn from_raw(mut words: Vec<u32>) -> Self {
        normalize_words(&mut words);
        BigNum { words }
    }

    /// Returns the little-endian word sequence.
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Number of stored words. Always at least one.
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.words == [0]
    }

    /// Number of significant bits; zero has a bit length of zero.
    pub fn bits(&self) -> usize {
        let top = self.words[self.words.len() - 1];

        (self.words.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
    }

    /// Counts the zero bits above the most significant one bit, within the
    /// current word width.
    ///
    /// Zero yields `32`, a single empty word.
    pub fn leading_zeros(&self) -> u32 {
        self.words[self.words.len() - 1].leading_zeros()
    }

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Bits beyond the stored words read as zero.
    pub fn bit(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| (word >> (index % WORD_BITS)) & 1 == 1)
    }

    /// Returns `true` when `self >= other`.
    ///
    /// The word counts are compared first (a longer normalized value is
    /// always larger), then the words from most significant down.
    pub fn compare_greater_or_equal(&self, other: &BigNum) -> bool {
        cmp_words(&self.words, &other.words) != Ordering::Less
    }
}

/// The default value is zero.
impl Default for BigNum {
    fn default() -> Self {
        BigNum::zero()
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_words(&self.words, &other.words)
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Strips most-significant zero words, keeping at least one word.
pub(crate) fn normalize_words(words: &mut Vec<u32>) {
    while words.len() > 1 && words[words.len() - 1] == 0 {
        words.pop();
    }

    if words.is_empty() {
        words.push(0);
    }
}

/// Orders two normalized word sequences by value.
pub(crate) fn cmp_words(lhs: &[u32], rhs: &[u32]) -> Ordering {
    lhs.len()
        .cmp(&rhs.len())
        .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_high_zero_words() {
        let n = BigNum::from_words(vec![5, 0, 0]);
        assert_eq!(n.words(), &[5]);

        let z = BigNum::from_words(vec![0, 0, 0]);
        assert_eq!(z.words(), &[0]);

        let empty = BigNum::from_words(Vec::new());
        assert_eq!(empty, BigNum::zero());
    }

    #[test]
    fn normalization_keeps_inner_zero_words() {
        let n = BigNum::from_words(vec![0, 0, 7]);
        assert_eq!(n.words(), &[0, 0, 7]);
        assert_eq!(n.word_len(), 3);
    }

    #[test]
    fn bit_length_and_leading_zeros() {
        assert_eq!(BigNum::zero().bits(), 0);
        assert_eq!(BigNum::zero().leading_zeros(), 32);
        assert_eq!(BigNum::one().bits(), 1);

        let n = BigNum::from_words(vec![0, 0x10]);
        assert_eq!(n.bits(), 37);
        assert_eq!(n.leading_zeros(), 27);
        assert!(n.bit(36));
        assert!(!n.bit(35));
        assert!(!n.bit(500));
    }

    #[test]
    fn word_order_comparison() {
        assert_eq!(cmp_words(&[0, 1], &[u32::MAX]), Ordering::Greater);
        assert_eq!(cmp_words(&[1, 2], &[2, 1]), Ordering::Greater);
        assert_eq!(cmp_words(&[3, 4], &[3, 4]), Ordering::Equal);
        assert_eq!(cmp_words(&[0], &[1]), Ordering::Less);
    }
}
