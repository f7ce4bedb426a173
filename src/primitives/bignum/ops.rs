//! Bitwise, shift and additive operations for `BigNum`
//!
//! Every operation borrows its operands and builds a new, normalized
//! result. Operands of different lengths are zero-extended to the longer
//! word count before the word-by-word loop runs.
//!
//! Growth is always explicit: a carry out of the most significant word
//! (addition, left shift) is stored in an appended word instead of being
//! truncated.
//!
//! The operator traits (`^`, `|`, `&`, `!`, `<<`, `>>`, `+`, `-`) forward to
//! the named methods and are implemented for both owned and borrowed
//! operands.

use crate::primitives::bignum::{
    BigNumError,
    core::{BigNum, WORD_BITS, normalize_words},
};

use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Shl, Shr, Sub};

use tracing::debug;

impl BigNum {
    /// Bitwise XOR of two values.
    pub fn xor(&self, other: &BigNum) -> BigNum {
        zip_words(self, other, |l, r| l ^ r)
    }

    /// Bitwise OR of two values.
    pub fn or(&self, other: &BigNum) -> BigNum {
        zip_words(self, other, |l, r| l | r)
    }

    /// Bitwise AND of two values.
    ///
    /// Words beyond the shorter operand are ANDed with an implicit zero
    /// word and therefore vanish.
    pub fn and(&self, other: &BigNum) -> BigNum {
        zip_words(self, other, |l, r| l & r)
    }

    /// One's complement within an explicit width of `bits` bits.
    ///
    /// Bits of `self` at or above `bits` are discarded, so the result is
    /// always below `2^bits`. A width of zero yields zero.
    pub fn invert(&self, bits: usize) -> BigNum {
        if bits == 0 {
            return BigNum::zero();
        }

        let len = bits.div_ceil(WORD_BITS);
        let mut words: Vec<u32> = (0..len)
            .map(|i| !self.words.get(i).copied().unwrap_or(0))
            .collect();

        let tail = bits % WORD_BITS;
        if tail != 0 {
            words[len - 1] &= (1u32 << tail) - 1;
        }

        BigNum::from_raw(words)
    }

    /// One's complement at the current word width (`32 · word_len()` bits).
    ///
    /// The word count is kept before normalization; the result is then
    /// normalized like any other value, so a second complement only
    /// restores the original when no high words were stripped. Use
    /// [`BigNum::invert`] with a fixed width for an exact involution.
    pub fn invert_words(&self) -> BigNum {
        self.invert(self.words.len() * WORD_BITS)
    }

    /// Logical left shift by `n` bits.
    ///
    /// The result grows by as many words as needed; no bit is lost.
    pub fn shift_left(&self, n: usize) -> BigNum {
        if n == 0 || self.is_zero() {
            return self.clone();
        }

        let word_shift = n / WORD_BITS;
        let bit_shift = (n % WORD_BITS) as u32;

        let mut words = Vec::with_capacity(self.words.len() + word_shift + 1);
        words.resize(word_shift, 0);

        if bit_shift == 0 {
            words.extend_from_slice(&self.words);
        } else {
            let mut carry = 0u32;

            for &word in self.words.iter() {
                words.push((word << bit_shift) | carry);
                carry = word >> (WORD_BITS as u32 - bit_shift);
            }

            if carry != 0 {
                words.push(carry);
            }
        }

        BigNum::from_raw(words)
    }

    /// Logical right shift by `n` bits.
    ///
    /// Bits shifted out of the least significant word are dropped. Shifting
    /// by at least the bit length yields zero.
    pub fn shift_right(&self, n: usize) -> BigNum {
        if n == 0 {
            return self.clone();
        }

        let word_shift = n / WORD_BITS;
        let bit_shift = (n % WORD_BITS) as u32;

        if word_shift >= self.words.len() {
            return BigNum::zero();
        }

        let src = &self.words[word_shift..];

        if bit_shift == 0 {
            return BigNum::from_raw(src.to_vec());
        }

        let words = src
            .iter()
            .enumerate()
            .map(|(i, &word)| {
                let high = src
                    .get(i + 1)
                    .map_or(0, |&next| next << (WORD_BITS as u32 - bit_shift));

                (word >> bit_shift) | high
            })
            .collect();

        BigNum::from_raw(words)
    }

    /// Sum of two values.
    ///
    /// The carry is accumulated in a 64-bit value, and a final carry is
    /// stored in one extra word.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &BigNum) -> BigNum {
        let (long, short) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut words = Vec::with_capacity(long.words.len() + 1);
        let mut carry = 0u64;

        for (i, &a) in long.words.iter().enumerate() {
            let b = short.words.get(i).copied().unwrap_or(0);
            let sum = a as u64 + b as u64 + carry;

            words.push(sum as u32);
            carry = sum >> WORD_BITS;
        }

        if carry != 0 {
            words.push(carry as u32);
        }

        BigNum::from_raw(words)
    }

    /// Difference `self − other`.
    ///
    /// # Errors
    /// Returns [`BigNumError::SubtractionUnderflow`] when `other > self`.
    /// The result never wraps.
    pub fn checked_sub(&self, other: &BigNum) -> Result<BigNum, BigNumError> {
        if self < other {
            debug!(
                minuend_bits = self.bits(),
                subtrahend_bits = other.bits(),
                "rejected subtraction underflow"
            );

            return Err(BigNumError::SubtractionUnderflow);
        }

        let mut words = self.words.clone();
        sub_words_in_place(&mut words, &other.words);

        Ok(BigNum { words })
    }
}

/// Applies `op` word by word over the zero-extended operands.
fn zip_words(lhs: &BigNum, rhs: &BigNum, op: impl Fn(u32, u32) -> u32) -> BigNum {
    let len = lhs.words.len().max(rhs.words.len());

    let words = (0..len)
        .map(|i| {
            let l = lhs.words.get(i).copied().unwrap_or(0);
            let r = rhs.words.get(i).copied().unwrap_or(0);

            op(l, r)
        })
        .collect();

    BigNum::from_raw(words)
}

/// Subtracts `rhs` from `lhs` in place and renormalizes `lhs`.
///
/// Both slices must be normalized and `lhs >= rhs` must hold; beyond the
/// length of `rhs` only the borrow is subtracted.
pub(crate) fn sub_words_in_place(lhs: &mut Vec<u32>, rhs: &[u32]) {
    let mut borrow = 0u64;

    for (i, word) in lhs.iter_mut().enumerate() {
        let a = *word as u64;
        let sub = rhs.get(i).copied().unwrap_or(0) as u64 + borrow;

        if a >= sub {
            *word = (a - sub) as u32;
            borrow = 0;
        } else {
            *word = (a + (1u64 << WORD_BITS) - sub) as u32;
            borrow = 1;
        }
    }

    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");

    normalize_words(lhs);
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $imp:expr) => {
        impl $trait<&BigNum> for &BigNum {
            type Output = BigNum;

            fn $method(self, rhs: &BigNum) -> BigNum {
                ($imp)(self, rhs)
            }
        }

        impl $trait<BigNum> for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: BigNum) -> BigNum {
                ($imp)(&self, &rhs)
            }
        }

        impl $trait<&BigNum> for BigNum {
            type Output = BigNum;

            fn $method(self, rhs: &BigNum) -> BigNum {
                ($imp)(&self, rhs)
            }
        }
    };
}

fn sub_or_panic(lhs: &BigNum, rhs: &BigNum) -> BigNum {
    assert!(lhs >= rhs, "subtraction underflow");

    let mut words = lhs.words.clone();
    sub_words_in_place(&mut words, &rhs.words);

    BigNum { words }
}

forward_binop!(BitXor, bitxor, BigNum::xor);
forward_binop!(BitOr, bitor, BigNum::or);
forward_binop!(BitAnd, bitand, BigNum::and);
forward_binop!(Add, add, BigNum::add);

// Panics on underflow; use `checked_sub` to handle it.
forward_binop!(Sub, sub, sub_or_panic);

/// Complement at the current word width, see [`BigNum::invert_words`].
impl Not for &BigNum {
    type Output = BigNum;

    fn not(self) -> BigNum {
        self.invert_words()
    }
}

impl Not for BigNum {
    type Output = BigNum;

    fn not(self) -> BigNum {
        self.invert_words()
    }
}

impl Shl<usize> for &BigNum {
    type Output = BigNum;

    fn shl(self, rhs: usize) -> BigNum {
        self.shift_left(rhs)
    }
}

impl Shl<usize> for BigNum {
    type Output = BigNum;

    fn shl(self, rhs: usize) -> BigNum {
        self.shift_left(rhs)
    }
}

impl Shr<usize> for &BigNum {
    type Output = BigNum;

    fn shr(self, rhs: usize) -> BigNum {
        self.shift_right(rhs)
    }
}

impl Shr<usize> for BigNum {
    type Output = BigNum;

    fn shr(self, rhs: usize) -> BigNum {
        self.shift_right(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_in_place_borrows_across_words() {
        let mut words = vec![0, 0, 1];
        sub_words_in_place(&mut words, &[1]);

        assert_eq!(words, vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn sub_in_place_to_zero() {
        let mut words = vec![7, 9];
        sub_words_in_place(&mut words, &[7, 9]);

        assert_eq!(words, vec![0]);
    }

    #[test]
    fn invert_masks_partial_top_word() {
        let n = BigNum::from_words(vec![0b1010]);
        assert_eq!(n.invert(4).words(), &[0b0101]);
        assert_eq!(n.invert(36).words(), &[!0b1010u32, 0xF]);
    }
}
