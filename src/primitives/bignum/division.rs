//! Division and remainder for `BigNum`
//!
//! Two algorithms are provided:
//!
//! - **shift-subtract long division** (`checked_div_rem`, `checked_rem`,
//!   `checked_div`, and the `/` and `%` operators). The divisor is aligned
//!   to the bit length of the dividend, subtracted whenever it does not
//!   exceed the running remainder, and moved down one bit per step. The
//!   cost is quadratic in the bit length.
//!
//! - **repeated subtraction** (`rem_by_subtraction`). Correct but linear in
//!   the quotient, so only usable for small quotients. It serves as an
//!   independent reference for the long-division path.
//!
//! A zero divisor is always an error for the checked methods and a panic
//! for the operators; it is never turned into a zero result.

use crate::primitives::bignum::{
    BigNumError,
    core::{BigNum, WORD_BITS, cmp_words, normalize_words},
    ops::sub_words_in_place,
};

use std::cmp::Ordering;
use std::ops::{Div, Rem};

use tracing::{debug, trace_span};

impl BigNum {
    /// Quotient and remainder of `self / divisor`.
    ///
    /// The pair satisfies `self == quotient · divisor + remainder` and
    /// `remainder < divisor`.
    ///
    /// # Errors
    /// Returns [`BigNumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum), BigNumError> {
        ensure_nonzero(divisor)?;

        Ok(long_division(self, divisor))
    }

    /// Remainder of `self / divisor`, in `0..divisor`.
    ///
    /// # Errors
    /// Returns [`BigNumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_rem(&self, divisor: &BigNum) -> Result<BigNum, BigNumError> {
        self.checked_div_rem(divisor).map(|(_, remainder)| remainder)
    }

    /// Quotient `floor(self / divisor)`.
    ///
    /// # Errors
    /// Returns [`BigNumError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigNum) -> Result<BigNum, BigNumError> {
        self.checked_div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder computed by subtracting `divisor` until the value drops
    /// below it.
    ///
    /// Performs `floor(self / divisor)` subtractions.
    ///
    /// # Errors
    /// Returns [`BigNumError::DivisionByZero`] when `divisor` is zero.
    pub fn rem_by_subtraction(&self, divisor: &BigNum) -> Result<BigNum, BigNumError> {
        ensure_nonzero(divisor)?;

        let mut remainder = self.words.clone();

        while cmp_words(&remainder, &divisor.words) != Ordering::Less {
            sub_words_in_place(&mut remainder, &divisor.words);
        }

        Ok(BigNum { words: remainder })
    }
}

fn ensure_nonzero(divisor: &BigNum) -> Result<(), BigNumError> {
    if divisor.is_zero() {
        debug!("rejected zero divisor");

        return Err(BigNumError::DivisionByZero);
    }

    Ok(())
}

/// Shift-subtract long division. `divisor` must be non-zero.
fn long_division(dividend: &BigNum, divisor: &BigNum) -> (BigNum, BigNum) {
    if dividend < divisor {
        return (BigNum::zero(), dividend.clone());
    }

    let _span = trace_span!(
        "long_division",
        dividend_bits = dividend.bits(),
        divisor_bits = divisor.bits()
    )
    .entered();

    let shift = dividend.bits() - divisor.bits();

    let mut remainder = dividend.words.clone();
    let mut aligned = divisor.shift_left(shift).words;
    let mut quotient = vec![0u32; shift / WORD_BITS + 1];

    for position in (0..=shift).rev() {
        if cmp_words(&remainder, &aligned) != Ordering::Less {
            sub_words_in_place(&mut remainder, &aligned);
            quotient[position / WORD_BITS] |= 1 << (position % WORD_BITS);

            // Every lower quotient bit is zero from here on.
            if cmp_words(&remainder, &divisor.words) == Ordering::Less {
                break;
            }
        }

        shift_right_one_in_place(&mut aligned);
    }

    (BigNum::from_raw(quotient), BigNum { words: remainder })
}

fn shift_right_one_in_place(words: &mut Vec<u32>) {
    let len = words.len();

    for i in 0..len {
        let high = if i + 1 < len { words[i + 1] << (WORD_BITS - 1) } else { 0 };
        words[i] = (words[i] >> 1) | high;
    }

    normalize_words(words);
}

impl Rem<&BigNum> for &BigNum {
    type Output = BigNum;

    fn rem(self, rhs: &BigNum) -> BigNum {
        assert!(!rhs.is_zero(), "division by zero");

        long_division(self, rhs).1
    }
}

impl Rem<BigNum> for BigNum {
    type Output = BigNum;

    fn rem(self, rhs: BigNum) -> BigNum {
        &self % &rhs
    }
}

impl Div<&BigNum> for &BigNum {
    type Output = BigNum;

    fn div(self, rhs: &BigNum) -> BigNum {
        assert!(!rhs.is_zero(), "division by zero");

        long_division(self, rhs).0
    }
}

impl Div<BigNum> for BigNum {
    type Output = BigNum;

    fn div(self, rhs: BigNum) -> BigNum {
        &self / &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_right_one_carries_between_words() {
        let mut words = vec![0, 1];
        shift_right_one_in_place(&mut words);

        assert_eq!(words, vec![0x8000_0000]);
    }

    #[test]
    fn long_division_small_values() {
        let (q, r) = long_division(&BigNum::from(100u32), &BigNum::from(7u32));

        assert_eq!(q, BigNum::from(14u32));
        assert_eq!(r, BigNum::from(2u32));
    }

    #[test]
    fn long_division_exact_multiple_stops_early() {
        let divisor = BigNum::from_words(vec![0, 3]);
        let dividend = divisor.shift_left(40);

        let (q, r) = long_division(&dividend, &divisor);

        assert_eq!(q, BigNum::one().shift_left(40));
        assert!(r.is_zero());
    }

    #[test]
    fn dividend_below_divisor_is_its_own_remainder() {
        let (q, r) = long_division(&BigNum::from(5u32), &BigNum::from(9u32));

        assert!(q.is_zero());
        assert_eq!(r, BigNum::from(5u32));
    }
}
