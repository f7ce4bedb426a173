//! Errors reported by `BigNum` operations.

use thiserror::Error;

/// Errors that may occur while constructing or operating on a `BigNum`.
///
/// Every error is a deterministic function of the inputs and is returned
/// to the caller; nothing is retried or silently replaced by a default.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigNumError {
    /// The text given to the hexadecimal parser is not a hexadecimal literal.
    #[error("malformed hexadecimal input: {0}")]
    MalformedInput(MalformedHex),

    /// The divisor of a division or remainder is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The subtrahend is larger than the minuend.
    #[error("subtraction underflow")]
    SubtractionUnderflow,
}

/// Why a hexadecimal literal was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedHex {
    /// No digits were given (only an optional `0x` prefix, or nothing).
    #[error("no digits")]
    Empty,

    /// A character outside `0-9`, `a-f`, `A-F`.
    ///
    /// `index` is the byte offset in the original text, prefix included.
    #[error("invalid digit {found:?} at index {index}")]
    InvalidDigit { index: usize, found: char },
}

impl From<MalformedHex> for BigNumError {
    fn from(value: MalformedHex) -> Self {
        BigNumError::MalformedInput(value)
    }
}
