//! Primitive types
//!
//! This module defines the integer primitives provided by the crate.
//!
//! Current primitives include:
//! - `BigNum`: an arbitrary-precision unsigned integer over 32-bit words
//!
//! Primitives are explicit value types with well-defined semantics. They do
//! not attempt to replicate a full-featured big-integer library: there is
//! no signed arithmetic and no multiplication.

mod bignum;

/// Arbitrary-precision unsigned integer and its errors.
///
/// These are re-exported as the primary public API of the crate.
pub use bignum::{BigNum, BigNumError, HEX_DIGITS_PER_WORD, MalformedHex, WORD_BITS};
