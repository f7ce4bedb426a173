//! Arbitrary-precision unsigned integer primitive
//!
//! This module defines the `BigNum` type, an unsigned integer of unbounded
//! size stored as normalized 32-bit words, least significant first.
//!
//! `BigNum` is a plain value type: operations borrow their operands and
//! return new values, and each instance owns its words exclusively. It is
//! therefore `Send + Sync` and can be shared across threads freely.
//!
//! The module is split by concern:
//! - `core`: the type, its normalization invariant and ordering
//! - `ops`: bitwise logic, shifts, addition and subtraction
//! - `division`: long division, remainder and the subtraction reference
//! - `conv`: hexadecimal text and native integer conversions
//! - `error`: the error taxonomy

mod conv;
mod core;
mod division;
mod error;
mod ops;

pub use self::core::{BigNum, HEX_DIGITS_PER_WORD, WORD_BITS};
pub use self::error::{BigNumError, MalformedHex};
