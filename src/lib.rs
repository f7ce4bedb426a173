//! Arbitrary-precision unsigned integers
//!
//! This crate provides `BigNum`, an unsigned integer of unbounded size
//! stored as a sequence of 32-bit words, together with the operations
//! needed to work with it at the bit and word level.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on speed for very large operands.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The `BigNum` value type and its operation set:
//!   - hexadecimal parsing and formatting
//!   - bitwise XOR, OR, AND and complement
//!   - left and right shifts
//!   - addition and checked subtraction
//!   - ordering
//!   - long division with quotient and remainder
//!
//! # Error policy
//!
//! Fallible operations return `Result<_, BigNumError>`:
//! - malformed hexadecimal text is rejected, never partially parsed
//! - a zero divisor is an error, never a zero result
//! - subtracting a larger value is an error, never a wrapped result
//!
//! The operator traits (`-`, `/`, `%`) panic in the same situations, like
//! the native integer types do.
//!
//! # Example
//!
//! ```
//! use bignum::primitives::BigNum;
//!
//! let a: BigNum = "123456789ABCDEF0123456789ABCDEF0".parse().unwrap();
//! let b = BigNum::parse_hex("0x1000000000000000000000000000000").unwrap();
//!
//! let r = a.checked_rem(&b).unwrap();
//! assert_eq!(r.to_hex(), "0x3456789ABCDEF0123456789ABCDEF0");
//! ```

pub mod primitives;
