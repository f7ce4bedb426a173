//! Conversion utilities
//!
//! This module groups the explicit conversions between `BigNum` and other
//! representations:
//! - hexadecimal text (parsing and formatting)
//! - native unsigned integers, with fallible narrowing
//! - little-endian word sequences
//!
//! Each submodule handles one representation to keep the files small and
//! easy to audit.

mod hex;
mod u128;
mod u32;
mod u64;
