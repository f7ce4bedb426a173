//! Hexadecimal text conversions for `BigNum`
//!
//! Parsing reads a base-16 literal, most significant digit first, and
//! groups the digits into 32-bit words from the right. Rendering walks the
//! words from most significant to least significant.
//!
//! Rendering pads every word except the most significant one to a full
//! eight digits, so `parse_hex(to_hex(x)) == x` for every value.

use crate::primitives::bignum::{
    BigNumError, MalformedHex,
    core::{BigNum, HEX_DIGITS_PER_WORD},
};

use std::fmt::{Display, Formatter, LowerHex, Result as FmtResult, UpperHex};
use std::str::FromStr;

use tracing::debug;

impl BigNum {
    /// Parses a hexadecimal literal.
    ///
    /// An optional `0x` or `0X` prefix is accepted. Digits are
    /// case-insensitive; any other character, including whitespace and
    /// signs, is rejected.
    ///
    /// # Errors
    /// Returns [`BigNumError::MalformedInput`] when no digits are present or
    /// a character is not a hexadecimal digit.
    pub fn parse_hex(text: &str) -> Result<BigNum, BigNumError> {
        let (offset, digits) = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(rest) => (2, rest),
            None => (0, text),
        };

        if digits.is_empty() {
            debug!(input = text, "rejected hexadecimal input without digits");

            return Err(MalformedHex::Empty.into());
        }

        if let Some((index, found)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
            debug!(index = offset + index, %found, "rejected non-hexadecimal character");

            return Err(MalformedHex::InvalidDigit {
                index: offset + index,
                found,
            }
            .into());
        }

        let words = digits
            .as_bytes()
            .rchunks(HEX_DIGITS_PER_WORD)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |word, &digit| (word << 4) | hex_digit_value(digit))
            })
            .collect();

        Ok(BigNum::from_raw(words))
    }

    /// Renders the value as `0x` followed by uppercase hexadecimal digits.
    ///
    /// Zero renders as `0x0`.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    fn write_hex(&self, f: &mut Formatter<'_>, upper: bool) -> FmtResult {
        let mut words = self.words.iter().rev();

        if let Some(top) = words.next() {
            if upper {
                write!(f, "{:X}", top)?;
            } else {
                write!(f, "{:x}", top)?;
            }
        }

        for word in words {
            if upper {
                write!(f, "{:08X}", word)?;
            } else {
                write!(f, "{:08x}", word)?;
            }
        }

        Ok(())
    }
}

/// Value of an ASCII hexadecimal digit. Input is validated beforehand.
fn hex_digit_value(digit: u8) -> u32 {
    match digit {
        b'0'..=b'9' => (digit - b'0') as u32,
        b'a'..=b'f' => (digit - b'a' + 10) as u32,
        b'A'..=b'F' => (digit - b'A' + 10) as u32,
        _ => unreachable!("digits are validated before conversion"),
    }
}

impl FromStr for BigNum {
    type Err = BigNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigNum::parse_hex(s)
    }
}

impl Display for BigNum {
    /// Formats the value as `0x`-prefixed uppercase hexadecimal.
    ///
    /// Example:
    /// `0x1F00000001`
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("0x")?;

        self.write_hex(f, true)
    }
}

/// `{:X}` renders bare digits, `{:#X}` adds the `0x` prefix.
impl UpperHex for BigNum {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if f.alternate() {
            f.write_str("0x")?;
        }

        self.write_hex(f, true)
    }
}

/// `{:x}` renders bare digits, `{:#x}` adds the `0x` prefix.
impl LowerHex for BigNum {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if f.alternate() {
            f.write_str("0x")?;
        }

        self.write_hex(f, false)
    }
}
