// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing of 128-bit integers from strings.
//!
//! Digits are accumulated into native 64-bit chunks so that a full 128-bit
//! multiply-add is only needed once per chunk instead of once per digit; a
//! decimal string costs at most 19 digits per wide step.

use crate::error::Int128ParseError;
use crate::int::I128;
use crate::uint::U128;
use std::str::FromStr;

/// The largest power of `radix` that fits in one 64-bit limb.
pub(crate) struct RadixChunk {
    /// Number of digits per chunk, i.e. the exponent.
    pub len: u32,
    /// `radix^len`.
    pub multiplier: u64,
}

pub(crate) fn radix_chunk(radix: u32) -> RadixChunk {
    debug_assert!((2..=36).contains(&radix));
    let radix = radix as u64;

    let mut len = 1;
    let mut multiplier = radix;
    while let Some(next) = multiplier.checked_mul(radix) {
        multiplier = next;
        len += 1;
    }

    RadixChunk { len, multiplier }
}

#[inline]
fn digit_value(byte: u8, radix: u32) -> Option<u64> {
    let digit = match byte {
        b'0'..=b'9' => (byte - b'0') as u32,
        b'a'..=b'z' => (byte - b'a') as u32 + 10,
        b'A'..=b'Z' => (byte - b'A') as u32 + 10,
        _ => return None,
    };

    if digit < radix {
        Some(digit as u64)
    } else {
        None
    }
}

#[inline]
fn push_chunk(acc: U128, multiplier: u64, chunk: u64) -> Result<U128, Int128ParseError> {
    let (acc, mul_overflow) = acc.overflowing_mul(U128::from_words(0, multiplier));
    let (acc, add_overflow) = acc.overflowing_add(U128::from_words(0, chunk));

    if mul_overflow || add_overflow {
        Err(Int128ParseError::Overflow)
    } else {
        Ok(acc)
    }
}

/// Parses an unsigned magnitude. `s` must be non-empty and contain digits
/// only; signs, whitespace and separators are rejected as invalid digits.
fn parse_unsigned(s: &[u8], radix: u32) -> Result<U128, Int128ParseError> {
    debug_assert!(!s.is_empty());

    let chunk = radix_chunk(radix);
    let mut result = U128::ZERO;
    let mut acc: u64 = 0;
    let mut acc_len: u32 = 0;

    for &byte in s {
        let digit = match digit_value(byte, radix) {
            Some(digit) => digit,
            None => return Err(Int128ParseError::Invalid),
        };

        // acc stays below radix^(len - 1) here, so this cannot wrap
        acc = acc * radix as u64 + digit;
        acc_len += 1;

        if acc_len == chunk.len {
            result = push_chunk(result, chunk.multiplier, acc)?;
            acc = 0;
            acc_len = 0;
        }
    }

    if acc_len > 0 {
        result = push_chunk(result, (radix as u64).pow(acc_len), acc)?;
    }

    Ok(result)
}

impl U128 {
    /// Converts a string slice in a given base to a `U128`.
    ///
    /// The string may start with a `+` sign, followed by one or more digits
    /// in the given base. Whitespace and digit separators are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use int128_rs::U128;
    /// assert_eq!(U128::from_str_radix("ff", 16), Ok(U128::from(255u32)));
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<U128, Int128ParseError> {
        if !(2..=36).contains(&radix) {
            return Err(Int128ParseError::InvalidRadix);
        }

        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(Int128ParseError::Empty);
        }

        let digits = if bytes[0] == b'+' { &bytes[1..] } else { bytes };
        if digits.is_empty() {
            return Err(Int128ParseError::Invalid);
        }

        parse_unsigned(digits, radix)
    }
}

impl I128 {
    /// Converts a string slice in a given base to an `I128`.
    ///
    /// The string may start with a `+` or `-` sign, followed by one or more
    /// digits in the given base. Whitespace and digit separators are
    /// rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// # use int128_rs::I128;
    /// assert_eq!(I128::from_str_radix("-ff", 16), Ok(I128::from(-255i32)));
    /// ```
    pub fn from_str_radix(s: &str, radix: u32) -> Result<I128, Int128ParseError> {
        if !(2..=36).contains(&radix) {
            return Err(Int128ParseError::InvalidRadix);
        }

        let bytes = s.as_bytes();
        if bytes.is_empty() {
            return Err(Int128ParseError::Empty);
        }

        let (negative, digits) = match bytes[0] {
            b'+' => (false, &bytes[1..]),
            b'-' => (true, &bytes[1..]),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(Int128ParseError::Invalid);
        }

        let magnitude = parse_unsigned(digits, radix)?;
        let limit = if negative {
            I128::NEG_LIMIT
        } else {
            I128::POS_LIMIT
        };
        if magnitude > limit {
            return Err(Int128ParseError::Overflow);
        }

        if negative {
            Ok(I128::from_bits(magnitude.wrapping_neg()))
        } else {
            Ok(I128::from_bits(magnitude))
        }
    }
}

impl FromStr for U128 {
    type Err = Int128ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U128::from_str_radix(s, 10)
    }
}

impl FromStr for I128 {
    type Err = Int128ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        I128::from_str_radix(s, 10)
    }
}
