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

//! Formatting of 128-bit integers.
//!
//! Digits are extracted a 64-bit chunk at a time, so a decimal rendering
//! needs at most three wide divisions instead of one per digit.

use crate::int::I128;
use crate::parse::radix_chunk;
use crate::uint::U128;
use stack_buf::StackVec;
use std::fmt;

const LOWER_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const UPPER_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// 128 binary digits and an optional sign
type DigitBuf = StackVec<u8, 129>;

/// Writes the digits of `val` in the given base into `buf`, least
/// significant digit first. Interior chunks are zero padded to the full
/// chunk width, the leading chunk stops at its highest digit.
fn write_radix(mut val: U128, radix: u32, digits: &[u8; 36], buf: &mut DigitBuf) {
    let chunk = radix_chunk(radix);
    let divisor = U128::from_words(0, chunk.multiplier);
    let radix = radix as u64;

    loop {
        let (quot, rem) = val.div_rem(divisor);
        let mut limb = rem.low();

        if quot.is_zero() {
            loop {
                buf.push(digits[(limb % radix) as usize]);
                limb /= radix;
                if limb == 0 {
                    break;
                }
            }
            return;
        }

        for _ in 0..chunk.len {
            buf.push(digits[(limb % radix) as usize]);
            limb /= radix;
        }
        val = quot;
    }
}

fn unsigned_to_string(val: U128, radix: u32, uppercase: bool) -> String {
    let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
    let mut buf = DigitBuf::new();
    write_radix(val, radix, digits, &mut buf);

    let mut s = String::with_capacity(buf.len());
    for &byte in buf.as_slice().iter().rev() {
        s.push(byte as char);
    }
    s
}

impl U128 {
    /// Formats `self` in the given base.
    ///
    /// # Panics
    /// Panics if `radix` is not in the range `2..=36`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use int128_rs::U128;
    /// assert_eq!(U128::from(255u32).to_str_radix(16, false), "ff");
    /// ```
    pub fn to_str_radix(self, radix: u32, uppercase: bool) -> String {
        assert!(
            (2..=36).contains(&radix),
            "radix must lie in the range 2..=36"
        );
        unsigned_to_string(self, radix, uppercase)
    }
}

impl I128 {
    /// Formats `self` in the given base, with a leading `-` for negative
    /// values.
    ///
    /// # Panics
    /// Panics if `radix` is not in the range `2..=36`.
    pub fn to_str_radix(self, radix: u32, uppercase: bool) -> String {
        assert!(
            (2..=36).contains(&radix),
            "radix must lie in the range 2..=36"
        );

        let digits = if uppercase { UPPER_DIGITS } else { LOWER_DIGITS };
        let mut buf = DigitBuf::new();
        write_radix(self.unsigned_abs(), radix, digits, &mut buf);
        if self.is_negative() {
            buf.push(b'-');
        }

        let mut s = String::with_capacity(buf.len());
        for &byte in buf.as_slice().iter().rev() {
            s.push(byte as char);
        }
        s
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = unsigned_to_string(*self, 10, false);
        f.pad_integral(true, "", &s)
    }
}

impl fmt::Display for I128 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = unsigned_to_string(self.unsigned_abs(), 10, false);
        f.pad_integral(!self.is_negative(), "", &s)
    }
}

impl fmt::Debug for U128 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Debug for I128 {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_radix_fmt {
    ($trait: ident, $radix: expr, $uppercase: expr, $prefix: expr) => {
        impl fmt::$trait for U128 {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                let s = unsigned_to_string(*self, $radix, $uppercase);
                f.pad_integral(true, $prefix, &s)
            }
        }

        // signed values render their two's complement bit pattern,
        // matching the primitive integer types
        impl fmt::$trait for I128 {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::$trait::fmt(&self.to_bits(), f)
            }
        }
    };
}

impl_radix_fmt!(Binary, 2, false, "0b");
impl_radix_fmt!(Octal, 8, false, "0o");
impl_radix_fmt!(LowerHex, 16, false, "0x");
impl_radix_fmt!(UpperHex, 16, true, "0x");

#[cfg(test)]
mod tests {
    use crate::int::I128;
    use crate::uint::U128;

    #[test]
    fn test_display_u128() {
        assert_eq!(U128::ZERO.to_string(), "0");
        assert_eq!(U128::ONE.to_string(), "1");
        assert_eq!(
            U128::from(10_000_000_000_000_000u128).to_string(),
            "10000000000000000"
        );
        assert_eq!(
            U128::from(u64::MAX as u128 + 1).to_string(),
            "18446744073709551616"
        );
        assert_eq!(
            U128::MAX.to_string(),
            "340282366920938463463374607431768211455"
        );
        assert_eq!(
            U128::from_words(1 << 63, 0).to_string(),
            "170141183460469231731687303715884105728"
        );
    }

    #[test]
    fn test_display_i128() {
        assert_eq!(I128::ZERO.to_string(), "0");
        assert_eq!(I128::from(-1i128).to_string(), "-1");
        assert_eq!(I128::from(-42i128).to_string(), "-42");
        assert_eq!(
            I128::MAX.to_string(),
            "170141183460469231731687303715884105727"
        );
        assert_eq!(
            I128::MIN.to_string(),
            "-170141183460469231731687303715884105728"
        );
    }

    #[test]
    fn test_display_round_trip() {
        fn assert_round_trip(val: u128) {
            let s = U128::from(val).to_string();
            assert_eq!(s, val.to_string());
            assert_eq!(s.parse::<U128>().unwrap(), U128::from(val));
        }

        assert_round_trip(0);
        assert_round_trip(999_999_999_999_999_999_9);
        assert_round_trip(10u128.pow(19));
        assert_round_trip(10u128.pow(38));
        assert_round_trip(u128::MAX);
        assert_round_trip(u128::MAX / 7);
    }

    #[test]
    fn test_padding() {
        let val = U128::from(42u128);
        assert_eq!(format!("{:>8}", val), "      42");
        assert_eq!(format!("{:<8}", val), "42      ");
        assert_eq!(format!("{:08}", val), "00000042");
        assert_eq!(format!("{:+}", val), "+42");

        let val = I128::from(-42i128);
        assert_eq!(format!("{:08}", val), "-0000042");
        assert_eq!(format!("{:>8}", val), "     -42");
    }

    #[test]
    fn test_debug_matches_display() {
        let val = U128::from(12345u128);
        assert_eq!(format!("{:?}", val), format!("{}", val));
        let val = I128::from(-12345i128);
        assert_eq!(format!("{:?}", val), format!("{}", val));
    }

    #[test]
    fn test_radix_traits() {
        let val = U128::from_words(0x1234, 0x5678);
        assert_eq!(format!("{:x}", val), "12340000000000005678");
        assert_eq!(format!("{:X}", val), "12340000000000005678");
        assert_eq!(format!("{:x}", U128::from(0xabcdefu128)), "abcdef");
        assert_eq!(format!("{:X}", U128::from(0xabcdefu128)), "ABCDEF");
        assert_eq!(format!("{:#x}", U128::from(255u128)), "0xff");
        assert_eq!(format!("{:#b}", U128::from(5u128)), "0b101");
        assert_eq!(format!("{:o}", U128::from(511u128)), "777");
        assert_eq!(format!("{:b}", U128::MAX), "1".repeat(128));
        assert_eq!(format!("{:o}", U128::MAX), format!("3{}", "7".repeat(42)));

        // two's complement bit pattern for signed values
        assert_eq!(format!("{:x}", I128::from(-1i128)), "f".repeat(32));
        assert_eq!(
            format!("{:x}", I128::MIN),
            "80000000000000000000000000000000"
        );
        assert_eq!(format!("{:b}", I128::from(-2i128)), format!("{}0", "1".repeat(127)));
    }

    #[test]
    fn test_to_str_radix() {
        assert_eq!(U128::from(255u32).to_str_radix(16, false), "ff");
        assert_eq!(U128::from(255u32).to_str_radix(16, true), "FF");
        assert_eq!(U128::from(35u32).to_str_radix(36, false), "z");
        assert_eq!(U128::from(35u32).to_str_radix(36, true), "Z");
        assert_eq!(U128::from(1296u32).to_str_radix(36, false), "100");
        assert_eq!(U128::ZERO.to_str_radix(2, false), "0");
        assert_eq!(U128::MAX.to_str_radix(2, false), "1".repeat(128));

        assert_eq!(I128::from(-255i128).to_str_radix(16, false), "-ff");
        assert_eq!(
            I128::MIN.to_str_radix(16, false),
            "-80000000000000000000000000000000"
        );
        assert_eq!(I128::from(-5i128).to_str_radix(2, false), "-101");
    }

    #[test]
    fn test_radix_round_trip() {
        for &radix in &[2u32, 7, 10, 16, 31, 36] {
            for &val in &[0u128, 1, 255, u64::MAX as u128, 1 << 127, u128::MAX] {
                let s = U128::from(val).to_str_radix(radix, false);
                assert_eq!(U128::from_str_radix(&s, radix), Ok(U128::from(val)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "radix must lie in the range 2..=36")]
    fn test_invalid_radix_panics() {
        let _ = U128::ONE.to_str_radix(37, false);
    }
}
