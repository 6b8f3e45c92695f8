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

//! Unsigned 128-bit integer.

use crate::arith::{self, LIMB_BITS};
use crate::div;

/// An unsigned 128-bit integer built from two 64-bit limbs.
///
/// The represented value is `high * 2^64 + low`. The `(high, low)` pair is
/// the unique canonical representation, so equality, ordering and hashing
/// derive directly from the fields (`high` ordered first).
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct U128 {
    high: u64,
    low: u64,
}

impl U128 {
    /// Zero value, i.e. `0`.
    pub const ZERO: U128 = U128::from_words(0, 0);
    /// i.e. `1`.
    pub const ONE: U128 = U128::from_words(0, 1);
    /// The smallest value, i.e. `0`.
    pub const MIN: U128 = U128::ZERO;
    /// The largest value, i.e. `2^128 - 1`.
    pub const MAX: U128 = U128::from_words(u64::MAX, u64::MAX);
    /// The size of this integer type in bits.
    pub const BITS: u32 = 128;

    /// Creates a `U128` from a high and a low 64-bit half-word.
    #[inline(always)]
    pub const fn from_words(high: u64, low: u64) -> U128 {
        U128 { high, low }
    }

    /// Returns `(high, low)`.
    #[inline(always)]
    pub const fn into_words(self) -> (u64, u64) {
        (self.high, self.low)
    }

    /// Returns the high 64 bits.
    #[inline(always)]
    pub const fn high(self) -> u64 {
        self.high
    }

    /// Returns the low 64 bits.
    #[inline(always)]
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Checks if `self` is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.high | self.low == 0
    }

    /// Returns the number of leading zeros in the binary representation.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        if self.high != 0 {
            self.high.leading_zeros()
        } else {
            LIMB_BITS + self.low.leading_zeros()
        }
    }

    /// Returns the number of trailing zeros in the binary representation.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        if self.low != 0 {
            self.low.trailing_zeros()
        } else {
            LIMB_BITS + self.high.trailing_zeros()
        }
    }

    /// Returns the number of ones in the binary representation.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.high.count_ones() + self.low.count_ones()
    }

    /// Returns the number of zeros in the binary representation.
    #[inline]
    pub const fn count_zeros(self) -> u32 {
        self.high.count_zeros() + self.low.count_zeros()
    }

    /// Reverses the byte order.
    #[inline]
    pub const fn swap_bytes(self) -> U128 {
        U128::from_words(self.low.swap_bytes(), self.high.swap_bytes())
    }

    /// Returns the memory representation as a byte array in little-endian
    /// byte order.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&self.low.to_le_bytes());
        bytes[8..].copy_from_slice(&self.high.to_le_bytes());
        bytes
    }

    /// Returns the memory representation as a byte array in big-endian
    /// byte order.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&self.high.to_be_bytes());
        bytes[8..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }

    /// Creates a `U128` from its little-endian memory representation.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 16]) -> U128 {
        let mut limb = [0; 8];
        limb.copy_from_slice(&bytes[..8]);
        let low = u64::from_le_bytes(limb);
        limb.copy_from_slice(&bytes[8..]);
        let high = u64::from_le_bytes(limb);
        U128::from_words(high, low)
    }

    /// Creates a `U128` from its big-endian memory representation.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 16]) -> U128 {
        let mut limb = [0; 8];
        limb.copy_from_slice(&bytes[..8]);
        let high = u64::from_be_bytes(limb);
        limb.copy_from_slice(&bytes[8..]);
        let low = u64::from_be_bytes(limb);
        U128::from_words(high, low)
    }

    /// Calculates `self + rhs`, returning the wrapped value and whether
    /// an arithmetic overflow occurred.
    #[inline]
    pub const fn overflowing_add(self, rhs: U128) -> (U128, bool) {
        let (low, carry) = self.low.overflowing_add(rhs.low);
        let (high, carry_overflow) = self.high.overflowing_add(carry as u64);
        let (high, high_overflow) = high.overflowing_add(rhs.high);
        (U128::from_words(high, low), carry_overflow || high_overflow)
    }

    /// Calculates `self - rhs`, returning the wrapped value and whether
    /// an arithmetic overflow occurred.
    #[inline]
    pub const fn overflowing_sub(self, rhs: U128) -> (U128, bool) {
        let (low, borrow) = self.low.overflowing_sub(rhs.low);
        let (high, borrow_overflow) = self.high.overflowing_sub(borrow as u64);
        let (high, high_overflow) = high.overflowing_sub(rhs.high);
        (U128::from_words(high, low), borrow_overflow || high_overflow)
    }

    /// Calculates `self * rhs`, returning the truncated low half of the
    /// full product and whether the upper half was nonzero.
    #[inline]
    pub const fn overflowing_mul(self, rhs: U128) -> (U128, bool) {
        let (low, high) = arith::widening_mul_u128(self, rhs);
        (low, !high.is_zero())
    }

    /// Calculates the complete 256-bit product of `self * rhs` as
    /// `(low, high)`, with no possibility of overflow.
    #[inline]
    pub const fn widening_mul(self, rhs: U128) -> (U128, U128) {
        arith::widening_mul_u128(self, rhs)
    }

    /// Wrapping (modular) addition.
    #[inline]
    pub const fn wrapping_add(self, rhs: U128) -> U128 {
        self.overflowing_add(rhs).0
    }

    /// Wrapping (modular) subtraction.
    #[inline]
    pub const fn wrapping_sub(self, rhs: U128) -> U128 {
        self.overflowing_sub(rhs).0
    }

    /// Wrapping (modular) multiplication.
    #[inline]
    pub const fn wrapping_mul(self, rhs: U128) -> U128 {
        let (low, carry) = arith::widening_mul(self.low, rhs.low);
        let high = carry
            .wrapping_add(self.low.wrapping_mul(rhs.high))
            .wrapping_add(self.high.wrapping_mul(rhs.low));
        U128::from_words(high, low)
    }

    /// Wrapping (modular) negation.
    #[inline]
    pub const fn wrapping_neg(self) -> U128 {
        U128::ZERO.wrapping_sub(self)
    }

    /// Checked addition, `None` on overflow.
    #[inline(always)]
    pub const fn checked_add(self, rhs: U128) -> Option<U128> {
        let (res, overflow) = self.overflowing_add(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Checked subtraction, `None` on overflow.
    #[inline(always)]
    pub const fn checked_sub(self, rhs: U128) -> Option<U128> {
        let (res, overflow) = self.overflowing_sub(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Checked multiplication, `None` on overflow.
    #[inline(always)]
    pub const fn checked_mul(self, rhs: U128) -> Option<U128> {
        let (res, overflow) = self.overflowing_mul(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Computes quotient and remainder in one call.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn div_rem(self, rhs: U128) -> (U128, U128) {
        match self.checked_div_rem(rhs) {
            Some(res) => res,
            None => panic!("attempt to divide by zero"),
        }
    }

    /// Computes quotient and remainder, `None` if `rhs` is zero.
    #[inline]
    pub fn checked_div_rem(self, rhs: U128) -> Option<(U128, U128)> {
        if rhs.is_zero() {
            None
        } else {
            Some(div::div_rem_u128(self, rhs))
        }
    }

    /// Calculates `self / rhs`, returning the quotient and an overflow
    /// flag. The flag is only set for division by zero, in which case the
    /// returned value is `self`.
    #[inline]
    pub fn overflowing_div(self, rhs: U128) -> (U128, bool) {
        match self.checked_div_rem(rhs) {
            Some((q, _)) => (q, false),
            None => (self, true),
        }
    }

    /// Calculates `self % rhs`, returning the remainder and an overflow
    /// flag. The flag is only set for division by zero, in which case the
    /// returned value is `self`.
    #[inline]
    pub fn overflowing_rem(self, rhs: U128) -> (U128, bool) {
        match self.checked_div_rem(rhs) {
            Some((_, r)) => (r, false),
            None => (self, true),
        }
    }

    /// Checked division, `None` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: U128) -> Option<U128> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Checked remainder, `None` if `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: U128) -> Option<U128> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// Divides the double-width dividend `hi * 2^128 + lo` by `self`,
    /// returning `(quotient, remainder)`.
    ///
    /// This is the inverse of [`U128::widening_mul`].
    ///
    /// # Panics
    /// Panics if `self` is zero or the quotient does not fit in 128 bits.
    #[inline]
    pub fn div_rem_wide(self, hi: U128, lo: U128) -> (U128, U128) {
        match self.checked_div_rem_wide(hi, lo) {
            Some(res) => res,
            None => panic!("attempt to divide with overflow"),
        }
    }

    /// Divides the double-width dividend `hi * 2^128 + lo` by `self`,
    /// returning `None` when `self` is zero or the quotient does not fit
    /// in 128 bits (i.e. `hi >= self`).
    #[inline]
    pub fn checked_div_rem_wide(self, hi: U128, lo: U128) -> Option<(U128, U128)> {
        div::div_rem_wide(hi, lo, self)
    }

    /// Shifts left by `rhs & 127` bits.
    #[inline]
    pub const fn wrapping_shl(self, rhs: u32) -> U128 {
        let rhs = rhs & (Self::BITS - 1);
        if rhs == 0 {
            self
        } else if rhs < LIMB_BITS {
            U128::from_words(
                (self.high << rhs) | (self.low >> (LIMB_BITS - rhs)),
                self.low << rhs,
            )
        } else {
            U128::from_words(self.low << (rhs - LIMB_BITS), 0)
        }
    }

    /// Shifts right by `rhs & 127` bits.
    #[inline]
    pub const fn wrapping_shr(self, rhs: u32) -> U128 {
        let rhs = rhs & (Self::BITS - 1);
        if rhs == 0 {
            self
        } else if rhs < LIMB_BITS {
            U128::from_words(
                self.high >> rhs,
                (self.low >> rhs) | (self.high << (LIMB_BITS - rhs)),
            )
        } else {
            U128::from_words(0, self.high >> (rhs - LIMB_BITS))
        }
    }

    /// Calculates `self << rhs`, returning the shifted value with the
    /// count masked to `0..128` and whether the count was too large.
    #[inline]
    pub const fn overflowing_shl(self, rhs: u32) -> (U128, bool) {
        (self.wrapping_shl(rhs), rhs >= Self::BITS)
    }

    /// Calculates `self >> rhs`, returning the shifted value with the
    /// count masked to `0..128` and whether the count was too large.
    #[inline]
    pub const fn overflowing_shr(self, rhs: u32) -> (U128, bool) {
        (self.wrapping_shr(rhs), rhs >= Self::BITS)
    }

    /// Checked shift left, `None` if `rhs >= 128`.
    #[inline]
    pub const fn checked_shl(self, rhs: u32) -> Option<U128> {
        if rhs < Self::BITS {
            Some(self.wrapping_shl(rhs))
        } else {
            None
        }
    }

    /// Checked shift right, `None` if `rhs >= 128`.
    #[inline]
    pub const fn checked_shr(self, rhs: u32) -> Option<U128> {
        if rhs < Self::BITS {
            Some(self.wrapping_shr(rhs))
        } else {
            None
        }
    }

    /// Shifts left; counts of 128 or more yield zero.
    #[inline]
    pub const fn unbounded_shl(self, rhs: u32) -> U128 {
        if rhs < Self::BITS {
            self.wrapping_shl(rhs)
        } else {
            U128::ZERO
        }
    }

    /// Shifts right; counts of 128 or more yield zero.
    #[inline]
    pub const fn unbounded_shr(self, rhs: u32) -> U128 {
        if rhs < Self::BITS {
            self.wrapping_shr(rhs)
        } else {
            U128::ZERO
        }
    }

    /// Shifts left by `n` bits, where a negative `n` shifts right instead.
    /// Counts of 128 or more in either direction clear the value.
    #[inline]
    pub const fn shift_left(self, n: i32) -> U128 {
        if n >= 0 {
            self.unbounded_shl(n as u32)
        } else {
            self.unbounded_shr(n.unsigned_abs())
        }
    }

    /// Shifts right by `n` bits, where a negative `n` shifts left instead.
    /// Counts of 128 or more in either direction clear the value.
    #[inline]
    pub const fn shift_right(self, n: i32) -> U128 {
        if n >= 0 {
            self.unbounded_shr(n as u32)
        } else {
            self.unbounded_shl(n.unsigned_abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let val = U128::from_words(0x1234, 0x5678);
        assert_eq!(val.high(), 0x1234);
        assert_eq!(val.low(), 0x5678);
        assert_eq!(val.into_words(), (0x1234, 0x5678));
        assert_eq!(u128::from(val), (0x1234 << 64) | 0x5678);
    }

    #[test]
    fn test_cmp() {
        assert!(U128::from_words(1, 0) > U128::from_words(0, u64::MAX));
        assert!(U128::from_words(1, 2) > U128::from_words(1, 1));
        assert_eq!(U128::from_words(3, 4), U128::from_words(3, 4));
        assert!(U128::ZERO < U128::ONE);
        assert!(U128::MAX > U128::from(u128::MAX - 1));
    }

    #[test]
    fn test_overflowing_add() {
        let (res, overflow) = U128::from(u64::MAX as u128).overflowing_add(U128::ONE);
        assert_eq!(res, U128::from_words(1, 0));
        assert!(!overflow);

        let (res, overflow) = U128::MAX.overflowing_add(U128::ONE);
        assert_eq!(res, U128::ZERO);
        assert!(overflow);

        let (res, overflow) = U128::MAX.overflowing_add(U128::MAX);
        assert_eq!(res, U128::from(u128::MAX - 1));
        assert!(overflow);

        // carry out of the low limb overflows the high limb
        let (res, overflow) =
            U128::from_words(u64::MAX, u64::MAX).overflowing_add(U128::from_words(0, 1));
        assert_eq!(res, U128::ZERO);
        assert!(overflow);
    }

    #[test]
    fn test_overflowing_sub() {
        let (res, overflow) = U128::from_words(1, 0).overflowing_sub(U128::ONE);
        assert_eq!(res, U128::from(u64::MAX as u128));
        assert!(!overflow);

        let (res, overflow) = U128::ZERO.overflowing_sub(U128::ONE);
        assert_eq!(res, U128::MAX);
        assert!(overflow);

        let (res, overflow) = U128::from_words(1, 1).overflowing_sub(U128::from_words(1, 2));
        assert_eq!(res, U128::MAX);
        assert!(overflow);
    }

    #[test]
    fn test_overflowing_mul() {
        // 10^8 * 10^8 = 10^16, no overflow
        let (res, overflow) =
            U128::from(100_000_000u128).overflowing_mul(U128::from(100_000_000u128));
        assert_eq!(res, U128::from(10_000_000_000_000_000u128));
        assert!(!overflow);

        let (res, overflow) = U128::from_words(1, 0).overflowing_mul(U128::from_words(1, 0));
        assert_eq!(res, U128::ZERO);
        assert!(overflow);

        let (res, overflow) = U128::MAX.overflowing_mul(U128::from(2u128));
        assert_eq!(res, U128::from(u128::MAX - 1));
        assert!(overflow);

        // consistency with the full product
        let a = U128::from(0x1234_5678_9ABC_DEF0_1122_3344_5566_7788u128);
        let b = U128::from(0xFFEE_DDCC_BBAA_9988_7766_5544_3322_1100u128);
        let (low, high) = a.widening_mul(b);
        let (truncated, overflow) = a.overflowing_mul(b);
        assert_eq!(truncated, low);
        assert_eq!(overflow, !high.is_zero());
    }

    #[test]
    fn test_wrapping_mul() {
        fn assert_mul(a: u128, b: u128) {
            let res = U128::from(a).wrapping_mul(U128::from(b));
            assert_eq!(u128::from(res), a.wrapping_mul(b));
        }

        assert_mul(u128::MAX, u128::MAX);
        assert_mul(u128::MAX, 2);
        assert_mul(1 << 127, 3);
        assert_mul(0x1234_5678_9ABC_DEF0, 0x1111_2222_3333_4444_5555);
    }

    #[test]
    fn test_div_rem() {
        fn assert_div(a: u128, b: u128) {
            let (q, r) = U128::from(a).div_rem(U128::from(b));
            assert_eq!(u128::from(q), a / b);
            assert_eq!(u128::from(r), a % b);
            // division identity
            let back = q.wrapping_mul(U128::from(b)).wrapping_add(r);
            assert_eq!(u128::from(back), a);
        }

        assert_div(0, 1);
        assert_div(7, 3);
        assert_div(u128::MAX, 7);
        assert_div(u128::MAX, u128::MAX);
        assert_div(u128::MAX, u64::MAX as u128);
        assert_div(1 << 127, (1 << 64) + 1);
    }

    #[test]
    fn test_div_by_zero_reporting() {
        let five = U128::from(5u128);
        assert_eq!(five.overflowing_div(U128::ZERO), (five, true));
        assert_eq!(five.overflowing_rem(U128::ZERO), (five, true));
        assert_eq!(five.checked_div(U128::ZERO), None);
        assert_eq!(five.checked_rem(U128::ZERO), None);
        assert_eq!(five.checked_div_rem(U128::ZERO), None);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_rem_by_zero_panics() {
        let _ = U128::ONE.div_rem(U128::ZERO);
    }

    #[test]
    fn test_widening_div_round_trip() {
        let a = U128::from(0xFEDC_BA98_7654_3210_0123_4567_89AB_CDEFu128);
        let b = U128::from(0x1234_5678_9ABC_DEF0_FEDC_BA98_7654_3210u128);
        let (low, high) = a.widening_mul(b);
        let (q, r) = b.div_rem_wide(high, low);
        assert_eq!(q, a);
        assert_eq!(r, U128::ZERO);
    }

    #[test]
    fn test_checked_div_rem_wide() {
        // quotient would not fit
        assert_eq!(U128::ONE.checked_div_rem_wide(U128::ONE, U128::ZERO), None);
        // division by zero
        assert_eq!(U128::ZERO.checked_div_rem_wide(U128::ZERO, U128::ONE), None);

        let (q, r) = U128::from(10u128)
            .checked_div_rem_wide(U128::ZERO, U128::from(105u128))
            .unwrap();
        assert_eq!(q, U128::from(10u128));
        assert_eq!(r, U128::from(5u128));
    }

    #[test]
    fn test_shl() {
        let one = U128::ONE;
        assert_eq!(one.wrapping_shl(0), one);
        assert_eq!(one.wrapping_shl(1), U128::from(2u128));
        assert_eq!(one.wrapping_shl(64), U128::from_words(1, 0));
        assert_eq!(one.wrapping_shl(127), U128::from_words(1 << 63, 0));
        assert_eq!(one.wrapping_shl(128), one);
        assert_eq!(one.unbounded_shl(128), U128::ZERO);
        assert_eq!(one.checked_shl(127), Some(U128::from_words(1 << 63, 0)));
        assert_eq!(one.checked_shl(128), None);
        assert_eq!(one.overflowing_shl(129), (U128::from(2u128), true));

        let val = U128::from(0x0123_4567_89AB_CDEFu128);
        assert_eq!(
            u128::from(val.wrapping_shl(36)),
            0x0123_4567_89AB_CDEFu128 << 36
        );
    }

    #[test]
    fn test_shr() {
        let top = U128::from_words(1 << 63, 0);
        assert_eq!(top.wrapping_shr(0), top);
        assert_eq!(top.wrapping_shr(127), U128::ONE);
        assert_eq!(top.wrapping_shr(64), U128::from(1u128 << 63));
        assert_eq!(top.unbounded_shr(128), U128::ZERO);
        assert_eq!(top.checked_shr(200), None);

        let val = U128::from(u128::MAX);
        assert_eq!(u128::from(val.wrapping_shr(99)), u128::MAX >> 99);
    }

    #[test]
    fn test_smart_shifts() {
        let val = U128::from(0x00F0u128);
        assert_eq!(val.shift_left(4), U128::from(0x0F00u128));
        assert_eq!(val.shift_left(-4), U128::from(0x000Fu128));
        assert_eq!(val.shift_right(4), U128::from(0x000Fu128));
        assert_eq!(val.shift_right(-4), U128::from(0x0F00u128));
        assert_eq!(val.shift_left(128), U128::ZERO);
        assert_eq!(val.shift_left(-128), U128::ZERO);
        assert_eq!(val.shift_left(i32::MIN), U128::ZERO);
        assert_eq!(val.shift_left(0), val);
    }

    #[test]
    fn test_bit_queries() {
        assert_eq!(U128::ZERO.leading_zeros(), 128);
        assert_eq!(U128::ZERO.trailing_zeros(), 128);
        assert_eq!(U128::ONE.leading_zeros(), 127);
        assert_eq!(U128::ONE.trailing_zeros(), 0);
        assert_eq!(U128::from_words(1, 0).trailing_zeros(), 64);
        assert_eq!(U128::from_words(1, 0).leading_zeros(), 63);
        assert_eq!(U128::MAX.count_ones(), 128);
        assert_eq!(U128::MAX.count_zeros(), 0);
        assert_eq!(U128::from_words(0xF, 0xF0).count_ones(), 8);
    }

    #[test]
    fn test_bytes() {
        let val = U128::from(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10u128);
        assert_eq!(U128::from_le_bytes(val.to_le_bytes()), val);
        assert_eq!(U128::from_be_bytes(val.to_be_bytes()), val);
        assert_eq!(
            val.to_be_bytes(),
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
        );
        assert_eq!(val.swap_bytes(), U128::from_be_bytes(val.to_le_bytes()));
        assert_eq!(val.swap_bytes().swap_bytes(), val);
    }
}
