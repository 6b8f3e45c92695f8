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

//! Signed 128-bit integer.

use crate::arith::LIMB_BITS;
use crate::div;
use crate::uint::U128;

/// A signed 128-bit integer in two's complement, built from a signed high
/// limb and an unsigned low limb.
///
/// The represented value is `high * 2^64 + low`. Deriving the comparison
/// traits with `high` first yields the correct signed ordering.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct I128 {
    high: i64,
    low: u64,
}

impl I128 {
    /// Zero value, i.e. `0`.
    pub const ZERO: I128 = I128::from_words(0, 0);
    /// i.e. `1`.
    pub const ONE: I128 = I128::from_words(0, 1);
    /// The smallest value, i.e. `-2^127`.
    pub const MIN: I128 = I128::from_words(i64::MIN, 0);
    /// The largest value, i.e. `2^127 - 1`.
    pub const MAX: I128 = I128::from_words(i64::MAX, u64::MAX);
    /// The size of this integer type in bits.
    pub const BITS: u32 = 128;

    const NEG_ONE: I128 = I128::from_words(-1, u64::MAX);

    /// Magnitude of `I128::MAX`, i.e. `2^127 - 1`.
    pub(crate) const POS_LIMIT: U128 = U128::from_words(i64::MAX as u64, u64::MAX);
    /// Magnitude of `I128::MIN`, i.e. `2^127`.
    pub(crate) const NEG_LIMIT: U128 = U128::from_words(1 << 63, 0);

    /// Creates an `I128` from a high and a low 64-bit half-word.
    #[inline(always)]
    pub const fn from_words(high: i64, low: u64) -> I128 {
        I128 { high, low }
    }

    /// Returns `(high, low)`.
    #[inline(always)]
    pub const fn into_words(self) -> (i64, u64) {
        (self.high, self.low)
    }

    /// Returns the high 64 bits.
    #[inline(always)]
    pub const fn high(self) -> i64 {
        self.high
    }

    /// Returns the low 64 bits.
    #[inline(always)]
    pub const fn low(self) -> u64 {
        self.low
    }

    /// Reinterprets the two's complement bit pattern as unsigned.
    #[inline(always)]
    pub const fn to_bits(self) -> U128 {
        U128::from_words(self.high as u64, self.low)
    }

    /// Reinterprets an unsigned bit pattern as two's complement.
    #[inline(always)]
    pub const fn from_bits(bits: U128) -> I128 {
        I128::from_words(bits.high() as i64, bits.low())
    }

    /// Checks if `self` is zero.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.high as u64 | self.low == 0
    }

    /// Checks if `self` is negative.
    #[inline(always)]
    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    /// Checks if `self` is positive, i.e. greater than zero.
    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.high >= 0 && !self.is_zero()
    }

    /// Returns the magnitude of `self` as an unsigned value. Unlike
    /// [`I128::abs`] this cannot overflow, the magnitude of `I128::MIN`
    /// being `2^127`.
    #[inline]
    pub const fn unsigned_abs(self) -> U128 {
        if self.is_negative() {
            self.to_bits().wrapping_neg()
        } else {
            self.to_bits()
        }
    }

    /// Calculates `-self`, returning the wrapped value and whether it
    /// overflowed, which only happens for `I128::MIN`.
    #[inline]
    pub const fn overflowing_neg(self) -> (I128, bool) {
        let res = I128::from_bits(self.to_bits().wrapping_neg());
        (res, self.high == i64::MIN && self.low == 0)
    }

    /// Wrapping (modular) negation.
    #[inline]
    pub const fn wrapping_neg(self) -> I128 {
        self.overflowing_neg().0
    }

    /// Checked negation, `None` for `I128::MIN`.
    #[inline]
    pub const fn checked_neg(self) -> Option<I128> {
        let (res, overflow) = self.overflowing_neg();
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Calculates `|self|`, returning the wrapped value and whether it
    /// overflowed, which only happens for `I128::MIN`.
    #[inline]
    pub const fn overflowing_abs(self) -> (I128, bool) {
        if self.is_negative() {
            self.overflowing_neg()
        } else {
            (self, false)
        }
    }

    /// Wrapping (modular) absolute value; `I128::MIN` yields itself.
    #[inline]
    pub const fn wrapping_abs(self) -> I128 {
        self.overflowing_abs().0
    }

    /// Checked absolute value, `None` for `I128::MIN`.
    #[inline]
    pub const fn checked_abs(self) -> Option<I128> {
        let (res, overflow) = self.overflowing_abs();
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Computes the absolute value of `self`.
    ///
    /// # Panics
    /// Panics if `self` is `I128::MIN`.
    #[inline]
    pub const fn abs(self) -> I128 {
        match self.checked_abs() {
            Some(res) => res,
            None => panic!("attempt to negate with overflow"),
        }
    }

    /// Calculates `self + rhs`, returning the wrapped value and whether
    /// an arithmetic overflow occurred.
    ///
    /// Overflow happens exactly when both operands have the same sign and
    /// the wrapped result has the other sign.
    #[inline]
    pub const fn overflowing_add(self, rhs: I128) -> (I128, bool) {
        let res = I128::from_bits(self.to_bits().wrapping_add(rhs.to_bits()));
        let overflow =
            (self.high < 0) == (rhs.high < 0) && (res.high < 0) != (self.high < 0);
        (res, overflow)
    }

    /// Calculates `self - rhs`, returning the wrapped value and whether
    /// an arithmetic overflow occurred.
    #[inline]
    pub const fn overflowing_sub(self, rhs: I128) -> (I128, bool) {
        let res = I128::from_bits(self.to_bits().wrapping_sub(rhs.to_bits()));
        let overflow =
            (self.high < 0) != (rhs.high < 0) && (res.high < 0) != (self.high < 0);
        (res, overflow)
    }

    /// Calculates `self * rhs`, returning the wrapped value and whether
    /// an arithmetic overflow occurred.
    #[inline]
    pub fn overflowing_mul(self, rhs: I128) -> (I128, bool) {
        let negative = self.is_negative() != rhs.is_negative();
        let (mag, mut overflow) = self.unsigned_abs().overflowing_mul(rhs.unsigned_abs());
        if negative {
            overflow |= mag > Self::NEG_LIMIT;
            (I128::from_bits(mag.wrapping_neg()), overflow)
        } else {
            overflow |= mag > Self::POS_LIMIT;
            (I128::from_bits(mag), overflow)
        }
    }

    /// Calculates the complete 256-bit product of `self * rhs` as
    /// `(low, high)`. The low half is the raw bit pattern, the high half
    /// carries the sign of the product.
    #[inline]
    pub fn widening_mul(self, rhs: I128) -> (U128, I128) {
        let negative = self.is_negative() != rhs.is_negative();
        let (low, high) = self.unsigned_abs().widening_mul(rhs.unsigned_abs());
        if negative {
            // two's complement negation of the 256-bit magnitude
            let neg_low = low.wrapping_neg();
            let neg_high = if low.is_zero() {
                high.wrapping_neg()
            } else {
                U128::from_words(!high.high(), !high.low())
            };
            (neg_low, I128::from_bits(neg_high))
        } else {
            (low, I128::from_bits(high))
        }
    }

    /// Wrapping (modular) addition.
    #[inline]
    pub const fn wrapping_add(self, rhs: I128) -> I128 {
        I128::from_bits(self.to_bits().wrapping_add(rhs.to_bits()))
    }

    /// Wrapping (modular) subtraction.
    #[inline]
    pub const fn wrapping_sub(self, rhs: I128) -> I128 {
        I128::from_bits(self.to_bits().wrapping_sub(rhs.to_bits()))
    }

    /// Wrapping (modular) multiplication.
    #[inline]
    pub const fn wrapping_mul(self, rhs: I128) -> I128 {
        I128::from_bits(self.to_bits().wrapping_mul(rhs.to_bits()))
    }

    /// Checked addition, `None` on overflow.
    #[inline(always)]
    pub const fn checked_add(self, rhs: I128) -> Option<I128> {
        let (res, overflow) = self.overflowing_add(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Checked subtraction, `None` on overflow.
    #[inline(always)]
    pub const fn checked_sub(self, rhs: I128) -> Option<I128> {
        let (res, overflow) = self.overflowing_sub(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    /// Checked multiplication, `None` on overflow.
    #[inline(always)]
    pub fn checked_mul(self, rhs: I128) -> Option<I128> {
        let (res, overflow) = self.overflowing_mul(rhs);
        if overflow {
            None
        } else {
            Some(res)
        }
    }

    // Truncating division on the magnitudes. The quotient is negative when
    // the signs differ, the remainder takes the sign of the dividend.
    // Caller must rule out a zero divisor and `I128::MIN / -1`.
    #[inline]
    fn div_rem_magnitudes(self, rhs: I128) -> (I128, I128) {
        let (q_mag, r_mag) = self.unsigned_abs().div_rem(rhs.unsigned_abs());
        let q = if self.is_negative() != rhs.is_negative() {
            I128::from_bits(q_mag.wrapping_neg())
        } else {
            I128::from_bits(q_mag)
        };
        let r = if self.is_negative() {
            I128::from_bits(r_mag.wrapping_neg())
        } else {
            I128::from_bits(r_mag)
        };
        (q, r)
    }

    /// Computes quotient and remainder in one call, truncating toward zero.
    ///
    /// # Panics
    /// Panics if `rhs` is zero or if the division overflows
    /// (`I128::MIN / -1`).
    #[inline]
    pub fn div_rem(self, rhs: I128) -> (I128, I128) {
        if rhs.is_zero() {
            panic!("attempt to divide by zero");
        }
        if self == I128::MIN && rhs == I128::NEG_ONE {
            panic!("attempt to divide with overflow");
        }
        self.div_rem_magnitudes(rhs)
    }

    /// Computes quotient and remainder, `None` if `rhs` is zero or the
    /// division overflows.
    #[inline]
    pub fn checked_div_rem(self, rhs: I128) -> Option<(I128, I128)> {
        if rhs.is_zero() || (self == I128::MIN && rhs == I128::NEG_ONE) {
            None
        } else {
            Some(self.div_rem_magnitudes(rhs))
        }
    }

    /// Calculates `self / rhs`, returning the quotient and an overflow
    /// flag. The flag is set for `I128::MIN / -1`, which wraps to
    /// `I128::MIN`, and for a zero divisor, in which case the returned
    /// value is `self`.
    #[inline]
    pub fn overflowing_div(self, rhs: I128) -> (I128, bool) {
        if rhs.is_zero() {
            (self, true)
        } else if self == I128::MIN && rhs == I128::NEG_ONE {
            (I128::MIN, true)
        } else {
            (self.div_rem_magnitudes(rhs).0, false)
        }
    }

    /// Calculates `self % rhs`, returning the remainder and an overflow
    /// flag. The flag is set for `I128::MIN % -1`, which wraps to zero,
    /// and for a zero divisor, in which case the returned value is `self`.
    #[inline]
    pub fn overflowing_rem(self, rhs: I128) -> (I128, bool) {
        if rhs.is_zero() {
            (self, true)
        } else if self == I128::MIN && rhs == I128::NEG_ONE {
            (I128::ZERO, true)
        } else {
            (self.div_rem_magnitudes(rhs).1, false)
        }
    }

    /// Checked division, `None` if `rhs` is zero or the division
    /// overflows.
    #[inline]
    pub fn checked_div(self, rhs: I128) -> Option<I128> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Checked remainder, `None` if `rhs` is zero or the division
    /// overflows.
    #[inline]
    pub fn checked_rem(self, rhs: I128) -> Option<I128> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// Divides the double-width dividend `hi * 2^128 + lo` by `self`,
    /// returning `(quotient, remainder)`. The low half of the dividend is
    /// the raw bit pattern, the high half carries the sign.
    ///
    /// This is the inverse of [`I128::widening_mul`].
    ///
    /// # Panics
    /// Panics if `self` is zero or the quotient does not fit in 128 bits.
    #[inline]
    pub fn div_rem_wide(self, hi: I128, lo: U128) -> (I128, I128) {
        match self.checked_div_rem_wide(hi, lo) {
            Some(res) => res,
            None => panic!("attempt to divide with overflow"),
        }
    }

    /// Divides the double-width dividend `hi * 2^128 + lo` by `self`,
    /// returning `None` when `self` is zero or the quotient does not fit.
    pub fn checked_div_rem_wide(self, hi: I128, lo: U128) -> Option<(I128, I128)> {
        if self.is_zero() {
            return None;
        }

        let dividend_negative = hi.is_negative();
        // magnitude of the 256-bit dividend
        let (mag_lo, mag_hi) = if dividend_negative {
            let neg_lo = lo.wrapping_neg();
            let neg_hi = if lo.is_zero() {
                hi.to_bits().wrapping_neg()
            } else {
                U128::from_words(!(hi.high() as u64), !hi.low())
            };
            (neg_lo, neg_hi)
        } else {
            (lo, hi.to_bits())
        };

        let (q_mag, r_mag) = div::div_rem_wide(mag_hi, mag_lo, self.unsigned_abs())?;

        let q_negative = dividend_negative != self.is_negative();
        let limit = if q_negative {
            Self::NEG_LIMIT
        } else {
            Self::POS_LIMIT
        };
        if q_mag > limit {
            return None;
        }

        let q = if q_negative {
            I128::from_bits(q_mag.wrapping_neg())
        } else {
            I128::from_bits(q_mag)
        };
        // the remainder's magnitude is below |self|, so it always fits
        let r = if dividend_negative {
            I128::from_bits(r_mag.wrapping_neg())
        } else {
            I128::from_bits(r_mag)
        };
        Some((q, r))
    }

    /// Shifts left by `rhs & 127` bits.
    #[inline]
    pub const fn wrapping_shl(self, rhs: u32) -> I128 {
        I128::from_bits(self.to_bits().wrapping_shl(rhs))
    }

    /// Arithmetic shift right by `rhs & 127` bits. Vacated high bits take
    /// the sign bit.
    #[inline]
    pub const fn wrapping_shr(self, rhs: u32) -> I128 {
        let rhs = rhs & (Self::BITS - 1);
        if rhs == 0 {
            self
        } else if rhs < LIMB_BITS {
            I128::from_words(
                self.high >> rhs,
                (self.low >> rhs) | ((self.high as u64) << (LIMB_BITS - rhs)),
            )
        } else {
            I128::from_words(self.high >> 63, (self.high >> (rhs - LIMB_BITS)) as u64)
        }
    }

    /// Calculates `self << rhs`, returning the shifted value with the
    /// count masked to `0..128` and whether the count was too large.
    #[inline]
    pub const fn overflowing_shl(self, rhs: u32) -> (I128, bool) {
        (self.wrapping_shl(rhs), rhs >= Self::BITS)
    }

    /// Calculates `self >> rhs`, returning the shifted value with the
    /// count masked to `0..128` and whether the count was too large.
    #[inline]
    pub const fn overflowing_shr(self, rhs: u32) -> (I128, bool) {
        (self.wrapping_shr(rhs), rhs >= Self::BITS)
    }

    /// Checked shift left, `None` if `rhs >= 128`.
    #[inline]
    pub const fn checked_shl(self, rhs: u32) -> Option<I128> {
        if rhs < Self::BITS {
            Some(self.wrapping_shl(rhs))
        } else {
            None
        }
    }

    /// Checked shift right, `None` if `rhs >= 128`.
    #[inline]
    pub const fn checked_shr(self, rhs: u32) -> Option<I128> {
        if rhs < Self::BITS {
            Some(self.wrapping_shr(rhs))
        } else {
            None
        }
    }

    /// Shifts left; counts of 128 or more yield zero.
    #[inline]
    pub const fn unbounded_shl(self, rhs: u32) -> I128 {
        if rhs < Self::BITS {
            self.wrapping_shl(rhs)
        } else {
            I128::ZERO
        }
    }

    /// Arithmetic shift right; counts of 128 or more yield zero for
    /// non-negative values and `-1` for negative values.
    #[inline]
    pub const fn unbounded_shr(self, rhs: u32) -> I128 {
        if rhs < Self::BITS {
            self.wrapping_shr(rhs)
        } else if self.is_negative() {
            I128::NEG_ONE
        } else {
            I128::ZERO
        }
    }

    /// Shifts left by `n` bits, where a negative `n` shifts right instead.
    /// Counts of 128 or more saturate as in [`I128::unbounded_shl`] and
    /// [`I128::unbounded_shr`].
    #[inline]
    pub const fn shift_left(self, n: i32) -> I128 {
        if n >= 0 {
            self.unbounded_shl(n as u32)
        } else {
            self.unbounded_shr(n.unsigned_abs())
        }
    }

    /// Shifts right by `n` bits, where a negative `n` shifts left instead.
    /// Counts of 128 or more saturate as in [`I128::unbounded_shl`] and
    /// [`I128::unbounded_shr`].
    #[inline]
    pub const fn shift_right(self, n: i32) -> I128 {
        if n >= 0 {
            self.unbounded_shr(n as u32)
        } else {
            self.unbounded_shl(n.unsigned_abs())
        }
    }

    /// Returns the number of leading zeros in the binary representation.
    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        self.to_bits().leading_zeros()
    }

    /// Returns the number of trailing zeros in the binary representation.
    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        self.to_bits().trailing_zeros()
    }

    /// Returns the number of ones in the binary representation.
    #[inline]
    pub const fn count_ones(self) -> u32 {
        self.to_bits().count_ones()
    }

    /// Returns the number of zeros in the binary representation.
    #[inline]
    pub const fn count_zeros(self) -> u32 {
        self.to_bits().count_zeros()
    }

    /// Reverses the byte order.
    #[inline]
    pub const fn swap_bytes(self) -> I128 {
        I128::from_bits(self.to_bits().swap_bytes())
    }

    /// Returns the memory representation as a byte array in little-endian
    /// byte order.
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 16] {
        self.to_bits().to_le_bytes()
    }

    /// Returns the memory representation as a byte array in big-endian
    /// byte order.
    #[inline]
    pub fn to_be_bytes(self) -> [u8; 16] {
        self.to_bits().to_be_bytes()
    }

    /// Creates an `I128` from its little-endian memory representation.
    #[inline]
    pub fn from_le_bytes(bytes: [u8; 16]) -> I128 {
        I128::from_bits(U128::from_le_bytes(bytes))
    }

    /// Creates an `I128` from its big-endian memory representation.
    #[inline]
    pub fn from_be_bytes(bytes: [u8; 16]) -> I128 {
        I128::from_bits(U128::from_be_bytes(bytes))
    }
}
