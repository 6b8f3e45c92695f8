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

//! Long division engine.
//!
//! Divides dividends of up to four limbs by divisors of up to two limbs,
//! producing exact quotient and remainder. Divisors that fit one limb are
//! handled by a running-remainder digit loop; two-limb divisors go through
//! Knuth's algorithm D with limb normalization, per-digit quotient
//! estimation and a bounded correction loop.

use crate::arith::{add_carry, full_shl, full_shr, sub_borrow, widening_mul, LIMB_BITS};
use crate::uint::U128;

/// Divides the two-limb value `u1:u0` by `v`, returning the quotient and
/// storing the remainder in `r`.
///
/// Requires `u1 < v` so that the quotient fits one limb. This is the
/// classic normalized digit division working on 32-bit half-digits.
#[inline]
pub(crate) fn udiv128_by_64(u1: u64, u0: u64, mut v: u64, r: &mut u64) -> u64 {
    const B: u64 = 1 << (LIMB_BITS / 2); // Number base (32 bits)
    const HALF_MASK: u64 = B - 1;
    debug_assert!(u1 < v);

    let s = v.leading_zeros();
    let (un64, un10) = if s > 0 {
        // Normalize the divisor so its high bit is set.
        v <<= s;
        ((u1 << s) | (u0 >> (LIMB_BITS - s)), u0 << s)
    } else {
        // Avoid undefined behavior of (u0 >> 64).
        (u1, u0)
    };

    // Break divisor up into two 32-bit digits.
    let vn1 = v >> (LIMB_BITS / 2);
    let vn0 = v & HALF_MASK;

    // Break right half of dividend into two digits.
    let un1 = un10 >> (LIMB_BITS / 2);
    let un0 = un10 & HALF_MASK;

    // Compute the first quotient digit, q1.
    let mut q1 = un64 / vn1;
    let mut rhat = un64 - q1 * vn1;

    // q1 has at most error 2. No more than 2 iterations.
    while q1 >= B || q1 * vn0 > B * rhat + un1 {
        q1 -= 1;
        rhat += vn1;
        if rhat >= B {
            break;
        }
    }

    let un21 = un64
        .wrapping_mul(B)
        .wrapping_add(un1)
        .wrapping_sub(q1.wrapping_mul(v));

    // Compute the second quotient digit.
    let mut q0 = un21 / vn1;
    rhat = un21 - q0 * vn1;

    // q0 has at most error 2. No more than 2 iterations.
    while q0 >= B || q0 * vn0 > B * rhat + un0 {
        q0 -= 1;
        rhat += vn1;
        if rhat >= B {
            break;
        }
    }

    *r = (un21.wrapping_mul(B).wrapping_add(un0).wrapping_sub(q0.wrapping_mul(v))) >> s;
    q1 * B + q0
}

/// One quotient-digit step of algorithm D over the window `un[j..=j+2]`.
///
/// `v1:v0` is the normalized divisor (`v1` has its high bit set). Estimates
/// the digit from the two most significant limbs of the window, corrects the
/// estimate downward using `v0` and the next limb, then subtracts
/// `digit * divisor` from the window, adding the divisor back once if the
/// subtraction borrows out. Returns the quotient digit.
fn div_digit_step(un: &mut [u64], j: usize, v1: u64, v0: u64) -> u64 {
    let u2 = un[j + 2];
    let u1 = un[j + 1];
    let u0 = un[j];

    // D3.
    // q_hat is our guess for this quotient digit
    // q_hat = min(b - 1, (u2 * b + u1) / v1), b = 1 << LIMB_BITS
    // Theorem B: q_hat >= q >= q_hat - 2
    let mut q_hat = if u2 < v1 {
        let mut r_hat = 0;
        let mut q_hat = udiv128_by_64(u2, u1, v1, &mut r_hat);
        let mut overflow: bool;
        // this loop takes at most 2 iterations
        loop {
            let another_iteration = {
                // check if q_hat * v0 > b * r_hat + u0
                let (lo, hi) = widening_mul(q_hat, v0);
                hi > r_hat || (hi == r_hat && lo > u0)
            };
            if !another_iteration {
                break;
            }
            q_hat -= 1;
            (r_hat, overflow) = r_hat.overflowing_add(v1);
            // if r_hat overflowed, we're done
            if overflow {
                break;
            }
        }
        q_hat
    } else {
        // here q_hat >= q >= q_hat - 1
        u64::MAX
    };

    // D4.
    // subtract q_hat * divisor from the window
    let (p0_lo, p0_hi) = widening_mul(q_hat, v0);
    let (p1_lo, p1_hi) = widening_mul(q_hat, v1);
    let (mid, c) = p0_hi.overflowing_add(p1_lo);
    let top = p1_hi + c as u64;

    let mut borrow = false;
    (un[j], borrow) = sub_borrow(un[j], p0_lo, borrow);
    (un[j + 1], borrow) = sub_borrow(un[j + 1], mid, borrow);
    (un[j + 2], borrow) = sub_borrow(un[j + 2], top, borrow);

    // D6.
    // actually q_hat was one too large and the window has underflowed,
    // highly unlikely ~ (1 / 2^63)
    if borrow {
        q_hat -= 1;
        // add the divisor back
        let mut carry = false;
        (un[j], carry) = add_carry(un[j], v0, carry);
        (un[j + 1], carry) = add_carry(un[j + 1], v1, carry);
        un[j + 2] = un[j + 2].wrapping_add(carry as u64);
    }

    q_hat
}

/// Divides a 2-limb dividend by a 2-limb divisor with `v.high() != 0` and
/// `v <= u`. The quotient is a single digit.
fn knuth_div_mod(u: U128, v: U128) -> (U128, U128) {
    // D1.
    // Make sure the divisor's highest bit is set. Shifting both operands
    // leaves the quotient unchanged; only the remainder needs shifting back.
    let shift = v.high().leading_zeros();
    debug_assert!(shift < LIMB_BITS);
    let v = v.wrapping_shl(shift);
    debug_assert!(v.high() >> (LIMB_BITS - 1) == 1);
    // un will hold the (shifted) remainder
    let mut un = full_shl(u, shift);

    // D2. D7. - only one digit position here (n == 2, m == 0)
    let q = div_digit_step(&mut un, 0, v.high(), v.low());

    // D8.
    let remainder = full_shr(&un, shift);

    (U128::from_words(0, q), remainder)
}

/// Divides a 4-limb dividend `u_hi:u_lo` by a 2-limb divisor with
/// `v.high() != 0` and `u_hi < v`, so the quotient fits two limbs.
fn knuth_div_mod_wide(u_hi: U128, u_lo: U128, v: U128) -> (U128, U128) {
    let shift = v.high().leading_zeros();
    debug_assert!(shift < LIMB_BITS);
    let v = v.wrapping_shl(shift);
    debug_assert!(v.high() >> (LIMB_BITS - 1) == 1);

    // Shift the 4-limb dividend left; the bits shifted out of the top limb
    // spill into a fifth limb.
    let lo = full_shl(u_lo, shift);
    let hi = full_shl(u_hi, shift);
    let mut un = [lo[0], lo[1], hi[0] | lo[2], hi[1], hi[2]];

    // D2..D7. - two digit positions (n == 2, m == 1), most significant first
    let q1 = div_digit_step(&mut un, 1, v.high(), v.low());
    let q0 = div_digit_step(&mut un, 0, v.high(), v.low());
    debug_assert!(un[2] == 0 && un[3] == 0 && un[4] == 0);

    // D8.
    let remainder = full_shr(&[un[0], un[1], un[2]], shift);

    (U128::from_words(q1, q0), remainder)
}

/// Divides `u` by `v`, returning `(quotient, remainder)`.
///
/// `v` must be nonzero.
pub(crate) fn div_rem_u128(u: U128, v: U128) -> (U128, U128) {
    debug_assert!(!v.is_zero());

    if u.high() | v.high() == 0 {
        (
            U128::from_words(0, u.low() / v.low()),
            U128::from_words(0, u.low() % v.low()),
        )
    } else if v > u {
        (U128::ZERO, u)
    } else if v.high() == 0 {
        // single-limb divisor: divide limb by limb with a running remainder
        let mut r = 0;
        if u.high() < v.low() {
            let q = udiv128_by_64(u.high(), u.low(), v.low(), &mut r);
            (U128::from_words(0, q), U128::from_words(0, r))
        } else {
            let q_hi = u.high() / v.low();
            let q_lo = udiv128_by_64(u.high() % v.low(), u.low(), v.low(), &mut r);
            (U128::from_words(q_hi, q_lo), U128::from_words(0, r))
        }
    } else {
        knuth_div_mod(u, v)
    }
}

/// Divides the double-width dividend `u_hi:u_lo` by `v`, returning
/// `(quotient, remainder)`, or `None` when `v` is zero or the quotient does
/// not fit in 128 bits (i.e. `u_hi >= v`).
pub(crate) fn div_rem_wide(u_hi: U128, u_lo: U128, v: U128) -> Option<(U128, U128)> {
    if v.is_zero() || u_hi >= v {
        return None;
    }

    if u_hi.is_zero() {
        return Some(div_rem_u128(u_lo, v));
    }

    if v.high() == 0 {
        // u_hi < v, so the dividend occupies at most three limbs
        let mut r = 0;
        let q_hi = udiv128_by_64(u_hi.low(), u_lo.high(), v.low(), &mut r);
        let q_lo = udiv128_by_64(r, u_lo.low(), v.low(), &mut r);
        return Some((U128::from_words(q_hi, q_lo), U128::from_words(0, r)));
    }

    Some(knuth_div_mod_wide(u_hi, u_lo, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(val: u128) -> U128 {
        U128::from(val)
    }

    #[test]
    fn test_udiv128_by_64() {
        fn assert_div(u1: u64, u0: u64, v: u64) {
            let mut r = 0;
            let q = udiv128_by_64(u1, u0, v, &mut r);
            let dividend = ((u1 as u128) << 64) | u0 as u128;
            assert_eq!(q as u128, dividend / v as u128);
            assert_eq!(r as u128, dividend % v as u128);
        }

        assert_div(0, 100, 7);
        assert_div(1, 0, 3);
        assert_div(0, u64::MAX, u64::MAX);
        assert_div(u64::MAX - 1, u64::MAX, u64::MAX);
        assert_div(5, 0x1234_5678_9ABC_DEF0, 17);
        assert_div(0x7FFF_FFFF_FFFF_FFFF, u64::MAX, 1 << 63);
        assert_div(1, 1, 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_div_rem_against_native() {
        fn assert_div(a: u128, b: u128) {
            let (q, r) = div_rem_u128(u(a), u(b));
            assert_eq!(u128::from(q), a / b, "quotient of {} / {}", a, b);
            assert_eq!(u128::from(r), a % b, "remainder of {} / {}", a, b);
        }

        // both operands in one limb
        assert_div(3, 2);
        assert_div(100, 100);
        assert_div(u64::MAX as u128, 7);

        // single-limb divisor
        assert_div(u128::MAX, 1);
        assert_div(u128::MAX, u64::MAX as u128);
        assert_div(u128::MAX, 10_000_000_000_000_000_000);
        assert_div(1 << 127, 3);
        assert_div((u64::MAX as u128) << 64, u64::MAX as u128);
        assert_div(0x1234_5678_9ABC_DEF0_1122_3344_5566_7788, 0xFF00_FF00);

        // two-limb divisor
        assert_div(u128::MAX, u128::MAX);
        assert_div(u128::MAX, (1 << 64) | 1);
        assert_div(u128::MAX, u128::MAX / 2);
        assert_div(1 << 127, (1 << 126) + 1);
        assert_div(
            214_064_674_252_647_095_149_109_719_693_322_140_207,
            320_000_000_000_000_000_000_000_000_000_000_000_000,
        );
        assert_div(
            0xFEDC_BA98_7654_3210_FEDC_BA98_7654_3210,
            0x0000_0001_0000_0000_0000_0000_0000_0001,
        );

        // dividend smaller than divisor
        assert_div(1, 1 << 127);
        assert_div((1 << 64) + 5, (1 << 64) + 6);
    }

    #[test]
    fn test_div_rem_max_by_limb_max() {
        // (2^128 - 1) / (2^64 - 1) == 2^64 + 1 exactly
        let (q, r) = div_rem_u128(U128::MAX, u(u64::MAX as u128));
        assert_eq!(q, U128::from_words(1, 1));
        assert_eq!(r, U128::ZERO);
    }

    #[test]
    fn test_div_rem_wide() {
        fn assert_div(q: u128, v: u128, rem: u128) {
            assert!(rem < v);
            // dividend = q * v + rem, built as a 256-bit value
            let (lo, hi) = crate::arith::widening_mul_u128(u(q), u(v));
            let (lo, carry) = lo.overflowing_add(u(rem));
            let hi = if carry { hi.wrapping_add(U128::ONE) } else { hi };

            let (quotient, remainder) = div_rem_wide(hi, lo, u(v)).unwrap();
            assert_eq!(u128::from(quotient), q, "quotient of {} * {} + {}", q, v, rem);
            assert_eq!(u128::from(remainder), rem, "remainder of {} * {} + {}", q, v, rem);
        }

        // single-limb divisors
        assert_div(u128::MAX, 10_000_000_000_000_000_000, 17);
        assert_div(u128::MAX, u64::MAX as u128, u64::MAX as u128 - 1);
        assert_div(1 << 127, 3, 2);

        // two-limb divisors
        assert_div(u128::MAX, u128::MAX, u128::MAX - 1);
        assert_div(u128::MAX, (1 << 64) | 1, 1 << 64);
        assert_div(0x1234_5678_9ABC_DEF0, u128::MAX / 3, 12345);
        assert_div(3, (1 << 127) + 41, (1 << 127) + 40);
        assert_div(
            227_632_606_340_157_585_901_208_756_549_081_254_077,
            320_000_000_000_000_000_000_000_000_000_000_000_000,
            5,
        );

        // high part zero falls back to plain division
        assert_eq!(
            div_rem_wide(U128::ZERO, u(100), u(7)).unwrap(),
            (u(14), u(2))
        );
    }

    #[test]
    fn test_div_rem_wide_overflow() {
        // quotient would need more than 128 bits
        assert_eq!(div_rem_wide(u(1), u(0), u(1)), None);
        assert_eq!(div_rem_wide(u(2), u(0), u(1)), None);
        assert_eq!(div_rem_wide(U128::MAX, U128::MAX, U128::MAX), None);

        // division by zero
        assert_eq!(div_rem_wide(U128::ZERO, u(5), U128::ZERO), None);
    }
}
