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

//! Double-word primitives over 64-bit limbs.
//!
//! Everything wider in this crate is built from the operations in this
//! module: add/sub with carry propagation, widening 64×64→128 multiplication
//! assembled from 32-bit half-words, and the full 128×128→256 product.

use crate::uint::U128;

pub(crate) const LIMB_BITS: u32 = 64;

#[inline]
pub(crate) const fn add_carry(a: u64, b: u64, c: bool) -> (u64, bool) {
    let (res1, overflow1) = b.overflowing_add(c as u64);
    let (res2, overflow2) = a.overflowing_add(res1);

    (res2, overflow1 || overflow2)
}

#[inline]
pub(crate) const fn sub_borrow(a: u64, b: u64, c: bool) -> (u64, bool) {
    let (res1, overflow1) = b.overflowing_add(c as u64);
    let (res2, overflow2) = a.overflowing_sub(res1);

    (res2, overflow1 || overflow2)
}

/// Sums three limbs, returning the low limb and the carry count (0..=2).
#[inline]
pub(crate) const fn add3(a: u64, b: u64, c: u64) -> (u64, u64) {
    let (s, c1) = a.overflowing_add(b);
    let (s, c2) = s.overflowing_add(c);

    (s, c1 as u64 + c2 as u64)
}

// returns (lo, hi)
#[inline]
const fn split_limb(a: u64) -> (u64, u64) {
    (a & 0xFFFF_FFFF, a >> (LIMB_BITS / 2))
}

/// Widening 64×64→128 multiplication, returns `(lo, hi)`.
///
/// Works on 32-bit half-words so that no intermediate product needs more
/// than one native limb.
#[inline]
pub(crate) const fn widening_mul(a: u64, b: u64) -> (u64, u64) {
    let (a0, a1) = split_limb(a);
    let (b0, b1) = split_limb(b);

    let t = a0 * b0;
    let (w3, k) = split_limb(t);

    let t = a1 * b0 + k;
    let (w1, w2) = split_limb(t);
    let t = a0 * b1 + w1;
    let k = t >> (LIMB_BITS / 2);

    let hi = a1 * b1 + w2 + k;
    let lo = (t << (LIMB_BITS / 2)) + w3;

    (lo, hi)
}

/// Full 128×128→256 multiplication, returns `(low, high)`.
///
/// The four pairwise 64×64 partial products are summed into the four output
/// limbs with explicit carry propagation; a carry out of one limb feeds the
/// sum of the next.
#[inline]
pub(crate) const fn widening_mul_u128(a: U128, b: U128) -> (U128, U128) {
    let (ll_lo, ll_hi) = widening_mul(a.low(), b.low());
    let (lh_lo, lh_hi) = widening_mul(a.low(), b.high());
    let (hl_lo, hl_hi) = widening_mul(a.high(), b.low());
    let (hh_lo, hh_hi) = widening_mul(a.high(), b.high());

    let (limb1, carry1) = add3(ll_hi, lh_lo, hl_lo);
    let (limb2, c1) = add3(lh_hi, hl_hi, hh_lo);
    let (limb2, c2) = limb2.overflowing_add(carry1);
    let carry2 = c1 + c2 as u64;
    // the total product is below 2^256, so the top limb cannot carry out
    let limb3 = hh_hi + carry2;

    (U128::from_words(limb1, ll_lo), U128::from_words(limb3, limb2))
}

/// Shifts a 128-bit value left by `shift < 64` bits into a 3-limb array,
/// least significant limb first.
#[inline]
pub(crate) fn full_shl(a: U128, shift: u32) -> [u64; 3] {
    debug_assert!(shift < LIMB_BITS);
    if shift == 0 {
        return [a.low(), a.high(), 0];
    }

    [
        a.low() << shift,
        (a.high() << shift) | (a.low() >> (LIMB_BITS - shift)),
        a.high() >> (LIMB_BITS - shift),
    ]
}

/// Shifts a 3-limb array right by `shift < 64` bits back into a 128-bit
/// value, discarding the bits above bit 127.
#[inline]
pub(crate) fn full_shr(u: &[u64; 3], shift: u32) -> U128 {
    debug_assert!(shift < LIMB_BITS);
    if shift == 0 {
        return U128::from_words(u[1], u[0]);
    }

    let low = (u[0] >> shift) | (u[1] << (LIMB_BITS - shift));
    let high = (u[1] >> shift) | (u[2] << (LIMB_BITS - shift));

    U128::from_words(high, low)
}
