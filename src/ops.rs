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

//! Ops implementation.

use crate::int::I128;
use crate::uint::U128;
use std::convert::TryFrom;
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

impl Neg for I128 {
    type Output = I128;

    #[inline]
    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Some(res) => res,
            None => panic!("Negation overflowed"),
        }
    }
}

impl Neg for &'_ I128 {
    type Output = I128;

    #[inline]
    fn neg(self) -> Self::Output {
        (*self).neg()
    }
}

macro_rules! impl_arith {
    ($t: ident, $op: ident { $method: ident, $checked: ident }, $msg: literal) => {
        impl $op for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $t) -> Self::Output {
                match self.$checked(other) {
                    Some(res) => res,
                    None => panic!($msg),
                }
            }
        }

        impl $op<&'_ $t> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: &$t) -> Self::Output {
                self.$method(*other)
            }
        }

        impl $op<$t> for &'_ $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $t) -> Self::Output {
                (*self).$method(other)
            }
        }

        impl $op<&'_ $t> for &'_ $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: &$t) -> Self::Output {
                (*self).$method(*other)
            }
        }
    };
}

impl_arith!(U128, Add { add, checked_add }, "Addition overflowed");
impl_arith!(U128, Sub { sub, checked_sub }, "Subtraction overflowed");
impl_arith!(U128, Mul { mul, checked_mul }, "Multiplication overflowed");
impl_arith!(U128, Div { div, checked_div }, "Division by zero or overflowed");
impl_arith!(U128, Rem { rem, checked_rem }, "Division by zero or overflowed");

impl_arith!(I128, Add { add, checked_add }, "Addition overflowed");
impl_arith!(I128, Sub { sub, checked_sub }, "Subtraction overflowed");
impl_arith!(I128, Mul { mul, checked_mul }, "Multiplication overflowed");
impl_arith!(I128, Div { div, checked_div }, "Division by zero or overflowed");
impl_arith!(I128, Rem { rem, checked_rem }, "Division by zero or overflowed");

macro_rules! impl_arith_assign {
    ($t: ident, $op: ident { $assign_method: ident, $method: ident }) => {
        impl $op for $t {
            #[inline(always)]
            fn $assign_method(&mut self, other: $t) {
                let result = self.$method(other);
                *self = result;
            }
        }

        impl $op<&'_ $t> for $t {
            #[inline(always)]
            fn $assign_method(&mut self, other: &$t) {
                let result = self.$method(*other);
                *self = result;
            }
        }
    };
}

impl_arith_assign!(U128, AddAssign { add_assign, add });
impl_arith_assign!(U128, SubAssign { sub_assign, sub });
impl_arith_assign!(U128, MulAssign { mul_assign, mul });
impl_arith_assign!(U128, DivAssign { div_assign, div });
impl_arith_assign!(U128, RemAssign { rem_assign, rem });

impl_arith_assign!(I128, AddAssign { add_assign, add });
impl_arith_assign!(I128, SubAssign { sub_assign, sub });
impl_arith_assign!(I128, MulAssign { mul_assign, mul });
impl_arith_assign!(I128, DivAssign { div_assign, div });
impl_arith_assign!(I128, RemAssign { rem_assign, rem });

macro_rules! impl_arith_with_num {
    ($t: ident, $op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method($t::from(other))
            }
        }

        impl $op<$int> for &'_ $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                (*self).$method($t::from(other))
            }
        }

        impl $op<$t> for $int {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $t) -> Self::Output {
                $t::from(self).$method(other)
            }
        }

        impl $op<&'_ $t> for $int {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: &'_ $t) -> Self::Output {
                $t::from(self).$method(*other)
            }
        }
    };
    ($t: ident, $op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_with_num!($t, $op { $method } $int);)*
    };
}

macro_rules! impl_arith_try_with_num {
    ($t: ident, $op: ident { $method: ident } $int: ty) => {
        impl $op<$int> for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                self.$method($t::try_from(other).unwrap())
            }
        }

        impl $op<$int> for &'_ $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $int) -> Self::Output {
                (*self).$method($t::try_from(other).unwrap())
            }
        }

        impl $op<$t> for $int {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $t) -> Self::Output {
                $t::try_from(self).unwrap().$method(other)
            }
        }

        impl $op<&'_ $t> for $int {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: &'_ $t) -> Self::Output {
                $t::try_from(self).unwrap().$method(*other)
            }
        }
    };
    ($t: ident, $op: ident { $method: ident } $($int: ty), * $(,)?) => {
        $(impl_arith_try_with_num!($t, $op { $method } $int);)*
    };
}

impl_arith_with_num!(U128, Add { add } u8, u16, u32, u64, usize, u128);
impl_arith_with_num!(U128, Sub { sub } u8, u16, u32, u64, usize, u128);
impl_arith_with_num!(U128, Mul { mul } u8, u16, u32, u64, usize, u128);
impl_arith_with_num!(U128, Div { div } u8, u16, u32, u64, usize, u128);
impl_arith_with_num!(U128, Rem { rem } u8, u16, u32, u64, usize, u128);

impl_arith_try_with_num!(U128, Add { add } i8, i16, i32, i64, isize, i128);
impl_arith_try_with_num!(U128, Sub { sub } i8, i16, i32, i64, isize, i128);
impl_arith_try_with_num!(U128, Mul { mul } i8, i16, i32, i64, isize, i128);
impl_arith_try_with_num!(U128, Div { div } i8, i16, i32, i64, isize, i128);
impl_arith_try_with_num!(U128, Rem { rem } i8, i16, i32, i64, isize, i128);

impl_arith_with_num!(I128, Add { add } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_arith_with_num!(I128, Sub { sub } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_arith_with_num!(I128, Mul { mul } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_arith_with_num!(I128, Div { div } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_arith_with_num!(I128, Rem { rem } u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);

impl_arith_try_with_num!(I128, Add { add } u128);
impl_arith_try_with_num!(I128, Sub { sub } u128);
impl_arith_try_with_num!(I128, Mul { mul } u128);
impl_arith_try_with_num!(I128, Div { div } u128);
impl_arith_try_with_num!(I128, Rem { rem } u128);

impl Sum for U128 {
    #[inline(always)]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(U128::ZERO, Add::add)
    }
}

impl Product for U128 {
    #[inline(always)]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(U128::ONE, Mul::mul)
    }
}

impl Sum for I128 {
    #[inline(always)]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(I128::ZERO, Add::add)
    }
}

impl Product for I128 {
    #[inline(always)]
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(I128::ONE, Mul::mul)
    }
}

macro_rules! impl_bit_op {
    ($t: ident, $op: ident { $method: ident }, $assign_op: ident { $assign_method: ident }, $sym: tt) => {
        impl $op for $t {
            type Output = $t;

            #[inline(always)]
            fn $method(self, other: $t) -> Self::Output {
                $t::from_words(self.high() $sym other.high(), self.low() $sym other.low())
            }
        }

        impl $assign_op for $t {
            #[inline(always)]
            fn $assign_method(&mut self, other: $t) {
                *self = self.$method(other);
            }
        }
    };
}

impl_bit_op!(U128, BitAnd { bitand }, BitAndAssign { bitand_assign }, &);
impl_bit_op!(U128, BitOr { bitor }, BitOrAssign { bitor_assign }, |);
impl_bit_op!(U128, BitXor { bitxor }, BitXorAssign { bitxor_assign }, ^);
impl_bit_op!(I128, BitAnd { bitand }, BitAndAssign { bitand_assign }, &);
impl_bit_op!(I128, BitOr { bitor }, BitOrAssign { bitor_assign }, |);
impl_bit_op!(I128, BitXor { bitxor }, BitXorAssign { bitxor_assign }, ^);

macro_rules! impl_not {
    ($t: ident) => {
        impl Not for $t {
            type Output = $t;

            #[inline(always)]
            fn not(self) -> Self::Output {
                $t::from_words(!self.high(), !self.low())
            }
        }

        impl Not for &'_ $t {
            type Output = $t;

            #[inline(always)]
            fn not(self) -> Self::Output {
                (*self).not()
            }
        }
    };
}

impl_not!(U128);
impl_not!(I128);

macro_rules! impl_shift {
    ($t: ident) => {
        impl Shl<u32> for $t {
            type Output = $t;

            #[inline]
            fn shl(self, rhs: u32) -> Self::Output {
                match self.checked_shl(rhs) {
                    Some(res) => res,
                    None => panic!("attempt to shift left with overflow"),
                }
            }
        }

        impl Shr<u32> for $t {
            type Output = $t;

            #[inline]
            fn shr(self, rhs: u32) -> Self::Output {
                match self.checked_shr(rhs) {
                    Some(res) => res,
                    None => panic!("attempt to shift right with overflow"),
                }
            }
        }

        impl ShlAssign<u32> for $t {
            #[inline(always)]
            fn shl_assign(&mut self, rhs: u32) {
                *self = self.shl(rhs);
            }
        }

        impl ShrAssign<u32> for $t {
            #[inline(always)]
            fn shr_assign(&mut self, rhs: u32) {
                *self = self.shr(rhs);
            }
        }
    };
}

impl_shift!(U128);
impl_shift!(I128);

#[cfg(test)]
mod tests {
    use crate::int::I128;
    use crate::uint::U128;

    #[test]
    fn test_unsigned_arith_ops() {
        let a = U128::from(100_000_000u128);
        let b = U128::from(100_000_000u128);
        assert_eq!(a * b, U128::from(10_000_000_000_000_000u128));
        assert_eq!(a + b, U128::from(200_000_000u128));
        assert_eq!(a - b, U128::ZERO);
        assert_eq!(a / b, U128::ONE);
        assert_eq!(a % b, U128::ZERO);
        assert_eq!(&a + &b, a + b);
        assert_eq!(a + &b, a + b);
        assert_eq!(&a * b, a * b);
    }

    #[test]
    fn test_signed_arith_ops() {
        let a = I128::from(-15i128);
        let b = I128::from(4i128);
        assert_eq!(a + b, I128::from(-11i128));
        assert_eq!(a - b, I128::from(-19i128));
        assert_eq!(a * b, I128::from(-60i128));
        assert_eq!(a / b, I128::from(-3i128));
        assert_eq!(a % b, I128::from(-3i128));
        assert_eq!(-a, I128::from(15i128));
        assert_eq!(-&b, I128::from(-4i128));
    }

    #[test]
    fn test_assign_ops() {
        let mut val = U128::from(10u128);
        val += U128::from(5u128);
        val *= U128::from(4u128);
        val -= U128::from(20u128);
        val /= U128::from(8u128);
        assert_eq!(val, U128::from(5u128));
        val %= U128::from(3u128);
        assert_eq!(val, U128::from(2u128));

        let mut val = I128::from(-10i128);
        val += I128::from(4i128);
        val /= I128::from(2i128);
        assert_eq!(val, I128::from(-3i128));
    }

    #[test]
    fn test_mixed_operands() {
        let val = U128::from(100u128);
        assert_eq!(val + 1u8, U128::from(101u128));
        assert_eq!(val * 3u64, U128::from(300u128));
        assert_eq!(1000u32 - val, U128::from(900u128));
        assert_eq!(val / 7i32, U128::from(14u128));

        let val = I128::from(-100i128);
        assert_eq!(val + 1u8, I128::from(-99i128));
        assert_eq!(val * -2i64, I128::from(200i128));
        assert_eq!(50i32 + val, I128::from(-50i128));
    }

    #[test]
    #[should_panic(expected = "Addition overflowed")]
    fn test_add_overflow_panics() {
        let _ = U128::MAX + U128::ONE;
    }

    #[test]
    #[should_panic(expected = "Subtraction overflowed")]
    fn test_sub_overflow_panics() {
        let _ = U128::ZERO - U128::ONE;
    }

    #[test]
    #[should_panic(expected = "Multiplication overflowed")]
    fn test_mul_overflow_panics() {
        let _ = I128::MIN * I128::from(-1i128);
    }

    #[test]
    #[should_panic(expected = "Division by zero or overflowed")]
    fn test_div_by_zero_panics() {
        let _ = U128::ONE / U128::ZERO;
    }

    #[test]
    #[should_panic(expected = "Division by zero or overflowed")]
    fn test_rem_overflow_panics() {
        let _ = I128::MIN % I128::from(-1i128);
    }

    #[test]
    #[should_panic(expected = "Negation overflowed")]
    fn test_neg_overflow_panics() {
        let _ = -I128::MIN;
    }

    #[test]
    fn test_bit_ops() {
        let a = U128::from_words(0xF0F0, 0x00FF);
        let b = U128::from_words(0xFF00, 0x0F0F);
        assert_eq!(a & b, U128::from_words(0xF000, 0x000F));
        assert_eq!(a | b, U128::from_words(0xFFF0, 0x0FFF));
        assert_eq!(a ^ b, U128::from_words(0x0FF0, 0x0FF0));
        assert_eq!(!U128::ZERO, U128::MAX);
        assert_eq!(!I128::ZERO, I128::from(-1i128));

        let mut val = a;
        val &= b;
        assert_eq!(val, a & b);
        val |= a;
        assert_eq!(val, (a & b) | a);
    }

    #[test]
    fn test_shift_ops() {
        // 1 << 127 sets only the top bit
        assert_eq!(U128::ONE << 127, U128::from_words(1 << 63, 0));
        assert_eq!(I128::ONE << 127, I128::MIN);
        assert_eq!(U128::from_words(1 << 63, 0) >> 127, U128::ONE);
        assert_eq!(I128::MIN >> 127, I128::from(-1i128));

        let mut val = U128::ONE;
        val <<= 64;
        assert_eq!(val, U128::from_words(1, 0));
        val >>= 60;
        assert_eq!(val, U128::from(16u128));
    }

    #[test]
    #[should_panic(expected = "attempt to shift left with overflow")]
    fn test_shl_overflow_panics() {
        let _ = U128::ONE << 128;
    }

    #[test]
    #[should_panic(expected = "attempt to shift right with overflow")]
    fn test_shr_overflow_panics() {
        let _ = I128::ONE >> 128;
    }

    #[test]
    fn test_sum_product() {
        let sum: U128 = (1u64..=100).map(U128::from).sum();
        assert_eq!(sum, U128::from(5050u128));

        let product: U128 = (1u64..=34).map(U128::from).product();
        let expected = (1u128..=34).product::<u128>();
        assert_eq!(product, U128::from(expected));

        let sum: I128 = [-5i128, 3, -1].iter().map(|&v| I128::from(v)).sum();
        assert_eq!(sum, I128::from(-3i128));

        let product: I128 = [-2i128, 3, -7, 5].iter().map(|&v| I128::from(v)).product();
        assert_eq!(product, I128::from(210i128));
    }
}
