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

//! Conversions between `U128`/`I128` and the primitive types.

use crate::error::Int128ConvertError;
use crate::int::I128;
use crate::uint::U128;
use std::convert::TryFrom;
use std::str::FromStr;

impl From<u128> for U128 {
    #[inline]
    fn from(val: u128) -> Self {
        U128::from_words((val >> 64) as u64, val as u64)
    }
}

impl From<U128> for u128 {
    #[inline]
    fn from(val: U128) -> Self {
        ((val.high() as u128) << 64) | val.low() as u128
    }
}

impl From<i128> for I128 {
    #[inline]
    fn from(val: i128) -> Self {
        I128::from_bits(U128::from(val as u128))
    }
}

impl From<I128> for i128 {
    #[inline]
    fn from(val: I128) -> Self {
        u128::from(val.to_bits()) as i128
    }
}

impl TryFrom<U128> for I128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: U128) -> Result<Self, Self::Error> {
        if val > I128::POS_LIMIT {
            Err(Int128ConvertError::Overflow)
        } else {
            Ok(I128::from_bits(val))
        }
    }
}

impl TryFrom<I128> for U128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: I128) -> Result<Self, Self::Error> {
        if val.is_negative() {
            Err(Int128ConvertError::Overflow)
        } else {
            Ok(val.to_bits())
        }
    }
}

impl TryFrom<u128> for I128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: u128) -> Result<Self, Self::Error> {
        I128::try_from(U128::from(val))
    }
}

impl TryFrom<i128> for U128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: i128) -> Result<Self, Self::Error> {
        U128::try_from(I128::from(val))
    }
}

impl TryFrom<U128> for i128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: U128) -> Result<Self, Self::Error> {
        i128::try_from(u128::from(val)).map_err(|_| Int128ConvertError::Overflow)
    }
}

impl TryFrom<I128> for u128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(val: I128) -> Result<Self, Self::Error> {
        u128::try_from(i128::from(val)).map_err(|_| Int128ConvertError::Overflow)
    }
}

macro_rules! impl_from_small_unsigned {
    ($($ty: ty), * $(,)?) => {
        $(
            impl From<$ty> for U128 {
                #[inline]
                fn from(val: $ty) -> Self {
                    U128::from_words(0, val as u64)
                }
            }

            impl From<$ty> for I128 {
                #[inline]
                fn from(val: $ty) -> Self {
                    I128::from_words(0, val as u64)
                }
            }
        )*
    };
}

impl_from_small_unsigned!(bool, u8, u16, u32, u64, usize);

macro_rules! impl_from_small_signed {
    ($($ty: ty), * $(,)?) => {
        $(
            impl From<$ty> for I128 {
                #[inline]
                fn from(val: $ty) -> Self {
                    I128::from(val as i128)
                }
            }

            impl TryFrom<$ty> for U128 {
                type Error = Int128ConvertError;

                #[inline]
                fn try_from(val: $ty) -> Result<Self, Self::Error> {
                    if val < 0 {
                        Err(Int128ConvertError::Overflow)
                    } else {
                        Ok(U128::from_words(0, val as u64))
                    }
                }
            }
        )*
    };
}

impl_from_small_signed!(i8, i16, i32, i64, isize);

macro_rules! impl_try_into_num {
    ($($ty: ty), * $(,)?) => {
        $(
            impl TryFrom<U128> for $ty {
                type Error = Int128ConvertError;

                #[inline]
                fn try_from(val: U128) -> Result<Self, Self::Error> {
                    <$ty>::try_from(u128::from(val)).map_err(|_| Int128ConvertError::Overflow)
                }
            }

            impl TryFrom<I128> for $ty {
                type Error = Int128ConvertError;

                #[inline]
                fn try_from(val: I128) -> Result<Self, Self::Error> {
                    <$ty>::try_from(i128::from(val)).map_err(|_| Int128ConvertError::Overflow)
                }
            }
        )*
    };
}

impl_try_into_num!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<&str> for U128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let val = U128::from_str(s)?;
        Ok(val)
    }
}

impl TryFrom<&str> for I128 {
    type Error = Int128ConvertError;

    #[inline]
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let val = I128::from_str(s)?;
        Ok(val)
    }
}
