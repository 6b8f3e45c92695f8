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

//! Fixed-width 128-bit integers built from two 64-bit limbs.
//!
//! `U128` and `I128` mirror the API of the primitive integer types with
//! explicit overflow reporting, a full-width `128 x 128 -> 256` multiply
//! and its inverse wide division, and string conversion in any base from
//! 2 to 36.
//!
//! ## Optional features
//!
//! ### `serde`
//!
//! When this optional dependency is enabled, `U128` and `I128` implement
//! the `serde::Serialize` and `serde::Deserialize` traits.
//!
//! ## Usage
//!
//! Integers can be parsed from strings and formatted back:
//!
//! ```
//! use int128_rs::U128;
//!
//! let n1: U128 = "170141183460469231731687303715884105728".parse().unwrap();
//! let n2: U128 = "12345".parse().unwrap();
//! let result = n1 + n2;
//! assert_eq!(result.to_string(), "170141183460469231731687303715884118073");
//! ```
//!
//! To build an integer from Rust primitive types:
//!
//! ```
//! use int128_rs::I128;
//!
//! let n1 = I128::from(-123_i32);
//! let n2 = I128::from(456_i32);
//! assert_eq!(n1 + n2, I128::from(333_i32));
//! ```
//!
//! Every arithmetic operation is available in an overflow-reporting form:
//!
//! ```
//! use int128_rs::U128;
//!
//! let (wrapped, overflow) = U128::MAX.overflowing_add(U128::ONE);
//! assert_eq!(wrapped, U128::ZERO);
//! assert!(overflow);
//! ```
//!
//! The full product of two 128-bit integers never overflows:
//!
//! ```
//! use int128_rs::U128;
//!
//! let a = U128::MAX;
//! let (low, high) = a.widening_mul(a);
//! assert_eq!(low, U128::ONE);
//! assert_eq!(high, U128::MAX - U128::ONE);
//!
//! let (quot, rem) = a.div_rem_wide(high, low);
//! assert_eq!(quot, a);
//! assert_eq!(rem, U128::ZERO);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod arith;
mod convert;
mod div;
mod error;
mod fmt;
mod int;
mod ops;
mod parse;
mod uint;

#[cfg(feature = "serde")]
mod serde;

pub use crate::error::{Int128ConvertError, Int128ParseError};
pub use crate::int::I128;
pub use crate::uint::U128;
