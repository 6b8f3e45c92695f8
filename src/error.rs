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

//! Error definitions.

use thiserror::Error;

/// An error which can be returned when parsing a 128-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Int128ParseError {
    /// Empty string.
    #[error("cannot parse integer from empty string")]
    Empty,
    /// Invalid digit for the requested radix.
    #[error("invalid digit found in string")]
    Invalid,
    /// Value does not fit in 128 bits.
    #[error("number out of range for a 128-bit integer")]
    Overflow,
    /// Radix outside `2..=36`.
    #[error("radix must lie in the range 2..=36")]
    InvalidRadix,
}

/// An error which can be returned when a conversion between an integer type
/// and `U128`/`I128` fails.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Int128ConvertError {
    /// Value out of range for the target type.
    #[error("out of range integral type conversion attempted")]
    Overflow,
}

impl From<Int128ParseError> for Int128ConvertError {
    #[inline]
    fn from(_: Int128ParseError) -> Self {
        Int128ConvertError::Overflow
    }
}
