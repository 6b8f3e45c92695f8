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

//! serde implementation.
//!
//! Human-readable formats carry the decimal string rendering, binary
//! formats carry the 16-byte little-endian representation.

use crate::int::I128;
use crate::uint::U128;

macro_rules! impl_serde {
    ($t: ident, $expecting: literal) => {
        impl serde::Serialize for $t {
            #[inline]
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.collect_str(self)
                } else {
                    serializer.serialize_bytes(&self.to_le_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            #[inline]
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                struct IntVisitor;

                impl<'de> serde::de::Visitor<'de> for IntVisitor {
                    type Value = $t;

                    #[inline]
                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        write!(formatter, $expecting)
                    }

                    #[inline]
                    fn visit_str<E>(self, v: &str) -> Result<$t, E>
                    where
                        E: serde::de::Error,
                    {
                        v.parse().map_err(serde::de::Error::custom)
                    }

                    #[inline]
                    fn visit_bytes<E>(self, v: &[u8]) -> Result<$t, E>
                    where
                        E: serde::de::Error,
                    {
                        if v.len() != 16 {
                            return Err(serde::de::Error::invalid_length(v.len(), &self));
                        }
                        let mut bytes = [0; 16];
                        bytes.copy_from_slice(v);
                        Ok($t::from_le_bytes(bytes))
                    }
                }

                if deserializer.is_human_readable() {
                    deserializer.deserialize_str(IntVisitor)
                } else {
                    deserializer.deserialize_bytes(IntVisitor)
                }
            }
        }
    };
}

impl_serde!(U128, "a string containing an unsigned 128-bit integer");
impl_serde!(I128, "a string containing a signed 128-bit integer");
