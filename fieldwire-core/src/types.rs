// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

/// The wire-mapping strategy of a type.
///
/// Every codec-capable type reports exactly one shape through
/// [`Serializer::wire_shape`](crate::serializer::Serializer::wire_shape).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Bool,
    SignedInt,
    UnsignedInt,
    Float,
    /// Integer-coded enumeration, unless a whole-type serializer overrides it.
    Enum,
    String,
    /// Array with a length fixed at compile time.
    FixedArray(usize),
    /// Growable sequence; decode resizes the target.
    Sequence,
    /// Registered structured type, encoded as a map.
    Object,
}

impl Shape {
    /// Display name carried by a type error when a node does not fit this shape.
    pub fn expected_name(&self) -> &'static str {
        match self {
            Shape::Bool => "boolean",
            Shape::SignedInt | Shape::Enum => "integer",
            Shape::UnsignedInt => "unsigned integer",
            Shape::Float => "float",
            Shape::String => "string",
            Shape::FixedArray(_) | Shape::Sequence => "array",
            Shape::Object => "object",
        }
    }

    #[inline(always)]
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Shape::Bool | Shape::SignedInt | Shape::UnsignedInt | Shape::Float | Shape::Enum
        )
    }

    #[inline(always)]
    pub fn is_container(&self) -> bool {
        matches!(self, Shape::FixedArray(_) | Shape::Sequence | Shape::Object)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Bool => f.write_str("bool"),
            Shape::SignedInt => f.write_str("signed int"),
            Shape::UnsignedInt => f.write_str("unsigned int"),
            Shape::Float => f.write_str("float"),
            Shape::Enum => f.write_str("enum"),
            Shape::String => f.write_str("string"),
            Shape::FixedArray(len) => write!(f, "array[{len}]"),
            Shape::Sequence => f.write_str("sequence"),
            Shape::Object => f.write_str("object"),
        }
    }
}

/// Runtime type of a parsed wire node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Nil,
    Bool,
    /// Signed integer. MessagePack negative ints; JSON ints that fit `i64`.
    Int,
    /// Unsigned integer. MessagePack positive ints; JSON ints above `i64::MAX`.
    UInt,
    Float,
    Str,
    Bin,
    Array,
    Map,
    Ext,
}

impl NodeKind {
    #[inline(always)]
    pub fn is_number(&self) -> bool {
        matches!(self, NodeKind::Int | NodeKind::UInt | NodeKind::Float)
    }
}
