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

//! The collaborator surface the codec engine drives.
//!
//! The engine never touches a concrete format. Encoding goes through an
//! [`Encoder`], a streaming writer with explicitly sized containers;
//! decoding reads a parsed tree through [`Node`]. Each format implements
//! both sides once:
//!
//! - [`json`]: builds and reads `serde_json::Value` trees.
//! - [`msgpack`]: writes MessagePack bytes and reads a parsed MessagePack tree.

pub mod json;
pub mod msgpack;

use crate::types::NodeKind;

/// Streaming writer for one wire format.
///
/// Containers declare their size up front. A map of `n` entries is written as
/// `start_map(n)`, then `n` times `write_key` followed by one value, then
/// `finish_map()`. Writers record misuse (wrong child counts, values without
/// keys) and report it when the output is taken.
pub trait Encoder {
    fn write_nil(&mut self);

    fn write_bool(&mut self, value: bool);

    fn write_int(&mut self, value: i64);

    fn write_uint(&mut self, value: u64);

    fn write_f32(&mut self, value: f32);

    fn write_f64(&mut self, value: f64);

    fn write_str(&mut self, value: &str);

    /// Raw octets. Formats without a binary type write an array of integers.
    fn write_bin(&mut self, value: &[u8]);

    fn start_array(&mut self, len: usize);

    fn finish_array(&mut self);

    fn start_map(&mut self, len: usize);

    fn write_key(&mut self, key: &str);

    fn finish_map(&mut self);
}

/// Read access to one node of a parsed wire tree.
///
/// Every typed accessor returns `None` when the node is not of that kind, which
/// the engine turns into a type error.
pub trait Node {
    fn kind(&self) -> NodeKind;

    fn as_bool(&self) -> Option<bool>;

    /// Integer value if the node is an integer that fits `i64`.
    fn as_i64(&self) -> Option<i64>;

    /// Integer value if the node is a non-negative integer.
    fn as_u64(&self) -> Option<u64>;

    /// Any numeric node, integers included.
    fn as_f64(&self) -> Option<f64>;

    fn as_str(&self) -> Option<&str>;

    fn as_bin(&self) -> Option<&[u8]> {
        None
    }

    fn array_len(&self) -> Option<usize>;

    fn array_at(&self, index: usize) -> Option<&dyn Node>;

    /// `None` if the node is not a map or has no entry for `key`.
    fn map_get(&self, key: &str) -> Option<&dyn Node>;

    #[inline(always)]
    fn is_map(&self) -> bool {
        self.kind() == NodeKind::Map
    }

    #[inline(always)]
    fn map_contains(&self, key: &str) -> bool {
        self.map_get(key).is_some()
    }
}
