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

//! Octet strings.
//!
//! `Vec<u8>` is an ordinary sequence of integers. Wrapping it in [`Bytes`]
//! selects the binary encoding instead: MessagePack `bin`, or an array of
//! integers in formats without a binary type.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{self, Serializer, WireDefault};
use crate::types::Shape;
use crate::wire::Node;
use std::ops::{Deref, DerefMut};

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn new() -> Bytes {
        Bytes(Vec::new())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(value: Vec<u8>) -> Self {
        Bytes(value)
    }
}

impl From<&[u8]> for Bytes {
    fn from(value: &[u8]) -> Self {
        Bytes(value.to_vec())
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl DerefMut for Bytes {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serializer for Bytes {
    #[inline(always)]
    fn wire_shape() -> Shape {
        Shape::Sequence
    }

    fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.encoder.write_bin(&self.0);
        Ok(())
    }

    fn wire_read(&mut self, context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
        if let Some(bin) = node.as_bin() {
            self.0.clear();
            self.0.extend_from_slice(bin);
            return Ok(());
        }
        let Some(len) = node.array_len() else {
            return Err(Error::type_error("binary"));
        };
        self.0.clear();
        self.0.reserve(len);
        for index in 0..len {
            let child = node.array_at(index).ok_or_else(|| {
                Error::invalid_data(format!("array element {index} is missing"))
            })?;
            let mut octet = 0u8;
            serializer::read(&mut octet, context, child)
                .map_err(|e| e.with_prefix(index.to_string()))?;
            self.0.push(octet);
        }
        Ok(())
    }
}

impl WireDefault for Bytes {
    #[inline(always)]
    fn wire_default() -> Self {
        Bytes::new()
    }
}
