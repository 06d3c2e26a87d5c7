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

use crate::ensure;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{self, Serializer, WireDefault};
use crate::types::Shape;
use crate::wire::Node;

/// Writes `items` as one array of `items.len()` elements.
pub(super) fn write_elements<T: Serializer>(
    items: &[T],
    context: &mut WriteContext,
) -> Result<(), Error> {
    context.encoder.start_array(items.len());
    for item in items {
        serializer::write(item, context)?;
    }
    context.encoder.finish_array();
    Ok(())
}

/// Decodes element `i` of `node` into `items[i]`. The caller has checked that
/// `node` holds at least `items.len()` elements.
pub(super) fn read_elements<T: Serializer>(
    items: &mut [T],
    context: &mut ReadContext,
    node: &dyn Node,
) -> Result<(), Error> {
    for (index, item) in items.iter_mut().enumerate() {
        let child = node.array_at(index).ok_or_else(|| {
            Error::invalid_data(format!("array element {index} is missing"))
        })?;
        serializer::read(item, context, child).map_err(|e| e.with_prefix(index.to_string()))?;
    }
    Ok(())
}

impl<T: Serializer, const N: usize> Serializer for [T; N] {
    #[inline(always)]
    fn wire_shape() -> Shape {
        Shape::FixedArray(N)
    }

    fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        write_elements(self, context)
    }

    fn wire_read(&mut self, context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
        let len = node
            .array_len()
            .ok_or_else(|| Error::type_error(Self::wire_shape().expected_name()))?;
        ensure!(len == N, Error::size_mismatch(N, len));
        read_elements(self, context, node)
    }
}

impl<T: WireDefault, const N: usize> WireDefault for [T; N] {
    fn wire_default() -> Self {
        std::array::from_fn(|_| T::wire_default())
    }
}
