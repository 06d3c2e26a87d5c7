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

//! The generic codec engine.
//!
//! Every codec-capable type implements [`Serializer`]. Nested values are never
//! encoded by calling `wire_write`/`wire_read` directly; they go through
//! [`write`] and [`read`], which give a registered whole-type serializer the
//! first say and keep track of container depth.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::Shape;
use crate::wire::Node;
use std::any::type_name;
use tracing::trace;

mod array;
mod bool;
pub mod bytes;
pub mod enum_;
mod list;
mod number;
mod string;
pub mod struct_;

pub use bytes::Bytes;
pub use struct_::Object;

/// Value used as the decode target before a wire node is read into it.
///
/// This is separate from `Default` so object types can supply their
/// registered defaults and so it can be implemented for foreign types.
pub trait WireDefault: Sized {
    fn wire_default() -> Self;
}

pub trait Serializer: 'static {
    /// The wire-mapping strategy of the type.
    fn wire_shape() -> Shape
    where
        Self: Sized;

    /// Writes the value through `context.encoder`.
    fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error>;

    /// Overwrites `self` with the value decoded from `node`.
    ///
    /// On failure `self` may be partially updated.
    fn wire_read(&mut self, context: &mut ReadContext, node: &dyn Node) -> Result<(), Error>;
}

/// The shape `T` is encoded with.
#[inline(always)]
pub fn shape_of<T: Serializer>() -> Shape {
    T::wire_shape()
}

/// Encodes `value`, honouring a whole-type serializer registered for `T`.
#[inline(always)]
pub fn write<T: Serializer>(value: &T, context: &mut WriteContext) -> Result<(), Error> {
    if let Some(harness) = context.get_resolver().get_harness::<T>() {
        trace!(type_name = type_name::<T>(), "encode via whole-type serializer");
        return (harness.get_write_fn())(value, context);
    }
    if !T::wire_shape().is_container() {
        return value.wire_write(context);
    }
    context.inc_depth()?;
    let result = value.wire_write(context);
    context.dec_depth();
    result
}

/// Decodes `node` into `value`, honouring a whole-type serializer registered for `T`.
#[inline(always)]
pub fn read<T: Serializer>(
    value: &mut T,
    context: &mut ReadContext,
    node: &dyn Node,
) -> Result<(), Error> {
    if let Some(harness) = context.get_resolver().get_harness::<T>() {
        trace!(type_name = type_name::<T>(), "decode via whole-type serializer");
        return (harness.get_read_fn())(value, context, node);
    }
    if !T::wire_shape().is_container() {
        return value.wire_read(context, node);
    }
    context.inc_depth()?;
    let result = value.wire_read(context, node);
    context.dec_depth();
    result
}
