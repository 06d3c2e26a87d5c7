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

//! Registered object types, encoded as maps keyed by field.

use crate::error::Error;
use crate::meta::Fields;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::types::Shape;
use crate::wire::Node;

/// A structured type described by an ordered list of named fields.
///
/// `register` is called at most once per type and registry; the resulting
/// list is memoized. Implement it by hand, or derive it with
/// `#[derive(WireObject)]`. Hand-written impls get their
/// [`Serializer`](crate::Serializer) glue from [`object_serializer!`](crate::object_serializer).
///
/// ```rust
/// use fieldwire_core::meta::{member, Fields};
/// use fieldwire_core::{object_serializer, Object};
///
/// #[derive(Default)]
/// struct Inside {
///     i_age: i32,
///     i_value: f32,
///     i_v: Vec<i32>,
/// }
///
/// impl Object for Inside {
///     fn register(fields: &mut Fields<Self>) {
///         fields
///             .push(member("i_age", |s: &Inside| &s.i_age, |s: &mut Inside| &mut s.i_age).with_default(100))
///             .push(member("i_value", |s: &Inside| &s.i_value, |s: &mut Inside| &mut s.i_value))
///             .push(member("i_v", |s: &Inside| &s.i_v, |s: &mut Inside| &mut s.i_v));
///     }
/// }
///
/// object_serializer!(Inside);
/// ```
pub trait Object: Sized + 'static {
    fn register(fields: &mut Fields<Self>);
}

/// Writes one map entry per registered field, in registration order.
pub fn write<T: Object>(value: &T, context: &mut WriteContext) -> Result<(), Error> {
    let fields = context.get_resolver().fields::<T>()?;
    context.encoder.start_map(fields.len());
    for field in fields.iter() {
        context.encoder.write_key(field.key());
        field.write(value, context)?;
    }
    context.encoder.finish_map();
    Ok(())
}

/// Reads every registered field from a map node.
///
/// An absent key takes the field's default, or fails with `missing value` at
/// the key's path. Failures inside a present field get the key prepended.
pub fn read<T: Object>(value: &mut T, context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
    if !node.is_map() {
        return Err(Error::type_error(Shape::Object.expected_name()));
    }
    let fields = context.get_resolver().fields::<T>()?;
    for field in fields.iter() {
        match node.map_get(field.key()) {
            Some(child) => field
                .read(value, context, child)
                .map_err(|e| e.with_prefix(field.key()))?,
            None => {
                if !field.fill_default(value) {
                    return Err(Error::missing_value(field.key()));
                }
            }
        }
    }
    Ok(())
}

/// Implements [`Serializer`](crate::Serializer) and
/// [`WireDefault`](crate::WireDefault) for types with a hand-written
/// [`Object`] impl. `WireDefault` comes from `Default`.
#[macro_export]
macro_rules! object_serializer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::serializer::Serializer for $ty {
                #[inline(always)]
                fn wire_shape() -> $crate::types::Shape {
                    $crate::types::Shape::Object
                }

                #[inline(always)]
                fn wire_write(
                    &self,
                    context: &mut $crate::resolver::context::WriteContext,
                ) -> ::std::result::Result<(), $crate::error::Error> {
                    $crate::serializer::struct_::write(self, context)
                }

                #[inline(always)]
                fn wire_read(
                    &mut self,
                    context: &mut $crate::resolver::context::ReadContext,
                    node: &dyn $crate::wire::Node,
                ) -> ::std::result::Result<(), $crate::error::Error> {
                    $crate::serializer::struct_::read(self, context, node)
                }
            }

            impl $crate::serializer::WireDefault for $ty {
                #[inline(always)]
                fn wire_default() -> Self {
                    <$ty as ::std::default::Default>::default()
                }
            }
        )+
    };
}
