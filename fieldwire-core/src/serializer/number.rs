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

//! Scalar numbers.
//!
//! Signed targets read any integer node that fits `i64`, unsigned targets any
//! non-negative integer node. A value outside the target's range is rejected
//! instead of truncated. Floating-point nodes never satisfy an integer target;
//! float targets accept integer nodes as well.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{Serializer, WireDefault};
use crate::types::Shape;
use crate::wire::Node;

macro_rules! impl_signed_serializer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serializer for $ty {
                #[inline(always)]
                fn wire_shape() -> Shape {
                    Shape::SignedInt
                }

                #[inline(always)]
                fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                    context.encoder.write_int(*self as i64);
                    Ok(())
                }

                #[inline(always)]
                fn wire_read(&mut self, _context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
                    let value = node
                        .as_i64()
                        .ok_or_else(|| Error::type_error(Shape::SignedInt.expected_name()))?;
                    *self = <$ty>::try_from(value)
                        .map_err(|_| Error::out_of_range(value, stringify!($ty)))?;
                    Ok(())
                }
            }

            impl WireDefault for $ty {
                #[inline(always)]
                fn wire_default() -> Self {
                    0
                }
            }
        )+
    };
}

macro_rules! impl_unsigned_serializer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serializer for $ty {
                #[inline(always)]
                fn wire_shape() -> Shape {
                    Shape::UnsignedInt
                }

                #[inline(always)]
                fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                    context.encoder.write_uint(*self as u64);
                    Ok(())
                }

                #[inline(always)]
                fn wire_read(&mut self, _context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
                    let value = node
                        .as_u64()
                        .ok_or_else(|| Error::type_error(Shape::UnsignedInt.expected_name()))?;
                    *self = <$ty>::try_from(value)
                        .map_err(|_| Error::out_of_range(value, stringify!($ty)))?;
                    Ok(())
                }
            }

            impl WireDefault for $ty {
                #[inline(always)]
                fn wire_default() -> Self {
                    0
                }
            }
        )+
    };
}

macro_rules! impl_float_serializer {
    ($ty:ty, $write:ident) => {
        impl Serializer for $ty {
            #[inline(always)]
            fn wire_shape() -> Shape {
                Shape::Float
            }

            #[inline(always)]
            fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
                context.encoder.$write(*self);
                Ok(())
            }

            #[inline(always)]
            fn wire_read(&mut self, _context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
                let value = node
                    .as_f64()
                    .ok_or_else(|| Error::type_error(Shape::Float.expected_name()))?;
                let narrowed = value as $ty;
                // a finite wire value must not overflow to infinity
                if value.is_finite() && !narrowed.is_finite() {
                    return Err(Error::out_of_range(value, stringify!($ty)));
                }
                *self = narrowed;
                Ok(())
            }
        }

        impl WireDefault for $ty {
            #[inline(always)]
            fn wire_default() -> Self {
                0.0
            }
        }
    };
}

impl_signed_serializer!(i8, i16, i32, i64, isize);
impl_unsigned_serializer!(u8, u16, u32, u64, usize);
impl_float_serializer!(f32, write_f32);
impl_float_serializer!(f64, write_f64);
