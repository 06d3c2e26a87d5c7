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

//! Integer-coded enumerations.
//!
//! `#[derive(WireEnum)]` expands to calls into these helpers. An enum whose
//! wire form is not its discriminant implements [`Serializer`](crate::Serializer)
//! by hand or registers a whole-type serializer instead.

use crate::error::Error;
use crate::resolver::context::WriteContext;
use crate::types::Shape;
use crate::wire::Node;
use std::any::type_name;

#[inline(always)]
pub fn write_discriminant(discriminant: i64, context: &mut WriteContext) -> Result<(), Error> {
    context.encoder.write_int(discriminant);
    Ok(())
}

#[inline(always)]
pub fn read_discriminant(node: &dyn Node) -> Result<i64, Error> {
    node.as_i64()
        .ok_or_else(|| Error::type_error(Shape::Enum.expected_name()))
}

#[cold]
pub fn unknown_variant<T>(discriminant: i64) -> Error {
    Error::unknown_enum(discriminant, type_name::<T>())
}
