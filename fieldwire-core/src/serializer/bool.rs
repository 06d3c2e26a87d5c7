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

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{Serializer, WireDefault};
use crate::types::Shape;
use crate::wire::Node;

impl Serializer for bool {
    #[inline(always)]
    fn wire_shape() -> Shape {
        Shape::Bool
    }

    #[inline(always)]
    fn wire_write(&self, context: &mut WriteContext) -> Result<(), Error> {
        context.encoder.write_bool(*self);
        Ok(())
    }

    #[inline(always)]
    fn wire_read(&mut self, _context: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
        *self = node
            .as_bool()
            .ok_or_else(|| Error::type_error(Shape::Bool.expected_name()))?;
        Ok(())
    }
}

impl WireDefault for bool {
    #[inline(always)]
    fn wire_default() -> Self {
        false
    }
}
