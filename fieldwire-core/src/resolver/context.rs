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
use crate::resolver::type_resolver::TypeResolver;
use crate::wire::Encoder;

/// State carried through one encode call.
pub struct WriteContext<'a> {
    pub encoder: &'a mut dyn Encoder,
    resolver: &'a TypeResolver,
    max_depth: Option<usize>,
    current_depth: usize,
}

impl<'a> WriteContext<'a> {
    pub fn new(
        resolver: &'a TypeResolver,
        encoder: &'a mut dyn Encoder,
        max_depth: Option<usize>,
    ) -> WriteContext<'a> {
        WriteContext {
            encoder,
            resolver,
            max_depth,
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_resolver(&self) -> &'a TypeResolver {
        self.resolver
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.current_depth
    }

    #[inline(always)]
    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        check_depth(self.current_depth, self.max_depth)
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

/// State carried through one decode call.
pub struct ReadContext<'a> {
    resolver: &'a TypeResolver,
    max_depth: Option<usize>,
    current_depth: usize,
}

impl<'a> ReadContext<'a> {
    pub fn new(resolver: &'a TypeResolver, max_depth: Option<usize>) -> ReadContext<'a> {
        ReadContext {
            resolver,
            max_depth,
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn get_resolver(&self) -> &'a TypeResolver {
        self.resolver
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.current_depth
    }

    #[inline(always)]
    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        check_depth(self.current_depth, self.max_depth)
    }

    #[inline(always)]
    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

#[inline(always)]
fn check_depth(current: usize, max_depth: Option<usize>) -> Result<(), Error> {
    match max_depth {
        Some(max) if current > max => Err(Error::depth_exceed(max)),
        _ => Ok(()),
    }
}
