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

/// Configuration for a [`Fieldwire`](crate::fieldwire::Fieldwire) instance.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Whether `to_json_string` renders indented JSON instead of the compact form.
    pub pretty_json: bool,
    /// Maximum container nesting depth for encode and decode. `None` means unbounded.
    pub max_depth: Option<usize>,
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn is_pretty_json(&self) -> bool {
        self.pretty_json
    }

    #[inline(always)]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}
