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

//! # Fieldwire Derive Macros
//!
//! ### `#[derive(WireObject)]`
//!
//! Registers every named field of a struct, in declaration order, and emits
//! the `Object`, `Serializer` and `WireDefault` impls. Field attributes:
//!
//! - `#[wire(rename = "key")]`: wire key, defaults to the field name
//! - `#[wire(default = expr)]`: value used when the key is absent on decode
//! - `#[wire(skip)]`: not registered; filled with `Default::default()`
//! - `#[wire(from_wire = path, to_wire = path)]`: wire transform pair
//!
//! ```rust,ignore
//! use fieldwire::{WireEnum, WireObject};
//!
//! #[derive(WireEnum, Clone, Copy, Debug, PartialEq)]
//! enum Gender {
//!     Male = 0,
//!     Female = 1,
//! }
//!
//! #[derive(WireObject, Debug)]
//! struct Person {
//!     #[wire(default = 50)]
//!     age: i32,
//!     value: f32,
//!     #[wire(default = Gender::Male)]
//!     gender: Gender,
//! }
//! ```
//!
//! ### `#[derive(WireEnum)]`
//!
//! Encodes a fieldless enum as its discriminant. The variant marked
//! `#[default]`, or else the first variant, is the decode starting value.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

#[proc_macro_derive(WireObject, attributes(wire))]
pub fn proc_macro_derive_wire_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_object(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(WireEnum, attributes(wire))]
pub fn proc_macro_derive_wire_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_enum(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
