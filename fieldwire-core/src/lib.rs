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

//! # Fieldwire Core
//!
//! Field-registration codec engine. A structured type describes itself once
//! as an ordered list of named fields; the engine then walks that list to
//! encode values to, and decode them from, two wire formats: a JSON tree and
//! MessagePack bytes.
//!
//! ## Architecture
//!
//! - **`serializer`**: the [`Serializer`] trait, its impls for scalars,
//!   strings, fixed arrays, sequences and octet strings, and the object engine
//! - **`meta`**: field descriptors (direct member or accessor pair, optional
//!   default, optional wire transform)
//! - **`resolver`**: the memoized per-type registry and the encode/decode contexts
//! - **`wire`**: the [`Encoder`]/[`Node`] collaborator traits and the JSON and
//!   MessagePack implementations
//! - **`error`**: the path-carrying [`enum@Error`]
//! - **`types`**: [`Shape`] classification and [`NodeKind`]
//! - **`fieldwire`**: the [`Fieldwire`] entry point
//!
//! ## Shapes
//!
//! | Rust type | Shape | Wire form |
//! |---|---|---|
//! | `bool` | `Bool` | boolean |
//! | `i8`..`i64`, `isize` | `SignedInt` | integer |
//! | `u8`..`u64`, `usize` | `UnsignedInt` | non-negative integer |
//! | `f32`, `f64` | `Float` | float (integers accepted on decode) |
//! | `#[derive(WireEnum)]` enums | `Enum` | discriminant as integer |
//! | `String` | `String` | string |
//! | `[T; N]` | `FixedArray(N)` | array of exactly `N` elements |
//! | `Vec<T>` | `Sequence` | array, target resized on decode |
//! | [`Bytes`] | `Sequence` | MessagePack `bin` / JSON integer array |
//! | [`Object`] types | `Object` | map keyed by field |
//!
//! ## Errors
//!
//! Decode failures carry a dotted path from the outermost value to the
//! failing node, e.g. `inside.i_v.1`:
//!
//! ```rust
//! use fieldwire_core::Fieldwire;
//!
//! let fieldwire = Fieldwire::default();
//! let err = fieldwire.from_json_str::<Vec<i32>>("[1, 1.0]").unwrap_err();
//! assert_eq!(err.path(), "1");
//! assert_eq!(err.expected_type(), Some("integer"));
//! ```

pub mod buffer;
pub mod config;
pub mod error;
pub mod fieldwire;
pub mod meta;
pub mod resolver;
pub mod serializer;
pub mod types;
pub mod wire;

pub use config::Config;
pub use error::Error;
pub use fieldwire::{global, Fieldwire};
pub use meta::{accessor, member, Field, FieldSpec, Fields, TransformedSpec};
pub use resolver::context::{ReadContext, WriteContext};
pub use resolver::type_resolver::TypeResolver;
pub use serializer::{shape_of, Bytes, Object, Serializer, WireDefault};
pub use types::{NodeKind, Shape};
pub use wire::json::JsonWriter;
pub use wire::msgpack::{MsgpackNode, MsgpackWriter};
pub use wire::{Encoder, Node};
