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

//! # Fieldwire
//!
//! Describe a struct once as an ordered list of named fields, then encode it
//! to and decode it from JSON or MessagePack. Missing keys fall back to
//! registered defaults, fields may carry a wire transform, and every decode
//! failure reports the dotted path of the offending node.
//!
//! ```rust
//! use fieldwire::{Error, WireEnum, WireObject};
//!
//! #[derive(WireEnum, Clone, Copy, Debug, PartialEq)]
//! enum Gender {
//!     Male = 0,
//!     Female = 1,
//! }
//!
//! #[derive(WireObject, Debug, PartialEq)]
//! struct Inside {
//!     #[wire(default = 100)]
//!     i_age: i32,
//!     i_value: f32,
//!     i_v: Vec<i32>,
//! }
//!
//! #[derive(WireObject, Debug, PartialEq)]
//! struct Person {
//!     #[wire(default = 50)]
//!     age: i32,
//!     value: f32,
//!     #[wire(default = Gender::Male)]
//!     gender: Gender,
//!     test_uint: u32,
//!     inside: Inside,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let person = Person {
//!     age: 1,
//!     value: 1.0,
//!     gender: Gender::Male,
//!     test_uint: 1,
//!     inside: Inside { i_age: 1, i_value: 1.0, i_v: vec![1, 2, 3, 4, 5] },
//! };
//! assert_eq!(
//!     fieldwire::to_json_string(&person)?,
//!     r#"{"age":1,"value":1.0,"gender":0,"test_uint":1,"inside":{"i_age":1,"i_value":1.0,"i_v":[1,2,3,4,5]}}"#
//! );
//!
//! let decoded: Person = fieldwire::from_json_str(
//!     r#"{"value":233.0,"test_uint":2,"inside":{"i_value":0.233,"i_v":[6,66,666]}}"#,
//! )?;
//! assert_eq!(decoded.age, 50);
//! assert_eq!(decoded.inside.i_age, 100);
//!
//! let err = fieldwire::from_json_str::<Person>(
//!     r#"{"value":1,"test_uint":2,"inside":{"i_value":1,"i_v":[1,1.0]}}"#,
//! )
//! .unwrap_err();
//! assert_eq!(err.path(), "inside.i_v.1");
//! assert_eq!(err.expected_type(), Some("integer"));
//! # Ok(())
//! # }
//! ```
//!
//! The free functions in this crate use one process-wide [`Fieldwire`]
//! instance. Build your own instance for non-default configuration or an
//! isolated registry.

pub use fieldwire_core::{
    accessor, bail, ensure, error::Error, global, member, object_serializer, shape_of,
    types::NodeKind, types::Shape, Bytes, Config, Encoder, Field, FieldSpec, Fields, Fieldwire,
    JsonWriter, MsgpackNode, MsgpackWriter, Node, Object, ReadContext, Serializer,
    TransformedSpec, WireDefault, WriteContext,
};
pub use fieldwire_derive::{WireEnum, WireObject};

use fieldwire_core::resolver::type_resolver::{ReadFn, WriteFn};
use serde_json::Value;

pub fn to_json_value<T: Serializer>(value: &T) -> Result<Value, Error> {
    global().to_json_value(value)
}

pub fn to_json_string<T: Serializer>(value: &T) -> Result<String, Error> {
    global().to_json_string(value)
}

pub fn from_json_value<T: Serializer + WireDefault>(tree: &Value) -> Result<T, Error> {
    global().from_json_value(tree)
}

pub fn from_json_str<T: Serializer + WireDefault>(text: &str) -> Result<T, Error> {
    global().from_json_str(text)
}

pub fn decode_json<T: Serializer>(value: &mut T, text: &str) -> Result<(), Error> {
    global().decode_json(value, text)
}

pub fn to_msgpack<T: Serializer>(value: &T) -> Result<Vec<u8>, Error> {
    global().to_msgpack(value)
}

pub fn write_msgpack<T: Serializer>(value: &T, buf: &mut Vec<u8>) -> Result<(), Error> {
    global().write_msgpack(value, buf)
}

pub fn from_msgpack<T: Serializer + WireDefault>(bytes: &[u8]) -> Result<T, Error> {
    global().from_msgpack(bytes)
}

pub fn decode_msgpack<T: Serializer>(value: &mut T, bytes: &[u8]) -> Result<(), Error> {
    global().decode_msgpack(value, bytes)
}

pub fn decode_msgpack_node<T: Serializer>(value: &mut T, node: &MsgpackNode) -> Result<(), Error> {
    global().decode_msgpack_node(value, node)
}

pub fn encode<T: Serializer>(value: &T, encoder: &mut dyn Encoder) -> Result<(), Error> {
    global().encode(value, encoder)
}

pub fn decode<T: Serializer>(value: &mut T, node: &dyn Node) -> Result<(), Error> {
    global().decode(value, node)
}

pub fn register<T: Object>() -> Result<(), Error> {
    global().register::<T>()
}

pub fn register_serializer<T: Serializer>(write_fn: WriteFn<T>, read_fn: ReadFn<T>) {
    global().register_serializer::<T>(write_fn, read_fn)
}
