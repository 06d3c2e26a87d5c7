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

use crate::config::Config;
use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::type_resolver::{ReadFn, TypeResolver, WriteFn};
use crate::serializer::{self, Object, Serializer, WireDefault};
use crate::wire::json::{self, JsonWriter};
use crate::wire::msgpack::{self, MsgpackNode, MsgpackWriter};
use crate::wire::{Encoder, Node};
use serde_json::Value;
use std::sync::OnceLock;

/// Entry point for encoding and decoding.
///
/// A `Fieldwire` owns the registry of object field lists and whole-type
/// serializers. It is `Send + Sync`; share one instance rather than building
/// one per call, since field lists are memoized per instance.
///
/// ```rust
/// use fieldwire_core::Fieldwire;
///
/// let fieldwire = Fieldwire::default().pretty_json(false).max_depth(64);
/// let text = fieldwire.to_json_string(&vec![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(text, "[1,2,3,4,5]");
/// let back: Vec<i32> = fieldwire.from_json_str("[6,66,666]").unwrap();
/// assert_eq!(back, vec![6, 66, 666]);
/// ```
#[derive(Default)]
pub struct Fieldwire {
    config: Config,
    type_resolver: TypeResolver,
}

impl Fieldwire {
    /// Renders JSON text with indentation and newlines.
    pub fn pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty_json = pretty;
        self
    }

    /// Fails encode and decode of values nested deeper than `max_depth`
    /// containers. Unbounded by default.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = Some(max_depth);
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_type_resolver(&self) -> &TypeResolver {
        &self.type_resolver
    }

    /// Builds the field list of `T` now instead of on first use, reporting a
    /// type without fields early.
    pub fn register<T: Object>(&self) -> Result<(), Error> {
        self.type_resolver.register::<T>()
    }

    /// Replaces shape dispatch for `T` with `write_fn`/`read_fn` wherever `T`
    /// is encoded or decoded through this instance.
    ///
    /// ```rust
    /// use fieldwire_core::error::Error;
    /// use fieldwire_core::wire::Node;
    /// use fieldwire_core::{Fieldwire, ReadContext, WriteContext};
    ///
    /// fn write_flag(value: &bool, context: &mut WriteContext) -> Result<(), Error> {
    ///     context.encoder.write_str(if *value { "yes" } else { "no" });
    ///     Ok(())
    /// }
    ///
    /// fn read_flag(value: &mut bool, _: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
    ///     *value = node.as_str().ok_or_else(|| Error::type_error("string"))? == "yes";
    ///     Ok(())
    /// }
    ///
    /// let fieldwire = Fieldwire::default();
    /// fieldwire.register_serializer::<bool>(write_flag, read_flag);
    /// assert_eq!(fieldwire.to_json_string(&[true, false]).unwrap(), r#"["yes","no"]"#);
    /// ```
    pub fn register_serializer<T: Serializer>(&self, write_fn: WriteFn<T>, read_fn: ReadFn<T>) {
        self.type_resolver.register_serializer::<T>(write_fn, read_fn);
    }

    /// Encodes `value` through any [`Encoder`].
    pub fn encode<T: Serializer>(&self, value: &T, encoder: &mut dyn Encoder) -> Result<(), Error> {
        let mut context = WriteContext::new(&self.type_resolver, encoder, self.config.max_depth());
        serializer::write(value, &mut context)
    }

    /// Decodes `node` into `value` in place.
    pub fn decode<T: Serializer>(&self, value: &mut T, node: &dyn Node) -> Result<(), Error> {
        let mut context = ReadContext::new(&self.type_resolver, self.config.max_depth());
        serializer::read(value, &mut context, node)
    }

    pub fn to_json_value<T: Serializer>(&self, value: &T) -> Result<Value, Error> {
        let mut writer = JsonWriter::new();
        self.encode(value, &mut writer)?;
        writer.finish()
    }

    pub fn to_json_string<T: Serializer>(&self, value: &T) -> Result<String, Error> {
        let tree = self.to_json_value(value)?;
        json::render(&tree, self.config.is_pretty_json())
    }

    pub fn from_json_value<T: Serializer + WireDefault>(&self, tree: &Value) -> Result<T, Error> {
        let mut value = T::wire_default();
        self.decode(&mut value, tree)?;
        Ok(value)
    }

    pub fn from_json_str<T: Serializer + WireDefault>(&self, text: &str) -> Result<T, Error> {
        let tree = json::parse(text)?;
        self.from_json_value(&tree)
    }

    /// Decodes JSON text into an existing value.
    pub fn decode_json<T: Serializer>(&self, value: &mut T, text: &str) -> Result<(), Error> {
        let tree = json::parse(text)?;
        self.decode(value, &tree)
    }

    pub fn to_msgpack<T: Serializer>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let mut writer = MsgpackWriter::new();
        self.encode(value, &mut writer)?;
        writer.into_bytes()
    }

    /// Appends the MessagePack encoding of `value` to `buf`. Nothing is
    /// appended if encoding fails.
    pub fn write_msgpack<T: Serializer>(&self, value: &T, buf: &mut Vec<u8>) -> Result<(), Error> {
        let bytes = self.to_msgpack(value)?;
        buf.extend_from_slice(&bytes);
        Ok(())
    }

    pub fn from_msgpack<T: Serializer + WireDefault>(&self, bytes: &[u8]) -> Result<T, Error> {
        let node = msgpack::parse(bytes)?;
        let mut value = T::wire_default();
        self.decode(&mut value, &node)?;
        Ok(value)
    }

    /// Decodes MessagePack bytes into an existing value.
    pub fn decode_msgpack<T: Serializer>(&self, value: &mut T, bytes: &[u8]) -> Result<(), Error> {
        let node = msgpack::parse(bytes)?;
        self.decode(value, &node)
    }

    /// Decodes an already parsed MessagePack tree into an existing value.
    pub fn decode_msgpack_node<T: Serializer>(
        &self,
        value: &mut T,
        node: &MsgpackNode,
    ) -> Result<(), Error> {
        self.decode(value, node)
    }
}

/// The process-wide instance behind the `fieldwire` convenience functions.
pub fn global() -> &'static Fieldwire {
    static GLOBAL: OnceLock<Fieldwire> = OnceLock::new();
    GLOBAL.get_or_init(Fieldwire::default)
}
