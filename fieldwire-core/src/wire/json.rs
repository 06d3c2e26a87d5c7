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

//! Tree/text format backed by `serde_json::Value`.
//!
//! Object keys keep insertion order (`preserve_order`), so maps render in
//! field-registration order.

use crate::error::Error;
use crate::types::NodeKind;
use crate::wire::{Encoder, Node};
use serde_json::{Map, Value};

enum Frame {
    Array {
        items: Vec<Value>,
        expected: usize,
    },
    Map {
        entries: Map<String, Value>,
        expected: usize,
        keys_written: usize,
        key: Option<String>,
    },
}

/// [`Encoder`] that builds a `serde_json::Value`.
#[derive(Default)]
pub struct JsonWriter {
    stack: Vec<Frame>,
    root: Option<Value>,
    error: Option<Error>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter::default()
    }

    /// Returns the finished tree, or the first misuse recorded while writing.
    pub fn finish(self) -> Result<Value, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(Error::encode_error(format!(
                "{} container(s) were started but never finished",
                self.stack.len()
            )));
        }
        self.root
            .ok_or_else(|| Error::encode_error("no value was written"))
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(Error::encode_error(message));
        }
    }

    fn push(&mut self, value: Value) {
        let misuse = match self.stack.last_mut() {
            Some(Frame::Array { items, .. }) => {
                items.push(value);
                None
            }
            Some(Frame::Map { entries, key, .. }) => match key.take() {
                Some(key) => {
                    // a repeated key replaces the earlier value
                    entries.insert(key, value);
                    None
                }
                None => Some("map value written without a key"),
            },
            None if self.root.is_none() => {
                self.root = Some(value);
                None
            }
            None => Some("more than one root value written"),
        };
        if let Some(message) = misuse {
            self.fail(message.to_string());
        }
    }
}

/// Widens an `f32` through its shortest decimal form, so `0.233f32` becomes
/// `0.233` rather than `0.23299999535083771`.
pub(crate) fn widen_f32(value: f32) -> f64 {
    value.to_string().parse::<f64>().unwrap_or(value as f64)
}

impl Encoder for JsonWriter {
    fn write_nil(&mut self) {
        self.push(Value::Null);
    }

    fn write_bool(&mut self, value: bool) {
        self.push(Value::Bool(value));
    }

    fn write_int(&mut self, value: i64) {
        self.push(Value::from(value));
    }

    fn write_uint(&mut self, value: u64) {
        self.push(Value::from(value));
    }

    fn write_f32(&mut self, value: f32) {
        self.push(Value::from(widen_f32(value)));
    }

    fn write_f64(&mut self, value: f64) {
        // non-finite values become null
        self.push(Value::from(value));
    }

    fn write_str(&mut self, value: &str) {
        self.push(Value::String(value.to_string()));
    }

    fn write_bin(&mut self, value: &[u8]) {
        self.push(Value::Array(value.iter().map(|b| Value::from(*b)).collect()));
    }

    fn start_array(&mut self, len: usize) {
        self.stack.push(Frame::Array {
            items: Vec::with_capacity(len),
            expected: len,
        });
    }

    fn finish_array(&mut self) {
        match self.stack.pop() {
            Some(Frame::Array { items, expected }) => {
                if items.len() != expected {
                    self.fail(format!(
                        "array declared {} elements but {} were written",
                        expected,
                        items.len()
                    ));
                }
                self.push(Value::Array(items));
            }
            Some(other) => {
                self.stack.push(other);
                self.fail("finish_array called while a map is open".to_string());
            }
            None => self.fail("finish_array called without an open array".to_string()),
        }
    }

    fn start_map(&mut self, len: usize) {
        self.stack.push(Frame::Map {
            entries: Map::with_capacity(len),
            expected: len,
            keys_written: 0,
            key: None,
        });
    }

    fn write_key(&mut self, key: &str) {
        let misuse = match self.stack.last_mut() {
            Some(Frame::Map {
                key: pending @ None,
                keys_written,
                ..
            }) => {
                *pending = Some(key.to_string());
                *keys_written += 1;
                None
            }
            Some(Frame::Map { .. }) => Some("two keys written without a value"),
            _ => Some("write_key called outside of a map"),
        };
        if let Some(message) = misuse {
            self.fail(message.to_string());
        }
    }

    fn finish_map(&mut self) {
        match self.stack.pop() {
            Some(Frame::Map {
                entries,
                expected,
                keys_written,
                key,
            }) => {
                if key.is_some() {
                    self.fail("map finished with a dangling key".to_string());
                } else if keys_written != expected {
                    self.fail(format!(
                        "map declared {expected} entries but {keys_written} were written"
                    ));
                }
                self.push(Value::Object(entries));
            }
            Some(other) => {
                self.stack.push(other);
                self.fail("finish_map called while an array is open".to_string());
            }
            None => self.fail("finish_map called without an open map".to_string()),
        }
    }
}

impl Node for Value {
    fn kind(&self) -> NodeKind {
        match self {
            Value::Null => NodeKind::Nil,
            Value::Bool(_) => NodeKind::Bool,
            Value::Number(n) if n.is_i64() => NodeKind::Int,
            Value::Number(n) if n.is_u64() => NodeKind::UInt,
            Value::Number(_) => NodeKind::Float,
            Value::String(_) => NodeKind::Str,
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Map,
        }
    }

    #[inline(always)]
    fn as_bool(&self) -> Option<bool> {
        Value::as_bool(self)
    }

    #[inline(always)]
    fn as_i64(&self) -> Option<i64> {
        Value::as_i64(self)
    }

    #[inline(always)]
    fn as_u64(&self) -> Option<u64> {
        Value::as_u64(self)
    }

    #[inline(always)]
    fn as_f64(&self) -> Option<f64> {
        Value::as_f64(self)
    }

    #[inline(always)]
    fn as_str(&self) -> Option<&str> {
        Value::as_str(self)
    }

    fn array_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn array_at(&self, index: usize) -> Option<&dyn Node> {
        self.as_array()
            .and_then(|items| items.get(index))
            .map(|item| item as &dyn Node)
    }

    fn map_get(&self, key: &str) -> Option<&dyn Node> {
        self.as_object()
            .and_then(|entries| entries.get(key))
            .map(|item| item as &dyn Node)
    }
}

/// Renders a tree as JSON text. Compact unless `pretty` is set.
pub fn render(value: &Value, pretty: bool) -> Result<String, Error> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| Error::encode_error(format!("failed to render json: {e}")))
}

/// Parses JSON text into a tree.
pub fn parse(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|e| Error::invalid_data(format!("invalid json: {e}")))
}
