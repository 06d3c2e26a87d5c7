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

//! MessagePack writer and tree reader.
//!
//! Integers are written in the smallest encoding that holds them, with
//! non-negative values always taking the unsigned forms. `f32` and `f64`
//! keep their own widths.

use crate::buffer::{Reader, Writer};
use crate::error::Error;
use crate::types::NodeKind;
use crate::wire::{Encoder, Node};

const MAX_NESTING: usize = 512;

struct Container {
    is_map: bool,
    /// Items expected, counting map keys and values separately.
    expected: usize,
    written: usize,
}

/// [`Encoder`] producing MessagePack bytes.
#[derive(Default)]
pub struct MsgpackWriter {
    writer: Writer,
    stack: Vec<Container>,
    roots: usize,
    error: Option<Error>,
}

impl MsgpackWriter {
    pub fn new() -> MsgpackWriter {
        MsgpackWriter::default()
    }

    pub fn with_capacity(capacity: usize) -> MsgpackWriter {
        MsgpackWriter {
            writer: Writer::with_capacity(capacity),
            ..MsgpackWriter::default()
        }
    }

    /// Returns the encoded bytes, or the first misuse recorded while writing.
    pub fn into_bytes(self) -> Result<Vec<u8>, Error> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(Error::encode_error(format!(
                "{} container(s) were started but never finished",
                self.stack.len()
            )));
        }
        if self.roots == 0 {
            return Err(Error::encode_error("no value was written"));
        }
        Ok(self.writer.into_inner())
    }

    fn fail(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(Error::encode_error(message));
        }
    }

    fn count_item(&mut self) {
        match self.stack.last_mut() {
            Some(container) => container.written += 1,
            None => {
                self.roots += 1;
                if self.roots > 1 {
                    self.fail("more than one root value written".to_string());
                }
            }
        }
    }

    fn write_len(&mut self, len: usize, what: &str) -> Option<u32> {
        match u32::try_from(len) {
            Ok(len) => Some(len),
            Err(_) => {
                self.fail(format!("{what} of length {len} does not fit msgpack"));
                None
            }
        }
    }

    fn write_uint_raw(&mut self, value: u64) {
        let w = &mut self.writer;
        if value < 0x80 {
            w.write_u8(value as u8);
        } else if value <= u8::MAX as u64 {
            w.write_u8(0xcc);
            w.write_u8(value as u8);
        } else if value <= u16::MAX as u64 {
            w.write_u8(0xcd);
            w.write_u16(value as u16);
        } else if value <= u32::MAX as u64 {
            w.write_u8(0xce);
            w.write_u32(value as u32);
        } else {
            w.write_u8(0xcf);
            w.write_u64(value);
        }
    }

    fn finish_container(&mut self, is_map: bool) {
        let name = if is_map { "map" } else { "array" };
        match self.stack.pop() {
            Some(container) if container.is_map == is_map => {
                if container.written != container.expected {
                    let (expected, written) = if is_map {
                        (container.expected / 2, container.written / 2)
                    } else {
                        (container.expected, container.written)
                    };
                    self.fail(format!(
                        "{name} declared {expected} entries but {written} were written"
                    ));
                }
            }
            Some(container) => {
                self.stack.push(container);
                self.fail(format!("finish_{name} called on the wrong container"));
            }
            None => self.fail(format!("finish_{name} called without an open {name}")),
        }
    }
}

impl Encoder for MsgpackWriter {
    fn write_nil(&mut self) {
        self.count_item();
        self.writer.write_u8(0xc0);
    }

    fn write_bool(&mut self, value: bool) {
        self.count_item();
        self.writer.write_u8(if value { 0xc3 } else { 0xc2 });
    }

    fn write_int(&mut self, value: i64) {
        if value >= 0 {
            self.write_uint(value as u64);
            return;
        }
        self.count_item();
        let w = &mut self.writer;
        if value >= -32 {
            w.write_i8(value as i8);
        } else if value >= i8::MIN as i64 {
            w.write_u8(0xd0);
            w.write_i8(value as i8);
        } else if value >= i16::MIN as i64 {
            w.write_u8(0xd1);
            w.write_i16(value as i16);
        } else if value >= i32::MIN as i64 {
            w.write_u8(0xd2);
            w.write_i32(value as i32);
        } else {
            w.write_u8(0xd3);
            w.write_i64(value);
        }
    }

    fn write_uint(&mut self, value: u64) {
        self.count_item();
        self.write_uint_raw(value);
    }

    fn write_f32(&mut self, value: f32) {
        self.count_item();
        self.writer.write_u8(0xca);
        self.writer.write_f32(value);
    }

    fn write_f64(&mut self, value: f64) {
        self.count_item();
        self.writer.write_u8(0xcb);
        self.writer.write_f64(value);
    }

    fn write_str(&mut self, value: &str) {
        self.count_item();
        let Some(len) = self.write_len(value.len(), "string") else {
            return;
        };
        let w = &mut self.writer;
        if len < 32 {
            w.write_u8(0xa0 | len as u8);
        } else if len <= u8::MAX as u32 {
            w.write_u8(0xd9);
            w.write_u8(len as u8);
        } else if len <= u16::MAX as u32 {
            w.write_u8(0xda);
            w.write_u16(len as u16);
        } else {
            w.write_u8(0xdb);
            w.write_u32(len);
        }
        w.write_bytes(value.as_bytes());
    }

    fn write_bin(&mut self, value: &[u8]) {
        self.count_item();
        let Some(len) = self.write_len(value.len(), "binary") else {
            return;
        };
        let w = &mut self.writer;
        if len <= u8::MAX as u32 {
            w.write_u8(0xc4);
            w.write_u8(len as u8);
        } else if len <= u16::MAX as u32 {
            w.write_u8(0xc5);
            w.write_u16(len as u16);
        } else {
            w.write_u8(0xc6);
            w.write_u32(len);
        }
        w.write_bytes(value);
    }

    fn start_array(&mut self, len: usize) {
        self.count_item();
        self.stack.push(Container {
            is_map: false,
            expected: len,
            written: 0,
        });
        let Some(len) = self.write_len(len, "array") else {
            return;
        };
        let w = &mut self.writer;
        if len < 16 {
            w.write_u8(0x90 | len as u8);
        } else if len <= u16::MAX as u32 {
            w.write_u8(0xdc);
            w.write_u16(len as u16);
        } else {
            w.write_u8(0xdd);
            w.write_u32(len);
        }
    }

    fn finish_array(&mut self) {
        self.finish_container(false);
    }

    fn start_map(&mut self, len: usize) {
        self.count_item();
        self.stack.push(Container {
            is_map: true,
            expected: len.saturating_mul(2),
            written: 0,
        });
        let Some(len) = self.write_len(len, "map") else {
            return;
        };
        let w = &mut self.writer;
        if len < 16 {
            w.write_u8(0x80 | len as u8);
        } else if len <= u16::MAX as u32 {
            w.write_u8(0xde);
            w.write_u16(len as u16);
        } else {
            w.write_u8(0xdf);
            w.write_u32(len);
        }
    }

    fn write_key(&mut self, key: &str) {
        match self.stack.last() {
            Some(container) if container.is_map && container.written % 2 == 0 => {
                self.write_str(key)
            }
            Some(container) if container.is_map => {
                self.fail("two keys written without a value".to_string())
            }
            _ => self.fail("write_key called outside of a map".to_string()),
        }
    }

    fn finish_map(&mut self) {
        self.finish_container(true);
    }
}

/// A parsed MessagePack value.
#[derive(Clone, Debug, PartialEq)]
pub enum MsgpackNode {
    Nil,
    Bool(bool),
    /// Values read from the signed encodings.
    Int(i64),
    /// Values read from the unsigned encodings, positive fixint included.
    UInt(u64),
    F32(f32),
    F64(f64),
    Str(String),
    Bin(Vec<u8>),
    Array(Vec<MsgpackNode>),
    Map(Vec<(MsgpackNode, MsgpackNode)>),
    Ext(i8, Vec<u8>),
}

/// Parses exactly one MessagePack value. Trailing bytes are an error.
pub fn parse(bytes: &[u8]) -> Result<MsgpackNode, Error> {
    let mut reader = Reader::new(bytes);
    let node = read_node(&mut reader, 0)?;
    if reader.remaining() != 0 {
        return Err(Error::invalid_data(format!(
            "{} trailing bytes after msgpack value",
            reader.remaining()
        )));
    }
    Ok(node)
}

fn read_node(reader: &mut Reader, nesting: usize) -> Result<MsgpackNode, Error> {
    if nesting > MAX_NESTING {
        return Err(Error::invalid_data("msgpack nesting is too deep"));
    }
    let marker = reader.read_u8()?;
    let node = match marker {
        0x00..=0x7f => MsgpackNode::UInt(marker as u64),
        0x80..=0x8f => read_map(reader, (marker & 0x0f) as usize, nesting)?,
        0x90..=0x9f => read_array(reader, (marker & 0x0f) as usize, nesting)?,
        0xa0..=0xbf => read_str(reader, (marker & 0x1f) as usize)?,
        0xc0 => MsgpackNode::Nil,
        0xc2 => MsgpackNode::Bool(false),
        0xc3 => MsgpackNode::Bool(true),
        0xc4 => {
            let len = reader.read_u8()? as usize;
            MsgpackNode::Bin(reader.read_bytes(len)?.to_vec())
        }
        0xc5 => {
            let len = reader.read_u16()? as usize;
            MsgpackNode::Bin(reader.read_bytes(len)?.to_vec())
        }
        0xc6 => {
            let len = reader.read_u32()? as usize;
            MsgpackNode::Bin(reader.read_bytes(len)?.to_vec())
        }
        0xc7 => {
            let len = reader.read_u8()? as usize;
            read_ext(reader, len)?
        }
        0xc8 => {
            let len = reader.read_u16()? as usize;
            read_ext(reader, len)?
        }
        0xc9 => {
            let len = reader.read_u32()? as usize;
            read_ext(reader, len)?
        }
        0xca => MsgpackNode::F32(reader.read_f32()?),
        0xcb => MsgpackNode::F64(reader.read_f64()?),
        0xcc => MsgpackNode::UInt(reader.read_u8()? as u64),
        0xcd => MsgpackNode::UInt(reader.read_u16()? as u64),
        0xce => MsgpackNode::UInt(reader.read_u32()? as u64),
        0xcf => MsgpackNode::UInt(reader.read_u64()?),
        0xd0 => MsgpackNode::Int(reader.read_i8()? as i64),
        0xd1 => MsgpackNode::Int(reader.read_i16()? as i64),
        0xd2 => MsgpackNode::Int(reader.read_i32()? as i64),
        0xd3 => MsgpackNode::Int(reader.read_i64()?),
        0xd4 => read_ext(reader, 1)?,
        0xd5 => read_ext(reader, 2)?,
        0xd6 => read_ext(reader, 4)?,
        0xd7 => read_ext(reader, 8)?,
        0xd8 => read_ext(reader, 16)?,
        0xd9 => {
            let len = reader.read_u8()? as usize;
            read_str(reader, len)?
        }
        0xda => {
            let len = reader.read_u16()? as usize;
            read_str(reader, len)?
        }
        0xdb => {
            let len = reader.read_u32()? as usize;
            read_str(reader, len)?
        }
        0xdc => {
            let len = reader.read_u16()? as usize;
            read_array(reader, len, nesting)?
        }
        0xdd => {
            let len = reader.read_u32()? as usize;
            read_array(reader, len, nesting)?
        }
        0xde => {
            let len = reader.read_u16()? as usize;
            read_map(reader, len, nesting)?
        }
        0xdf => {
            let len = reader.read_u32()? as usize;
            read_map(reader, len, nesting)?
        }
        0xe0..=0xff => MsgpackNode::Int(marker as i8 as i64),
        0xc1 => {
            return Err(Error::invalid_data(format!(
                "invalid msgpack marker 0xc1 at offset {}",
                reader.get_cursor() - 1
            )))
        }
    };
    Ok(node)
}

fn read_str(reader: &mut Reader, len: usize) -> Result<MsgpackNode, Error> {
    let bytes = reader.read_bytes(len)?;
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::invalid_data(format!("msgpack string is not utf-8: {e}")))?;
    Ok(MsgpackNode::Str(text.to_string()))
}

fn read_ext(reader: &mut Reader, len: usize) -> Result<MsgpackNode, Error> {
    let tag = reader.read_i8()?;
    Ok(MsgpackNode::Ext(tag, reader.read_bytes(len)?.to_vec()))
}

fn read_array(reader: &mut Reader, len: usize, nesting: usize) -> Result<MsgpackNode, Error> {
    // every element takes at least one byte
    let mut items = Vec::with_capacity(len.min(reader.remaining()));
    for _ in 0..len {
        items.push(read_node(reader, nesting + 1)?);
    }
    Ok(MsgpackNode::Array(items))
}

fn read_map(reader: &mut Reader, len: usize, nesting: usize) -> Result<MsgpackNode, Error> {
    let mut entries = Vec::with_capacity(len.min(reader.remaining() / 2));
    for _ in 0..len {
        let key = read_node(reader, nesting + 1)?;
        let value = read_node(reader, nesting + 1)?;
        entries.push((key, value));
    }
    Ok(MsgpackNode::Map(entries))
}

impl Node for MsgpackNode {
    fn kind(&self) -> NodeKind {
        match self {
            MsgpackNode::Nil => NodeKind::Nil,
            MsgpackNode::Bool(_) => NodeKind::Bool,
            MsgpackNode::Int(_) => NodeKind::Int,
            MsgpackNode::UInt(_) => NodeKind::UInt,
            MsgpackNode::F32(_) | MsgpackNode::F64(_) => NodeKind::Float,
            MsgpackNode::Str(_) => NodeKind::Str,
            MsgpackNode::Bin(_) => NodeKind::Bin,
            MsgpackNode::Array(_) => NodeKind::Array,
            MsgpackNode::Map(_) => NodeKind::Map,
            MsgpackNode::Ext(..) => NodeKind::Ext,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            MsgpackNode::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            MsgpackNode::Int(v) => Some(*v),
            MsgpackNode::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match self {
            MsgpackNode::UInt(v) => Some(*v),
            MsgpackNode::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            MsgpackNode::F32(v) => Some(*v as f64),
            MsgpackNode::F64(v) => Some(*v),
            MsgpackNode::Int(v) => Some(*v as f64),
            MsgpackNode::UInt(v) => Some(*v as f64),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            MsgpackNode::Str(v) => Some(v),
            _ => None,
        }
    }

    fn as_bin(&self) -> Option<&[u8]> {
        match self {
            MsgpackNode::Bin(v) => Some(v),
            _ => None,
        }
    }

    fn array_len(&self) -> Option<usize> {
        match self {
            MsgpackNode::Array(items) => Some(items.len()),
            _ => None,
        }
    }

    fn array_at(&self, index: usize) -> Option<&dyn Node> {
        match self {
            MsgpackNode::Array(items) => items.get(index).map(|item| item as &dyn Node),
            _ => None,
        }
    }

    fn map_get(&self, key: &str) -> Option<&dyn Node> {
        let MsgpackNode::Map(entries) = self else {
            return None;
        };
        entries
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v as &dyn Node)
    }
}
