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

//! Compact protocol: zigzag varints and field-id deltas.
//!
//! Field headers pack the id delta from the previous field into the high
//! nibble when it lies in `1..=15`; otherwise the low nibble stands alone and a
//! zigzag varint id follows. Boolean fields carry their value in the type
//! nibble and have no payload. Doubles are little-endian.

use crate::buffer::{Reader, Writer};
use crate::config::Config;
use crate::error::Error;
use crate::protocol::{
    check_size, wire_size, DepthTracker, InputProtocol, OutputProtocol, RecursionTracked,
};
use crate::types::{
    TFieldIdentifier, TListIdentifier, TMapIdentifier, TSetIdentifier, TStructIdentifier, TType,
};

const COMPACT_STOP: u8 = 0x00;
const COMPACT_BOOLEAN_TRUE: u8 = 0x01;
const COMPACT_BOOLEAN_FALSE: u8 = 0x02;
const COMPACT_BYTE: u8 = 0x03;
const COMPACT_I16: u8 = 0x04;
const COMPACT_I32: u8 = 0x05;
const COMPACT_I64: u8 = 0x06;
const COMPACT_DOUBLE: u8 = 0x07;
const COMPACT_BINARY: u8 = 0x08;
const COMPACT_LIST: u8 = 0x09;
const COMPACT_SET: u8 = 0x0A;
const COMPACT_MAP: u8 = 0x0B;
const COMPACT_STRUCT: u8 = 0x0C;

fn to_compact_type(field_type: TType) -> Result<u8, Error> {
    Ok(match field_type {
        TType::Stop => COMPACT_STOP,
        TType::Bool => COMPACT_BOOLEAN_TRUE,
        TType::I08 => COMPACT_BYTE,
        TType::I16 => COMPACT_I16,
        TType::I32 => COMPACT_I32,
        TType::I64 => COMPACT_I64,
        TType::Double => COMPACT_DOUBLE,
        TType::String => COMPACT_BINARY,
        TType::List => COMPACT_LIST,
        TType::Set => COMPACT_SET,
        TType::Map => COMPACT_MAP,
        TType::Struct => COMPACT_STRUCT,
        TType::Void => {
            return Err(Error::invalid_data("VOID has no compact protocol encoding"))
        }
    })
}

fn from_compact_type(nibble: u8) -> Result<TType, Error> {
    Ok(match nibble {
        COMPACT_STOP => TType::Stop,
        COMPACT_BOOLEAN_TRUE | COMPACT_BOOLEAN_FALSE => TType::Bool,
        COMPACT_BYTE => TType::I08,
        COMPACT_I16 => TType::I16,
        COMPACT_I32 => TType::I32,
        COMPACT_I64 => TType::I64,
        COMPACT_DOUBLE => TType::Double,
        COMPACT_BINARY => TType::String,
        COMPACT_LIST => TType::List,
        COMPACT_SET => TType::Set,
        COMPACT_MAP => TType::Map,
        COMPACT_STRUCT => TType::Struct,
        other => return Err(Error::unknown_wire_type(other)),
    })
}

#[inline(always)]
fn zigzag_32(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

#[inline(always)]
fn zigzag_64(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

#[inline(always)]
fn unzigzag_32(n: u32) -> i32 {
    ((n >> 1) as i32) ^ -((n & 1) as i32)
}

#[inline(always)]
fn unzigzag_64(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

pub struct CompactInputProtocol<'a> {
    reader: Reader<'a>,
    config: Config,
    depth: DepthTracker,
    last_read_field_id: i16,
    read_field_id_stack: Vec<i16>,
    // value of a boolean field whose header was just read
    pending_read_bool_value: Option<bool>,
}

impl<'a> CompactInputProtocol<'a> {
    pub fn new(bytes: &'a [u8], config: Config) -> CompactInputProtocol<'a> {
        let depth = DepthTracker::new(config.max_depth());
        CompactInputProtocol {
            reader: Reader::new(bytes),
            config,
            depth,
            last_read_field_id: 0,
            read_field_id_stack: Vec::new(),
            pending_read_bool_value: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    pub fn current_depth(&self) -> u32 {
        self.depth.current()
    }

    fn read_container_size(&mut self, size: i64, what: &str) -> Result<usize, Error> {
        let size = check_size(size, self.config.max_container_size(), what)?;
        if size > self.reader.remaining() {
            return Err(Error::buffer_out_of_bound(
                self.reader.get_cursor(),
                size,
                self.reader.get_cursor() + self.reader.remaining(),
            ));
        }
        Ok(size)
    }

    fn read_list_set_begin(&mut self, what: &str) -> Result<(TType, usize), Error> {
        let header = self.reader.read_u8()?;
        let element_type = from_compact_type(header & 0x0F)?;
        let short_size = (header & 0xF0) >> 4;
        let size = if short_size != 15 {
            short_size as i64
        } else {
            self.reader.read_varuint32()? as i32 as i64
        };
        let size = self.read_container_size(size, what)?;
        Ok((element_type, size))
    }

    fn read_bytes(&mut self) -> Result<&'a [u8], Error> {
        let len = self.reader.read_varuint32()? as i32;
        let len = check_size(len as i64, self.config.max_string_size(), "string")?;
        self.reader.read_bytes(len)
    }
}

impl RecursionTracked for CompactInputProtocol<'_> {
    fn increment_recursion_depth(&mut self) -> Result<(), Error> {
        self.depth.increment()
    }

    fn decrement_recursion_depth(&mut self) {
        self.depth.decrement()
    }
}

impl InputProtocol for CompactInputProtocol<'_> {
    fn read_struct_begin(&mut self) -> Result<(), Error> {
        self.read_field_id_stack.push(self.last_read_field_id);
        self.last_read_field_id = 0;
        Ok(())
    }

    fn read_struct_end(&mut self) -> Result<(), Error> {
        self.last_read_field_id = self
            .read_field_id_stack
            .pop()
            .ok_or_else(|| Error::invalid_data("Struct end without a matching struct begin"))?;
        Ok(())
    }

    fn read_field_begin(&mut self) -> Result<TFieldIdentifier, Error> {
        let header = self.reader.read_u8()?;
        let nibble = header & 0x0F;
        let field_type = from_compact_type(nibble)?;
        if field_type == TType::Stop {
            return Ok(TFieldIdentifier::stop());
        }
        let delta = (header & 0xF0) >> 4;
        let id = if delta != 0 {
            self.last_read_field_id.wrapping_add(delta as i16)
        } else {
            unzigzag_32(self.reader.read_varuint32()?) as i16
        };
        self.last_read_field_id = id;
        if field_type == TType::Bool {
            self.pending_read_bool_value = Some(nibble == COMPACT_BOOLEAN_TRUE);
        }
        Ok(TFieldIdentifier {
            name: None,
            field_type,
            id: Some(id),
        })
    }

    fn read_field_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_bool(&mut self) -> Result<bool, Error> {
        match self.pending_read_bool_value.take() {
            Some(b) => Ok(b),
            None => match self.reader.read_u8()? {
                COMPACT_BOOLEAN_TRUE => Ok(true),
                COMPACT_BOOLEAN_FALSE => Ok(false),
                other => Err(Error::invalid_data(format!(
                    "Invalid compact boolean byte: {:#04x}",
                    other
                ))),
            },
        }
    }

    fn read_byte(&mut self) -> Result<i8, Error> {
        self.reader.read_i8()
    }

    fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(unzigzag_32(self.reader.read_varuint32()?) as i16)
    }

    fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(unzigzag_32(self.reader.read_varuint32()?))
    }

    fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(unzigzag_64(self.reader.read_varuint64()?))
    }

    fn read_double(&mut self) -> Result<f64, Error> {
        self.reader.read_f64_le()
    }

    fn read_string(&mut self) -> Result<String, Error> {
        let bytes = self.read_bytes()?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::encoding_error(format!("Invalid UTF-8 string: {}", e)))
    }

    fn read_binary(&mut self) -> Result<Vec<u8>, Error> {
        Ok(self.read_bytes()?.to_vec())
    }

    fn read_list_begin(&mut self) -> Result<TListIdentifier, Error> {
        let (element_type, size) = self.read_list_set_begin("list")?;
        Ok(TListIdentifier::new(element_type, size))
    }

    fn read_list_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_set_begin(&mut self) -> Result<TSetIdentifier, Error> {
        let (element_type, size) = self.read_list_set_begin("set")?;
        Ok(TSetIdentifier::new(element_type, size))
    }

    fn read_set_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_map_begin(&mut self) -> Result<TMapIdentifier, Error> {
        let size = self.reader.read_varuint32()? as i32 as i64;
        let size = self.read_container_size(size, "map")?;
        if size == 0 {
            return Ok(TMapIdentifier::empty());
        }
        let types = self.reader.read_u8()?;
        let key_type = from_compact_type((types & 0xF0) >> 4)?;
        let value_type = from_compact_type(types & 0x0F)?;
        Ok(TMapIdentifier::new(key_type, value_type, size))
    }

    fn read_map_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

pub struct CompactOutputProtocol {
    writer: Writer,
    depth: DepthTracker,
    last_write_field_id: i16,
    write_field_id_stack: Vec<i16>,
    // boolean field header deferred until its value is known
    pending_write_bool_field_id: Option<i16>,
}

impl CompactOutputProtocol {
    pub fn new(config: Config) -> CompactOutputProtocol {
        CompactOutputProtocol {
            writer: Writer::default(),
            depth: DepthTracker::new(config.max_depth()),
            last_write_field_id: 0,
            write_field_id_stack: Vec::new(),
            pending_write_bool_field_id: None,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.writer.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    pub fn current_depth(&self) -> u32 {
        self.depth.current()
    }

    fn write_field_header(&mut self, compact_type: u8, id: i16) {
        let delta = id as i32 - self.last_write_field_id as i32;
        if (1..=15).contains(&delta) {
            self.writer.write_u8(((delta as u8) << 4) | compact_type);
        } else {
            self.writer.write_u8(compact_type);
            self.writer.write_varuint32(zigzag_32(id as i32));
        }
        self.last_write_field_id = id;
    }

    fn write_list_set_begin(
        &mut self,
        element_type: TType,
        size: usize,
        what: &str,
    ) -> Result<(), Error> {
        let size = wire_size(size, what)?;
        let element_type = to_compact_type(element_type)?;
        if size <= 14 {
            self.writer.write_u8(((size as u8) << 4) | element_type);
        } else {
            self.writer.write_u8(0xF0 | element_type);
            self.writer.write_varuint32(size as u32);
        }
        Ok(())
    }
}

impl RecursionTracked for CompactOutputProtocol {
    fn increment_recursion_depth(&mut self) -> Result<(), Error> {
        self.depth.increment()
    }

    fn decrement_recursion_depth(&mut self) {
        self.depth.decrement()
    }
}

impl OutputProtocol for CompactOutputProtocol {
    fn write_struct_begin(&mut self, _identifier: &TStructIdentifier) -> Result<(), Error> {
        self.write_field_id_stack.push(self.last_write_field_id);
        self.last_write_field_id = 0;
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), Error> {
        self.last_write_field_id = self
            .write_field_id_stack
            .pop()
            .ok_or_else(|| Error::invalid_data("Struct end without a matching struct begin"))?;
        Ok(())
    }

    fn write_field_begin(&mut self, identifier: &TFieldIdentifier) -> Result<(), Error> {
        let id = identifier
            .id
            .ok_or_else(|| Error::invalid_data("Field header without a field id"))?;
        if identifier.field_type == TType::Bool {
            if self.pending_write_bool_field_id.is_some() {
                return Err(Error::invalid_data(
                    "Boolean field header written while another is pending",
                ));
            }
            self.pending_write_bool_field_id = Some(id);
            return Ok(());
        }
        let compact_type = to_compact_type(identifier.field_type)?;
        self.write_field_header(compact_type, id);
        Ok(())
    }

    fn write_field_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), Error> {
        self.writer.write_u8(COMPACT_STOP);
        Ok(())
    }

    fn write_bool(&mut self, b: bool) -> Result<(), Error> {
        let compact_type = if b {
            COMPACT_BOOLEAN_TRUE
        } else {
            COMPACT_BOOLEAN_FALSE
        };
        match self.pending_write_bool_field_id.take() {
            Some(id) => self.write_field_header(compact_type, id),
            None => self.writer.write_u8(compact_type),
        }
        Ok(())
    }

    fn write_byte(&mut self, b: i8) -> Result<(), Error> {
        self.writer.write_i8(b);
        Ok(())
    }

    fn write_i16(&mut self, i: i16) -> Result<(), Error> {
        self.writer.write_varuint32(zigzag_32(i as i32));
        Ok(())
    }

    fn write_i32(&mut self, i: i32) -> Result<(), Error> {
        self.writer.write_varuint32(zigzag_32(i));
        Ok(())
    }

    fn write_i64(&mut self, i: i64) -> Result<(), Error> {
        self.writer.write_varuint64(zigzag_64(i));
        Ok(())
    }

    fn write_double(&mut self, d: f64) -> Result<(), Error> {
        self.writer.write_f64_le(d);
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<(), Error> {
        self.write_binary(s.as_bytes())
    }

    fn write_binary(&mut self, b: &[u8]) -> Result<(), Error> {
        let len = wire_size(b.len(), "string")?;
        self.writer.write_varuint32(len as u32);
        self.writer.write_bytes(b);
        Ok(())
    }

    fn write_list_begin(&mut self, identifier: &TListIdentifier) -> Result<(), Error> {
        self.write_list_set_begin(identifier.element_type, identifier.size, "list")
    }

    fn write_list_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_set_begin(&mut self, identifier: &TSetIdentifier) -> Result<(), Error> {
        self.write_list_set_begin(identifier.element_type, identifier.size, "set")
    }

    fn write_set_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_map_begin(&mut self, identifier: &TMapIdentifier) -> Result<(), Error> {
        let size = wire_size(identifier.size, "map")?;
        if size == 0 {
            self.writer.write_u8(0);
            return Ok(());
        }
        let (key_type, value_type) = match (identifier.key_type, identifier.value_type) {
            (Some(k), Some(v)) => (to_compact_type(k)?, to_compact_type(v)?),
            _ => return Err(Error::invalid_data("Map header without key/value types")),
        };
        self.writer.write_varuint32(size as u32);
        self.writer.write_u8((key_type << 4) | value_type);
        Ok(())
    }

    fn write_map_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
