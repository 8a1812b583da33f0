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

//! Binary protocol: fixed-width big-endian integers, `i32` length prefixes.
//!
//! | item          | encoding                                  |
//! |---------------|-------------------------------------------|
//! | field header  | type byte, `i16` field id                 |
//! | stop          | type byte `0`                             |
//! | string/binary | `i32` byte length, bytes                  |
//! | list/set      | element type byte, `i32` count            |
//! | map           | key type byte, value type byte, `i32` count |
//!
//! Struct begin/end and field end write nothing.

use crate::buffer::{Reader, Writer};
use crate::config::Config;
use crate::error::Error;
use crate::protocol::{
    check_size, wire_size, DepthTracker, InputProtocol, OutputProtocol, RecursionTracked,
};
use crate::types::{
    TFieldIdentifier, TListIdentifier, TMapIdentifier, TSetIdentifier, TStructIdentifier, TType,
};

pub struct BinaryInputProtocol<'a> {
    reader: Reader<'a>,
    config: Config,
    depth: DepthTracker,
}

impl<'a> BinaryInputProtocol<'a> {
    pub fn new(bytes: &'a [u8], config: Config) -> BinaryInputProtocol<'a> {
        let depth = DepthTracker::new(config.max_depth());
        BinaryInputProtocol {
            reader: Reader::new(bytes),
            config,
            depth,
        }
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    pub fn current_depth(&self) -> u32 {
        self.depth.current()
    }

    fn read_type(&mut self) -> Result<TType, Error> {
        TType::from_byte(self.reader.read_u8()?)
    }

    fn read_container_size(&mut self, what: &str) -> Result<usize, Error> {
        let size = self.reader.read_i32()?;
        let size = check_size(size as i64, self.config.max_container_size(), what)?;
        // every element takes at least one byte
        if size > self.reader.remaining() {
            return Err(Error::buffer_out_of_bound(
                self.reader.get_cursor(),
                size,
                self.reader.get_cursor() + self.reader.remaining(),
            ));
        }
        Ok(size)
    }

    fn read_bytes(&mut self) -> Result<&'a [u8], Error> {
        let len = self.reader.read_i32()?;
        let len = check_size(len as i64, self.config.max_string_size(), "string")?;
        self.reader.read_bytes(len)
    }
}

impl RecursionTracked for BinaryInputProtocol<'_> {
    fn increment_recursion_depth(&mut self) -> Result<(), Error> {
        self.depth.increment()
    }

    fn decrement_recursion_depth(&mut self) {
        self.depth.decrement()
    }
}

impl InputProtocol for BinaryInputProtocol<'_> {
    fn read_struct_begin(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_struct_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_field_begin(&mut self) -> Result<TFieldIdentifier, Error> {
        let field_type = self.read_type()?;
        if field_type == TType::Stop {
            return Ok(TFieldIdentifier::stop());
        }
        let id = self.reader.read_i16()?;
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
        Ok(self.reader.read_u8()? != 0)
    }

    fn read_byte(&mut self) -> Result<i8, Error> {
        self.reader.read_i8()
    }

    fn read_i16(&mut self) -> Result<i16, Error> {
        self.reader.read_i16()
    }

    fn read_i32(&mut self) -> Result<i32, Error> {
        self.reader.read_i32()
    }

    fn read_i64(&mut self) -> Result<i64, Error> {
        self.reader.read_i64()
    }

    fn read_double(&mut self) -> Result<f64, Error> {
        self.reader.read_f64()
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
        let element_type = self.read_type()?;
        let size = self.read_container_size("list")?;
        Ok(TListIdentifier::new(element_type, size))
    }

    fn read_list_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_set_begin(&mut self) -> Result<TSetIdentifier, Error> {
        let element_type = self.read_type()?;
        let size = self.read_container_size("set")?;
        Ok(TSetIdentifier::new(element_type, size))
    }

    fn read_set_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn read_map_begin(&mut self) -> Result<TMapIdentifier, Error> {
        let key_type = self.read_type()?;
        let value_type = self.read_type()?;
        let size = self.read_container_size("map")?;
        Ok(TMapIdentifier::new(key_type, value_type, size))
    }

    fn read_map_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

pub struct BinaryOutputProtocol {
    writer: Writer,
    depth: DepthTracker,
}

impl BinaryOutputProtocol {
    pub fn new(config: Config) -> BinaryOutputProtocol {
        BinaryOutputProtocol {
            writer: Writer::default(),
            depth: DepthTracker::new(config.max_depth()),
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

    fn write_type(&mut self, field_type: TType) {
        self.writer.write_u8(field_type.into());
    }
}

impl RecursionTracked for BinaryOutputProtocol {
    fn increment_recursion_depth(&mut self) -> Result<(), Error> {
        self.depth.increment()
    }

    fn decrement_recursion_depth(&mut self) {
        self.depth.decrement()
    }
}

impl OutputProtocol for BinaryOutputProtocol {
    fn write_struct_begin(&mut self, _identifier: &TStructIdentifier) -> Result<(), Error> {
        Ok(())
    }

    fn write_struct_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_field_begin(&mut self, identifier: &TFieldIdentifier) -> Result<(), Error> {
        let id = identifier
            .id
            .ok_or_else(|| Error::invalid_data("Field header without a field id"))?;
        self.write_type(identifier.field_type);
        self.writer.write_i16(id);
        Ok(())
    }

    fn write_field_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_field_stop(&mut self) -> Result<(), Error> {
        self.write_type(TType::Stop);
        Ok(())
    }

    fn write_bool(&mut self, b: bool) -> Result<(), Error> {
        self.writer.write_u8(b as u8);
        Ok(())
    }

    fn write_byte(&mut self, b: i8) -> Result<(), Error> {
        self.writer.write_i8(b);
        Ok(())
    }

    fn write_i16(&mut self, i: i16) -> Result<(), Error> {
        self.writer.write_i16(i);
        Ok(())
    }

    fn write_i32(&mut self, i: i32) -> Result<(), Error> {
        self.writer.write_i32(i);
        Ok(())
    }

    fn write_i64(&mut self, i: i64) -> Result<(), Error> {
        self.writer.write_i64(i);
        Ok(())
    }

    fn write_double(&mut self, d: f64) -> Result<(), Error> {
        self.writer.write_f64(d);
        Ok(())
    }

    fn write_string(&mut self, s: &str) -> Result<(), Error> {
        self.write_binary(s.as_bytes())
    }

    fn write_binary(&mut self, b: &[u8]) -> Result<(), Error> {
        self.writer.write_i32(wire_size(b.len(), "string")?);
        self.writer.write_bytes(b);
        Ok(())
    }

    fn write_list_begin(&mut self, identifier: &TListIdentifier) -> Result<(), Error> {
        let size = wire_size(identifier.size, "list")?;
        self.write_type(identifier.element_type);
        self.writer.write_i32(size);
        Ok(())
    }

    fn write_list_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_set_begin(&mut self, identifier: &TSetIdentifier) -> Result<(), Error> {
        let size = wire_size(identifier.size, "set")?;
        self.write_type(identifier.element_type);
        self.writer.write_i32(size);
        Ok(())
    }

    fn write_set_end(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn write_map_begin(&mut self, identifier: &TMapIdentifier) -> Result<(), Error> {
        let size = wire_size(identifier.size, "map")?;
        let (key_type, value_type) = match (identifier.key_type, identifier.value_type) {
            (Some(k), Some(v)) => (k, v),
            _ => return Err(Error::invalid_data("Map header without key/value types")),
        };
        self.write_type(key_type);
        self.write_type(value_type);
        self.writer.write_i32(size);
        Ok(())
    }

    fn write_map_end(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
