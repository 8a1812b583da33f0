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
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;

/// Wire type tag identifying how a value is physically encoded.
///
/// The discriminants are the binary-protocol type bytes; the compact protocol
/// maps them to its own nibbles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum TType {
    Stop = 0,
    Void = 1,
    Bool = 2,
    I08 = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl TType {
    /// Decodes a binary-protocol type byte.
    pub fn from_byte(byte: u8) -> Result<TType, Error> {
        TType::try_from(byte).map_err(|_| Error::unknown_wire_type(byte))
    }
}

impl fmt::Display for TType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TType::Stop => "STOP",
            TType::Void => "VOID",
            TType::Bool => "BOOL",
            TType::I08 => "BYTE",
            TType::Double => "DOUBLE",
            TType::I16 => "I16",
            TType::I32 => "I32",
            TType::I64 => "I64",
            TType::String => "STRING",
            TType::Struct => "STRUCT",
            TType::Map => "MAP",
            TType::Set => "SET",
            TType::List => "LIST",
        };
        f.write_str(name)
    }
}

/// Struct-begin marker payload. Only written, never read back from the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TStructIdentifier {
    pub name: &'static str,
}

impl TStructIdentifier {
    pub fn new(name: &'static str) -> TStructIdentifier {
        TStructIdentifier { name }
    }
}

/// Field header. `id` is `None` only for the stop sentinel.
///
/// Field names never travel on the wire, so a decoded header carries `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TFieldIdentifier {
    pub name: Option<&'static str>,
    pub field_type: TType,
    pub id: Option<i16>,
}

impl TFieldIdentifier {
    pub fn new(name: &'static str, field_type: TType, id: i16) -> TFieldIdentifier {
        TFieldIdentifier {
            name: Some(name),
            field_type,
            id: Some(id),
        }
    }

    pub fn stop() -> TFieldIdentifier {
        TFieldIdentifier {
            name: None,
            field_type: TType::Stop,
            id: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TListIdentifier {
    pub element_type: TType,
    pub size: usize,
}

impl TListIdentifier {
    pub fn new(element_type: TType, size: usize) -> TListIdentifier {
        TListIdentifier { element_type, size }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TSetIdentifier {
    pub element_type: TType,
    pub size: usize,
}

impl TSetIdentifier {
    pub fn new(element_type: TType, size: usize) -> TSetIdentifier {
        TSetIdentifier { element_type, size }
    }
}

/// Map header. An empty map in the compact protocol carries no key/value
/// types, so they are optional on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TMapIdentifier {
    pub key_type: Option<TType>,
    pub value_type: Option<TType>,
    pub size: usize,
}

impl TMapIdentifier {
    pub fn new(key_type: TType, value_type: TType, size: usize) -> TMapIdentifier {
        TMapIdentifier {
            key_type: Some(key_type),
            value_type: Some(value_type),
            size,
        }
    }

    pub fn empty() -> TMapIdentifier {
        TMapIdentifier {
            key_type: None,
            value_type: None,
            size: 0,
        }
    }
}
