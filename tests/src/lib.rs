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

//! Helpers shared by the integration tests.

use std::fmt::Debug;
use timwire_core::error::Error;
use timwire_core::protocol::{
    BinaryOutputProtocol, CompactOutputProtocol, OutputProtocol, ProtocolKind, RecursionTracked,
};
use timwire_core::types::{
    TFieldIdentifier, TListIdentifier, TMapIdentifier, TSetIdentifier, TStructIdentifier, TType,
};
use timwire_core::{Codec, Config, ThriftStruct};

pub const PROTOCOLS: [ProtocolKind; 2] = [ProtocolKind::Binary, ProtocolKind::Compact];

/// Encodes and decodes `value` with every protocol and checks equality.
pub fn test_roundtrip<T>(value: &T)
where
    T: ThriftStruct + PartialEq + Debug,
{
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        let bytes = codec.serialize(value).unwrap();
        let result: T = codec.deserialize(&bytes).unwrap();
        assert_eq!(value, &result, "protocol {:?}", protocol);
    }
}

/// Builds a raw stream by driving an output protocol by hand.
pub fn encode_with<F>(protocol: ProtocolKind, f: F) -> Vec<u8>
where
    F: FnOnce(&mut dyn OutputProtocol) -> Result<(), Error>,
{
    match protocol {
        ProtocolKind::Binary => {
            let mut out = BinaryOutputProtocol::new(Config::default());
            f(&mut out).unwrap();
            out.into_bytes()
        }
        ProtocolKind::Compact => {
            let mut out = CompactOutputProtocol::new(Config::default());
            f(&mut out).unwrap();
            out.into_bytes()
        }
    }
}

/// Writes a string field header and value.
pub fn write_string_field(
    out: &mut dyn OutputProtocol,
    name: &'static str,
    id: i16,
    value: &str,
) -> Result<(), Error> {
    out.write_field_begin(&TFieldIdentifier::new(name, TType::String, id))?;
    out.write_string(value)?;
    out.write_field_end()
}

/// Output protocol that records every call instead of encoding.
///
/// With `reject_after` set, the call after that many recorded writes fails,
/// imitating a stream that refuses a write.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
    pub depth: u32,
    pub max_depth_seen: u32,
    pub reject_after: Option<usize>,
}

impl Recorder {
    fn record(&mut self, event: String) -> Result<(), Error> {
        if let Some(limit) = self.reject_after {
            if self.events.len() >= limit {
                return Err(Error::invalid_data("write rejected"));
            }
        }
        self.events.push(event);
        Ok(())
    }
}

impl RecursionTracked for Recorder {
    fn increment_recursion_depth(&mut self) -> Result<(), Error> {
        self.depth += 1;
        self.max_depth_seen = self.max_depth_seen.max(self.depth);
        Ok(())
    }

    fn decrement_recursion_depth(&mut self) {
        self.depth -= 1;
    }
}

impl OutputProtocol for Recorder {
    fn write_struct_begin(&mut self, identifier: &TStructIdentifier) -> Result<(), Error> {
        self.record(format!("struct_begin {}", identifier.name))
    }

    fn write_struct_end(&mut self) -> Result<(), Error> {
        self.record("struct_end".to_string())
    }

    fn write_field_begin(&mut self, identifier: &TFieldIdentifier) -> Result<(), Error> {
        self.record(format!(
            "field_begin {} {} {}",
            identifier.name.unwrap_or("?"),
            identifier.field_type,
            identifier.id.unwrap_or(-1)
        ))
    }

    fn write_field_end(&mut self) -> Result<(), Error> {
        self.record("field_end".to_string())
    }

    fn write_field_stop(&mut self) -> Result<(), Error> {
        self.record("field_stop".to_string())
    }

    fn write_bool(&mut self, b: bool) -> Result<(), Error> {
        self.record(format!("bool {}", b))
    }

    fn write_byte(&mut self, b: i8) -> Result<(), Error> {
        self.record(format!("byte {}", b))
    }

    fn write_i16(&mut self, i: i16) -> Result<(), Error> {
        self.record(format!("i16 {}", i))
    }

    fn write_i32(&mut self, i: i32) -> Result<(), Error> {
        self.record(format!("i32 {}", i))
    }

    fn write_i64(&mut self, i: i64) -> Result<(), Error> {
        self.record(format!("i64 {}", i))
    }

    fn write_double(&mut self, d: f64) -> Result<(), Error> {
        self.record(format!("double {}", d))
    }

    fn write_string(&mut self, s: &str) -> Result<(), Error> {
        self.record(format!("string {}", s))
    }

    fn write_binary(&mut self, b: &[u8]) -> Result<(), Error> {
        self.record(format!("binary {:?}", b))
    }

    fn write_list_begin(&mut self, identifier: &TListIdentifier) -> Result<(), Error> {
        self.record(format!(
            "list_begin {} {}",
            identifier.element_type, identifier.size
        ))
    }

    fn write_list_end(&mut self) -> Result<(), Error> {
        self.record("list_end".to_string())
    }

    fn write_set_begin(&mut self, identifier: &TSetIdentifier) -> Result<(), Error> {
        self.record(format!(
            "set_begin {} {}",
            identifier.element_type, identifier.size
        ))
    }

    fn write_set_end(&mut self) -> Result<(), Error> {
        self.record("set_end".to_string())
    }

    fn write_map_begin(&mut self, identifier: &TMapIdentifier) -> Result<(), Error> {
        self.record(format!(
            "map_begin {:?} {:?} {}",
            identifier.key_type, identifier.value_type, identifier.size
        ))
    }

    fn write_map_end(&mut self) -> Result<(), Error> {
        self.record("map_end".to_string())
    }
}
