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
use crate::protocol::{DepthGuard, InputProtocol};
use crate::types::TType;

/// Consumes one value of `field_type` without materializing it.
///
/// Structs and containers are walked element by element and each nested
/// level counts against the protocol's recursion limit, so a hostile stream
/// of unknown fields cannot exhaust the call stack.
pub fn skip<P: InputProtocol + ?Sized>(protocol: &mut P, field_type: TType) -> Result<(), Error> {
    match field_type {
        TType::Bool => protocol.read_bool().map(|_| ()),
        TType::I08 => protocol.read_byte().map(|_| ()),
        TType::I16 => protocol.read_i16().map(|_| ()),
        TType::I32 => protocol.read_i32().map(|_| ()),
        TType::I64 => protocol.read_i64().map(|_| ()),
        TType::Double => protocol.read_double().map(|_| ()),
        // binary, not string: unknown payloads need not be UTF-8
        TType::String => protocol.read_binary().map(|_| ()),
        TType::Struct => {
            let mut protocol = DepthGuard::enter(protocol)?;
            protocol.read_struct_begin()?;
            loop {
                let field = protocol.read_field_begin()?;
                if field.field_type == TType::Stop {
                    break;
                }
                skip(&mut *protocol, field.field_type)?;
                protocol.read_field_end()?;
            }
            protocol.read_struct_end()
        }
        TType::List => {
            let mut protocol = DepthGuard::enter(protocol)?;
            let list = protocol.read_list_begin()?;
            for _ in 0..list.size {
                skip(&mut *protocol, list.element_type)?;
            }
            protocol.read_list_end()
        }
        TType::Set => {
            let mut protocol = DepthGuard::enter(protocol)?;
            let set = protocol.read_set_begin()?;
            for _ in 0..set.size {
                skip(&mut *protocol, set.element_type)?;
            }
            protocol.read_set_end()
        }
        TType::Map => {
            let mut protocol = DepthGuard::enter(protocol)?;
            let map = protocol.read_map_begin()?;
            if map.size > 0 {
                let (key_type, value_type) = match (map.key_type, map.value_type) {
                    (Some(k), Some(v)) => (k, v),
                    _ => return Err(Error::invalid_data("Non-empty map without key/value types")),
                };
                for _ in 0..map.size {
                    skip(&mut *protocol, key_type)?;
                    skip(&mut *protocol, value_type)?;
                }
            }
            protocol.read_map_end()
        }
        TType::Stop | TType::Void => Err(Error::invalid_data(format!(
            "Cannot skip a value of wire type {}",
            field_type
        ))),
    }
}
