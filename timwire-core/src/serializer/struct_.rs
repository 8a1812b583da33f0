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
use crate::protocol::{DepthGuard, InputProtocol, OutputProtocol};
use crate::serializer::{FieldDescriptor, Requiredness, ThriftStruct};
use crate::types::{TFieldIdentifier, TStructIdentifier, TType};
use std::fmt;

#[inline(always)]
fn find_field<T: ThriftStruct>(id: i16) -> Option<&'static FieldDescriptor<T>> {
    T::FIELDS.iter().find(|d| d.id == id)
}

fn check_required<T: ThriftStruct>(value: &T) -> Result<(), Error> {
    for descriptor in T::FIELDS {
        if descriptor.requiredness == Requiredness::Required && !(descriptor.is_set)(value) {
            return Err(Error::invalid_data(format!(
                "Required field {} of {} is not set",
                descriptor.name,
                T::NAME
            )));
        }
    }
    Ok(())
}

/// Decodes one record.
///
/// Unknown tags and known tags carrying an unexpected wire type are skipped.
/// A duplicated tag keeps the last value read.
pub fn read<T: ThriftStruct>(protocol: &mut dyn InputProtocol) -> Result<T, Error> {
    let mut protocol = DepthGuard::enter(protocol)?;
    let mut value = T::default();
    protocol.read_struct_begin()?;
    loop {
        let field = protocol.read_field_begin()?;
        if field.field_type == TType::Stop {
            break;
        }
        match field.id.and_then(find_field::<T>) {
            Some(descriptor) if descriptor.field_type == field.field_type => {
                (descriptor.read)(&mut value, &mut *protocol)?;
            }
            Some(descriptor) => {
                tracing::debug!(
                    record = T::NAME,
                    field = descriptor.name,
                    expected = %descriptor.field_type,
                    actual = %field.field_type,
                    "skipping field with mismatched wire type"
                );
                protocol.skip(field.field_type)?;
            }
            None => {
                tracing::debug!(
                    record = T::NAME,
                    field_id = ?field.id,
                    wire_type = %field.field_type,
                    "skipping unknown field"
                );
                protocol.skip(field.field_type)?;
            }
        }
        protocol.read_field_end()?;
    }
    protocol.read_struct_end()?;
    check_required(&value)?;
    Ok(value)
}

/// Encodes one record, emitting present fields in table order.
pub fn write<T: ThriftStruct>(value: &T, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
    check_required(value)?;
    let mut protocol = DepthGuard::enter(protocol)?;
    protocol.write_struct_begin(&TStructIdentifier::new(T::NAME))?;
    for descriptor in T::FIELDS {
        if !(descriptor.is_set)(value) {
            continue;
        }
        protocol.write_field_begin(&TFieldIdentifier::new(
            descriptor.name,
            descriptor.field_type,
            descriptor.id,
        ))?;
        (descriptor.write)(value, &mut *protocol)?;
        protocol.write_field_end()?;
    }
    protocol.write_field_stop()?;
    protocol.write_struct_end()
}

/// Renders `Name(field: value, ...)` over the present fields.
pub fn render<T: ThriftStruct>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(T::NAME)?;
    f.write_str("(")?;
    let mut first = true;
    for descriptor in T::FIELDS {
        if !(descriptor.is_set)(value) {
            continue;
        }
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        f.write_str(descriptor.name)?;
        f.write_str(": ")?;
        (descriptor.render)(value, f)?;
    }
    f.write_str(")")
}
