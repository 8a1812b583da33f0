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

//! Value codecs and the descriptor-driven struct codec.
//!
//! [`WireValue`] is implemented for scalars, strings, lists, sets, maps and
//! every record declared through [`impl_struct_value!`](crate::impl_struct_value).
//! Records describe their fields with a static table of [`FieldDescriptor`]s;
//! [`struct_`] walks that table to decode, encode and render any record, so
//! no record carries hand-unrolled marshalling code.

use crate::error::Error;
use crate::protocol::{InputProtocol, OutputProtocol};
use crate::types::TType;
use std::fmt;

mod list;
mod map;
mod number;
mod set;
mod string;
pub mod struct_;

/// A value with a fixed wire type.
pub trait WireValue: Sized {
    /// Wire type written in field and container headers.
    const TTYPE: TType;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error>;

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error>;

    /// Debug rendering used by record `Display` output.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requiredness {
    Optional,
    /// Must be present on both decode and encode.
    Required,
}

/// One row of a record's field table.
///
/// Build rows with [`thrift_field!`](crate::thrift_field) rather than by hand.
pub struct FieldDescriptor<T: 'static> {
    pub id: i16,
    pub name: &'static str,
    pub field_type: TType,
    pub requiredness: Requiredness,
    /// Decodes the value and stores it, marking the field present.
    pub read: fn(&mut T, &mut dyn InputProtocol) -> Result<(), Error>,
    /// Encodes the value only; headers are the codec's job.
    pub write: fn(&T, &mut dyn OutputProtocol) -> Result<(), Error>,
    pub is_set: fn(&T) -> bool,
    pub render: fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
}

impl<T: 'static> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("requiredness", &self.requiredness)
            .finish()
    }
}

/// A record type whose wire form is described by a field table.
///
/// ```rust
/// use timwire_core::{impl_struct_value, thrift_field, FieldDescriptor, ThriftStruct};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: Option<i32>,
///     label: Option<String>,
/// }
///
/// impl ThriftStruct for Point {
///     const NAME: &'static str = "Point";
///     const FIELDS: &'static [FieldDescriptor<Self>] = &[
///         thrift_field!(Point, 1, "x", x: i32),
///         thrift_field!(Point, 2, "label", label: String),
///     ];
/// }
///
/// impl_struct_value!(Point);
///
/// let point = Point { x: Some(3), label: None };
/// assert_eq!(point.to_string(), "Point(x: 3)");
/// ```
pub trait ThriftStruct: Default + 'static {
    /// Schema name carried by the struct-begin marker.
    const NAME: &'static str;

    /// Field table in ascending tag order; encoding follows this order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    fn read(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        struct_::read(protocol)
    }

    fn write(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        struct_::write(self, protocol)
    }
}

/// Builds a [`FieldDescriptor`] for an `Option<V>` field of a record.
///
/// `thrift_field!(Record, id, "wire_name", rust_field: ValueType)` declares an
/// optional field; append `, required` for a required one.
#[macro_export]
macro_rules! thrift_field {
    (@build $ty:ty, $id:literal, $name:literal, $field:ident, $vt:ty, $req:ident) => {
        $crate::serializer::FieldDescriptor::<$ty> {
            id: $id,
            name: $name,
            field_type: <$vt as $crate::serializer::WireValue>::TTYPE,
            requiredness: $crate::serializer::Requiredness::$req,
            read: |this: &mut $ty, protocol: &mut dyn $crate::protocol::InputProtocol| {
                this.$field = ::std::option::Option::Some(
                    <$vt as $crate::serializer::WireValue>::read_value(protocol)?,
                );
                ::std::result::Result::Ok(())
            },
            write: |this: &$ty, protocol: &mut dyn $crate::protocol::OutputProtocol| {
                match &this.$field {
                    ::std::option::Option::Some(v) => {
                        $crate::serializer::WireValue::write_value(v, protocol)
                    }
                    ::std::option::Option::None => ::std::result::Result::Ok(()),
                }
            },
            is_set: |this: &$ty| this.$field.is_some(),
            render: |this: &$ty, f: &mut ::std::fmt::Formatter<'_>| match &this.$field {
                ::std::option::Option::Some(v) => $crate::serializer::WireValue::render(v, f),
                ::std::option::Option::None => ::std::result::Result::Ok(()),
            },
        }
    };
    ($ty:ty, $id:literal, $name:literal, $field:ident: $vt:ty) => {
        $crate::thrift_field!(@build $ty, $id, $name, $field, $vt, Optional)
    };
    ($ty:ty, $id:literal, $name:literal, $field:ident: $vt:ty, required) => {
        $crate::thrift_field!(@build $ty, $id, $name, $field, $vt, Required)
    };
}

/// Implements [`WireValue`] and [`Display`](std::fmt::Display) for records
/// that implement [`ThriftStruct`], so they nest inside fields and containers.
#[macro_export]
macro_rules! impl_struct_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::serializer::WireValue for $ty {
                const TTYPE: $crate::types::TType = $crate::types::TType::Struct;

                fn read_value(
                    protocol: &mut dyn $crate::protocol::InputProtocol,
                ) -> ::std::result::Result<Self, $crate::error::Error> {
                    $crate::serializer::struct_::read(protocol)
                }

                fn write_value(
                    &self,
                    protocol: &mut dyn $crate::protocol::OutputProtocol,
                ) -> ::std::result::Result<(), $crate::error::Error> {
                    $crate::serializer::struct_::write(self, protocol)
                }

                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::serializer::struct_::render(self, f)
                }
            }

            impl ::std::fmt::Display for $ty {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::serializer::struct_::render(self, f)
                }
            }
        )+
    };
}
