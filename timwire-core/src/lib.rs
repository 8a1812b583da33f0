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

//! # timwire-core
//!
//! Thrift-family tagged wire protocols and a descriptor-driven struct codec.
//!
//! ## Layers
//!
//! - [`protocol`]: the abstract [`InputProtocol`] / [`OutputProtocol`]
//!   interface, recursion-depth accounting, structural [`skip`](protocol::skip),
//!   and the binary and compact encodings.
//! - [`serializer`]: [`WireValue`] codecs for scalars, strings and
//!   containers, plus the generic codec that drives any [`ThriftStruct`]
//!   from its field table.
//! - [`Codec`]: one-call `serialize` / `deserialize` over either encoding.
//!
//! ## Declaring a record
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use timwire_core::{impl_struct_value, thrift_field, Codec, FieldDescriptor, ThriftStruct};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Tag {
//!     key: Option<String>,
//!     attrs: Option<BTreeMap<String, String>>,
//! }
//!
//! impl ThriftStruct for Tag {
//!     const NAME: &'static str = "Tag";
//!     const FIELDS: &'static [FieldDescriptor<Self>] = &[
//!         thrift_field!(Tag, 1, "key", key: String),
//!         thrift_field!(Tag, 2, "attrs", attrs: BTreeMap<String, String>),
//!     ];
//! }
//!
//! impl_struct_value!(Tag);
//!
//! let codec = Codec::default();
//! let tag = Tag { key: Some("k".to_string()), attrs: None };
//! let bytes = codec.serialize(&tag).unwrap();
//! let decoded: Tag = codec.deserialize(&bytes).unwrap();
//! assert_eq!(tag, decoded);
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod protocol;
pub mod serializer;
pub mod types;

pub use crate::codec::Codec;
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::protocol::{
    BinaryInputProtocol, BinaryOutputProtocol, CompactInputProtocol, CompactOutputProtocol,
    DepthGuard, InputProtocol, OutputProtocol, ProtocolKind, RecursionTracked,
};
pub use crate::serializer::{FieldDescriptor, Requiredness, ThriftStruct, WireValue};
pub use crate::types::{
    TFieldIdentifier, TListIdentifier, TMapIdentifier, TSetIdentifier, TStructIdentifier, TType,
};
