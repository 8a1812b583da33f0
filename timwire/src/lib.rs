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

//! # timwire
//!
//! Wire codecs for the `TimArea` geographic address record and its nested
//! `TimNode` sub-areas, over the binary and compact Thrift-family protocols.
//!
//! ## Records
//!
//! | tag | `TimArea` field | wire type                |
//! |-----|-----------------|--------------------------|
//! | 1   | `country`       | string                   |
//! | 2   | `province`      | string                   |
//! | 3   | `city`          | string                   |
//! | 4   | `extraList`     | list&lt;TimNode&gt;            |
//! | 5   | `extraMap`      | map&lt;string, string&gt;      |
//!
//! Every field is an `Option`: a field is on the wire exactly when it is
//! `Some`, including `Some` of an empty string, list or map. Unknown tags
//! and tags carrying an unexpected wire type are skipped on decode, so
//! older readers accept streams written by newer schemas.
//!
//! ## Usage
//!
//! ```rust
//! use timwire::{Codec, ProtocolKind, TimArea, TimNode};
//!
//! let area = TimArea::new()
//!     .with_country("China")
//!     .with_city("Shanghai")
//!     .push_node(TimNode::new("district", "Xuhui"))
//!     .with_attribute("zip", "200030");
//!
//! for protocol in [ProtocolKind::Binary, ProtocolKind::Compact] {
//!     let codec = Codec::default().protocol(protocol);
//!     let bytes = codec.serialize(&area).unwrap();
//!     let decoded: TimArea = codec.deserialize(&bytes).unwrap();
//!     assert_eq!(area, decoded);
//! }
//!
//! assert_eq!(
//!     area.to_string(),
//!     "TimArea(country: China, city: Shanghai, \
//!      extraList: [TimNode(name: district, value: Xuhui)], extraMap: {zip: 200030})"
//! );
//! ```
//!
//! ## Recursion limit
//!
//! Nested `TimNode` lists can be arbitrarily deep on the wire. Each protocol
//! counts struct nesting and fails with [`Error::DepthExceed`] once
//! [`Codec::max_depth`] is reached, instead of overflowing the stack:
//!
//! ```rust
//! use timwire::{Codec, TimArea, TimNode};
//!
//! let mut node = TimNode::new("level", "3");
//! for level in (1..3).rev() {
//!     node = TimNode::new("level", level.to_string()).push_child(node);
//! }
//! let area = TimArea::new().push_node(node);
//!
//! let bytes = Codec::default().serialize(&area).unwrap();
//! // TimArea + three TimNode levels = depth 4
//! assert!(Codec::default().max_depth(4).deserialize::<TimArea>(&bytes).is_ok());
//! let err = Codec::default().max_depth(3).deserialize::<TimArea>(&bytes).unwrap_err();
//! assert!(err.is_depth_exceeded());
//! ```

mod area;
mod node;

pub use area::TimArea;
pub use node::TimNode;

pub use timwire_core::{
    error::Error, protocol, Codec, Config, InputProtocol, OutputProtocol, ProtocolKind,
    ThriftStruct, WireValue,
};
