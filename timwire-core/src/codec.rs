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

use crate::config::Config;
use crate::error::Error;
use crate::protocol::{
    BinaryInputProtocol, BinaryOutputProtocol, CompactInputProtocol, CompactOutputProtocol,
    ProtocolKind,
};
use crate::serializer::ThriftStruct;

/// Entry point for encoding and decoding whole records.
///
/// A `Codec` pairs a wire encoding with the [`Config`] limits every protocol
/// it creates will enforce. It holds no buffers and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use timwire_core::{Codec, ProtocolKind};
///
/// let codec = Codec::default()
///     .protocol(ProtocolKind::Compact)
///     .max_depth(16);
/// assert_eq!(codec.get_protocol(), ProtocolKind::Compact);
/// assert_eq!(codec.get_config().max_depth(), 16);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Codec {
    config: Config,
    protocol: ProtocolKind,
}

impl Codec {
    /// Selects the wire encoding. Defaults to [`ProtocolKind::Binary`].
    pub fn protocol(mut self, protocol: ProtocolKind) -> Self {
        self.protocol = protocol;
        self
    }

    /// Sets the maximum struct nesting depth. Defaults to 64.
    ///
    /// Decoding or encoding a value nested deeper fails with
    /// [`Error::DepthExceed`].
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the maximum byte length of one string or binary value.
    pub fn max_string_size(mut self, max_string_size: usize) -> Self {
        self.config.max_string_size = max_string_size;
        self
    }

    /// Sets the maximum element count of one list, set or map.
    pub fn max_container_size(mut self, max_container_size: usize) -> Self {
        self.config.max_container_size = max_container_size;
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_protocol(&self) -> ProtocolKind {
        self.protocol
    }

    /// Encodes `record` into a fresh buffer.
    pub fn serialize<T: ThriftStruct>(&self, record: &T) -> Result<Vec<u8>, Error> {
        tracing::trace!(record = T::NAME, protocol = ?self.protocol, "serialize");
        match self.protocol {
            ProtocolKind::Binary => {
                let mut protocol = BinaryOutputProtocol::new(self.config.clone());
                record.write(&mut protocol)?;
                Ok(protocol.into_bytes())
            }
            ProtocolKind::Compact => {
                let mut protocol = CompactOutputProtocol::new(self.config.clone());
                record.write(&mut protocol)?;
                Ok(protocol.into_bytes())
            }
        }
    }

    /// Decodes one record from the front of `bf`; trailing bytes are ignored.
    pub fn deserialize<T: ThriftStruct>(&self, bf: &[u8]) -> Result<T, Error> {
        tracing::trace!(
            record = T::NAME,
            protocol = ?self.protocol,
            len = bf.len(),
            "deserialize"
        );
        match self.protocol {
            ProtocolKind::Binary => {
                let mut protocol = BinaryInputProtocol::new(bf, self.config.clone());
                T::read(&mut protocol)
            }
            ProtocolKind::Compact => {
                let mut protocol = CompactInputProtocol::new(bf, self.config.clone());
                T::read(&mut protocol)
            }
        }
    }
}
