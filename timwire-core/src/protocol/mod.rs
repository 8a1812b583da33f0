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

//! Abstract tagged protocol and its two concrete encodings.
//!
//! Every record codec in the crate talks to [`InputProtocol`] and
//! [`OutputProtocol`] through trait objects, so a single compiled codec serves
//! the [binary](binary) and [compact](compact) encodings alike.
//!
//! Both traits extend [`RecursionTracked`]. Struct codecs and [`skip`] enter
//! a nesting level through [`DepthGuard`], which releases it on drop, so the
//! depth counter stays balanced on every error path.

use crate::error::Error;
use crate::types::{
    TFieldIdentifier, TListIdentifier, TMapIdentifier, TSetIdentifier, TStructIdentifier, TType,
};
use std::ops::{Deref, DerefMut};

pub mod binary;
pub mod compact;
mod skip;

pub use binary::{BinaryInputProtocol, BinaryOutputProtocol};
pub use compact::{CompactInputProtocol, CompactOutputProtocol};
pub use skip::skip;

/// Wire encodings a [`Codec`](crate::codec::Codec) can produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProtocolKind {
    #[default]
    Binary,
    Compact,
}

/// Nesting-depth bookkeeping exposed by every protocol.
pub trait RecursionTracked {
    /// Enters one nesting level; fails with [`Error::DepthExceed`] without
    /// changing the counter when the limit is already reached.
    fn increment_recursion_depth(&mut self) -> Result<(), Error>;

    fn decrement_recursion_depth(&mut self);
}

pub trait InputProtocol: RecursionTracked {
    fn read_struct_begin(&mut self) -> Result<(), Error>;
    fn read_struct_end(&mut self) -> Result<(), Error>;

    /// Reads a field header; a `Stop` field type ends the enclosing struct.
    fn read_field_begin(&mut self) -> Result<TFieldIdentifier, Error>;
    fn read_field_end(&mut self) -> Result<(), Error>;

    fn read_bool(&mut self) -> Result<bool, Error>;
    fn read_byte(&mut self) -> Result<i8, Error>;
    fn read_i16(&mut self) -> Result<i16, Error>;
    fn read_i32(&mut self) -> Result<i32, Error>;
    fn read_i64(&mut self) -> Result<i64, Error>;
    fn read_double(&mut self) -> Result<f64, Error>;
    fn read_string(&mut self) -> Result<String, Error>;
    fn read_binary(&mut self) -> Result<Vec<u8>, Error>;

    fn read_list_begin(&mut self) -> Result<TListIdentifier, Error>;
    fn read_list_end(&mut self) -> Result<(), Error>;
    fn read_set_begin(&mut self) -> Result<TSetIdentifier, Error>;
    fn read_set_end(&mut self) -> Result<(), Error>;
    fn read_map_begin(&mut self) -> Result<TMapIdentifier, Error>;
    fn read_map_end(&mut self) -> Result<(), Error>;

    /// Consumes and discards one encoded value of `field_type`.
    fn skip(&mut self, field_type: TType) -> Result<(), Error> {
        skip(self, field_type)
    }
}

pub trait OutputProtocol: RecursionTracked {
    fn write_struct_begin(&mut self, identifier: &TStructIdentifier) -> Result<(), Error>;
    fn write_struct_end(&mut self) -> Result<(), Error>;

    fn write_field_begin(&mut self, identifier: &TFieldIdentifier) -> Result<(), Error>;
    fn write_field_end(&mut self) -> Result<(), Error>;
    fn write_field_stop(&mut self) -> Result<(), Error>;

    fn write_bool(&mut self, b: bool) -> Result<(), Error>;
    fn write_byte(&mut self, b: i8) -> Result<(), Error>;
    fn write_i16(&mut self, i: i16) -> Result<(), Error>;
    fn write_i32(&mut self, i: i32) -> Result<(), Error>;
    fn write_i64(&mut self, i: i64) -> Result<(), Error>;
    fn write_double(&mut self, d: f64) -> Result<(), Error>;
    fn write_string(&mut self, s: &str) -> Result<(), Error>;
    fn write_binary(&mut self, b: &[u8]) -> Result<(), Error>;

    fn write_list_begin(&mut self, identifier: &TListIdentifier) -> Result<(), Error>;
    fn write_list_end(&mut self) -> Result<(), Error>;
    fn write_set_begin(&mut self, identifier: &TSetIdentifier) -> Result<(), Error>;
    fn write_set_end(&mut self) -> Result<(), Error>;
    fn write_map_begin(&mut self, identifier: &TMapIdentifier) -> Result<(), Error>;
    fn write_map_end(&mut self) -> Result<(), Error>;
}

/// Depth counter owned by each protocol instance.
#[derive(Debug)]
pub struct DepthTracker {
    current: u32,
    max: u32,
}

impl DepthTracker {
    pub fn new(max: u32) -> DepthTracker {
        DepthTracker { current: 0, max }
    }

    #[inline(always)]
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn increment(&mut self) -> Result<(), Error> {
        if self.current >= self.max {
            tracing::warn!(max_depth = self.max, "struct nesting limit reached");
            return Err(Error::depth_exceed(format!(
                "Maximum struct nesting depth ({}) exceeded. \
                This may indicate a malicious or corrupted stream. \
                Consider increasing max_depth if this is expected.",
                self.max
            )));
        }
        self.current += 1;
        Ok(())
    }

    pub fn decrement(&mut self) {
        self.current = self.current.saturating_sub(1);
    }
}

/// Holds one nesting level on `P` for as long as it lives.
///
/// Derefs to the protocol, so the guarded scope keeps using it normally.
pub struct DepthGuard<'a, P: RecursionTracked + ?Sized> {
    protocol: &'a mut P,
}

impl<'a, P: RecursionTracked + ?Sized> DepthGuard<'a, P> {
    pub fn enter(protocol: &'a mut P) -> Result<DepthGuard<'a, P>, Error> {
        protocol.increment_recursion_depth()?;
        Ok(DepthGuard { protocol })
    }
}

impl<P: RecursionTracked + ?Sized> Deref for DepthGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.protocol
    }
}

impl<P: RecursionTracked + ?Sized> DerefMut for DepthGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.protocol
    }
}

impl<P: RecursionTracked + ?Sized> Drop for DepthGuard<'_, P> {
    fn drop(&mut self) {
        self.protocol.decrement_recursion_depth();
    }
}

/// Validates a decoded length against a configured limit.
pub(crate) fn check_size(size: i64, limit: usize, what: &str) -> Result<usize, Error> {
    if size < 0 {
        return Err(Error::size_limit(format!("Negative {} size: {}", what, size)));
    }
    let size = size as usize;
    if size > limit {
        return Err(Error::size_limit(format!(
            "{} size {} exceeds limit {}",
            what, size, limit
        )));
    }
    Ok(size)
}

/// Converts an outgoing length to the i32 the wire carries.
pub(crate) fn wire_size(size: usize, what: &str) -> Result<i32, Error> {
    i32::try_from(size)
        .map_err(|_| Error::size_limit(format!("{} size {} does not fit in i32", what, size)))
}
