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

//! Error taxonomy shared by every protocol and codec in the crate.
//!
//! Errors fall into two families:
//!
//! - **protocol errors**: malformed or truncated wire data, or a write the
//!   buffer refused. See [`Error::is_protocol_error`].
//! - **recursion limit**: a stream nested structures deeper than
//!   [`Config::max_depth`](crate::config::Config::max_depth). See
//!   [`Error::is_depth_exceeded`].
//!
//! Unknown or mismatched fields are never errors; the struct codec skips them.

use std::borrow::Cow;

use thiserror::Error;

/// Set `TIMWIRE_PANIC_ON_ERROR` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("TIMWIRE_PANIC_ON_ERROR").is_some();

/// Error type for encoding and decoding operations.
///
/// # Always Use Static Constructor Functions
///
/// Do not build variants with enum syntax; use the constructors
/// ([`Error::buffer_out_of_bound`], [`Error::invalid_data`], ...). They accept
/// anything convertible into `Cow<'static, str>` and honour
/// `TIMWIRE_PANIC_ON_ERROR`:
///
/// ```bash
/// RUST_BACKTRACE=1 TIMWIRE_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// ```rust
/// use timwire_core::error::Error;
///
/// let err = Error::invalid_data("Required field name is not set");
/// assert!(err.is_protocol_error());
///
/// let err = Error::depth_exceed("too deep");
/// assert!(err.is_depth_exceeded());
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Read past the end of the input.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_out_of_bound`] instead.
    #[error("Buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// Invalid or corrupted data encountered.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),

    /// A string payload was not valid UTF-8.
    ///
    /// Do not construct this variant directly; use [`Error::encoding_error`] instead.
    #[error("{0}")]
    EncodingError(Cow<'static, str>),

    /// A wire-type byte that maps to no known wire type.
    ///
    /// Do not construct this variant directly; use [`Error::unknown_wire_type`] instead.
    #[error("Unknown wire type: {0:#04x}")]
    UnknownWireType(u8),

    /// A length or element count that is negative or above the configured limit.
    ///
    /// Do not construct this variant directly; use [`Error::size_limit`] instead.
    #[error("{0}")]
    SizeLimit(Cow<'static, str>),

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::BufferOutOfBound`] with the given bounds.
    ///
    /// ```
    /// use timwire_core::error::Error;
    ///
    /// let err = Error::buffer_out_of_bound(10, 20, 25);
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        let err = Error::BufferOutOfBound(offset, length, capacity);
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidData`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidData(s.into());
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::EncodingError`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encoding_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::EncodingError(s.into());
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnknownWireType`] for the offending byte.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_wire_type(byte: u8) -> Self {
        let err = Error::UnknownWireType(byte);
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::SizeLimit`] from a string or static message.
    ///
    /// ```
    /// use timwire_core::error::Error;
    ///
    /// let err = Error::size_limit(format!("Negative length: {}", -1));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn size_limit<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::SizeLimit(s.into());
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// ```
    /// use timwire_core::error::Error;
    ///
    /// let err = Error::depth_exceed(format!("Depth {} exceeds max {}", 65, 64));
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("TIMWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// `true` for malformed, truncated or oversized wire data.
    pub fn is_protocol_error(&self) -> bool {
        !self.is_depth_exceeded()
    }

    /// `true` when the recursion limit tripped.
    pub fn is_depth_exceeded(&self) -> bool {
        matches!(self, Error::DepthExceed(_))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```
/// use timwire_core::ensure;
/// use timwire_core::error::Error;
///
/// fn check_len(n: i32) -> Result<(), Error> {
///     ensure!(n >= 0, Error::size_limit(format!("Negative length: {}", n)));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
