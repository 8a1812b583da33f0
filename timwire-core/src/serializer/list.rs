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
use crate::protocol::{InputProtocol, OutputProtocol};
use crate::serializer::WireValue;
use crate::types::{TListIdentifier, TType};
use std::fmt;

/// Elements reserved up front when decoding; larger lists grow as they fill.
const MAX_INITIAL_CAPACITY: usize = 1024;

#[inline(always)]
pub(super) fn initial_capacity(size: usize) -> usize {
    size.min(MAX_INITIAL_CAPACITY)
}

/// Renders `[a, b, ...]` with each element's own rendering.
pub(super) fn render_seq<'a, T, I>(items: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: WireValue + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.render(f)?;
    }
    f.write_str("]")
}

impl<T: WireValue> WireValue for Vec<T> {
    const TTYPE: TType = TType::List;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        let list = protocol.read_list_begin()?;
        if list.size > 0 && list.element_type != T::TTYPE {
            return Err(Error::invalid_data(format!(
                "List element type mismatch: expected {}, actual {}",
                T::TTYPE,
                list.element_type
            )));
        }
        let mut vec = Vec::with_capacity(initial_capacity(list.size));
        for _ in 0..list.size {
            vec.push(T::read_value(protocol)?);
        }
        protocol.read_list_end()?;
        Ok(vec)
    }

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        protocol.write_list_begin(&TListIdentifier::new(T::TTYPE, self.len()))?;
        for item in self {
            item.write_value(protocol)?;
        }
        protocol.write_list_end()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(self, f)
    }
}
