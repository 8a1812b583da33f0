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
use crate::serializer::list::render_seq;
use crate::serializer::WireValue;
use crate::types::{TSetIdentifier, TType};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

fn read_set_elements<T: WireValue>(
    protocol: &mut dyn InputProtocol,
    mut insert: impl FnMut(T),
) -> Result<(), Error> {
    let set = protocol.read_set_begin()?;
    if set.size > 0 && set.element_type != T::TTYPE {
        return Err(Error::invalid_data(format!(
            "Set element type mismatch: expected {}, actual {}",
            T::TTYPE,
            set.element_type
        )));
    }
    for _ in 0..set.size {
        insert(T::read_value(protocol)?);
    }
    protocol.read_set_end()
}

impl<T: WireValue + Ord> WireValue for BTreeSet<T> {
    const TTYPE: TType = TType::Set;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        let mut set: BTreeSet<T> = BTreeSet::new();
        read_set_elements(protocol, |v| {
            set.insert(v);
        })?;
        Ok(set)
    }

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        protocol.write_set_begin(&TSetIdentifier::new(T::TTYPE, self.len()))?;
        for item in self {
            item.write_value(protocol)?;
        }
        protocol.write_set_end()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(self, f)
    }
}

impl<T: WireValue + Eq + Hash> WireValue for HashSet<T> {
    const TTYPE: TType = TType::Set;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        let mut set: HashSet<T> = HashSet::new();
        read_set_elements(protocol, |v| {
            set.insert(v);
        })?;
        Ok(set)
    }

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        protocol.write_set_begin(&TSetIdentifier::new(T::TTYPE, self.len()))?;
        for item in self {
            item.write_value(protocol)?;
        }
        protocol.write_set_end()
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_seq(self, f)
    }
}
