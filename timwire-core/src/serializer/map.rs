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
use crate::types::{TMapIdentifier, TType};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;

/// Reads map entries in wire order; `insert` overwrites earlier duplicates.
fn read_map_entries<K: WireValue, V: WireValue>(
    protocol: &mut dyn InputProtocol,
    mut insert: impl FnMut(K, V),
) -> Result<(), Error> {
    let map = protocol.read_map_begin()?;
    if map.size > 0 {
        let key_type = map.key_type.unwrap_or(TType::Void);
        let value_type = map.value_type.unwrap_or(TType::Void);
        if key_type != K::TTYPE || value_type != V::TTYPE {
            return Err(Error::invalid_data(format!(
                "Map entry type mismatch: expected {}/{}, actual {}/{}",
                K::TTYPE,
                V::TTYPE,
                key_type,
                value_type
            )));
        }
    }
    for _ in 0..map.size {
        let key = K::read_value(protocol)?;
        let value = V::read_value(protocol)?;
        insert(key, value);
    }
    protocol.read_map_end()
}

fn write_map_entries<'a, K, V, I>(
    protocol: &mut dyn OutputProtocol,
    len: usize,
    entries: I,
) -> Result<(), Error>
where
    K: WireValue + 'a,
    V: WireValue + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    protocol.write_map_begin(&TMapIdentifier::new(K::TTYPE, V::TTYPE, len))?;
    for (key, value) in entries {
        key.write_value(protocol)?;
        value.write_value(protocol)?;
    }
    protocol.write_map_end()
}

fn render_entries<'a, K, V, I>(entries: I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    K: WireValue + 'a,
    V: WireValue + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    f.write_str("{")?;
    for (i, (key, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        key.render(f)?;
        f.write_str(": ")?;
        value.render(f)?;
    }
    f.write_str("}")
}

/// Entries are written in ascending key order.
impl<K: WireValue + Ord, V: WireValue> WireValue for BTreeMap<K, V> {
    const TTYPE: TType = TType::Map;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        let mut map: BTreeMap<K, V> = BTreeMap::new();
        read_map_entries(protocol, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        write_map_entries(protocol, self.len(), self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_entries(self, f)
    }
}

/// Entries are written in the map's iteration order.
impl<K: WireValue + Eq + Hash, V: WireValue> WireValue for HashMap<K, V> {
    const TTYPE: TType = TType::Map;

    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        let mut map: HashMap<K, V> = HashMap::new();
        read_map_entries(protocol, |k, v| {
            map.insert(k, v);
        })?;
        Ok(map)
    }

    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        write_map_entries(protocol, self.len(), self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_entries(self, f)
    }
}
