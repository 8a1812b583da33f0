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

use crate::node::TimNode;
use std::collections::BTreeMap;
use timwire_core::{impl_struct_value, thrift_field, FieldDescriptor, ThriftStruct};

/// A geographic address.
///
/// Every field is optional; `None` fields are neither encoded nor rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimArea {
    /// Nation name.
    pub country: Option<String>,
    /// First-level administrative division.
    pub province: Option<String>,
    /// Second-level administrative division.
    pub city: Option<String>,
    /// Finer-grained components such as district or town.
    pub extra_list: Option<Vec<TimNode>>,
    /// Open-ended annotations, encoded in ascending key order.
    pub extra_map: Option<BTreeMap<String, String>>,
}

impl ThriftStruct for TimArea {
    const NAME: &'static str = "TimArea";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        thrift_field!(TimArea, 1, "country", country: String),
        thrift_field!(TimArea, 2, "province", province: String),
        thrift_field!(TimArea, 3, "city", city: String),
        thrift_field!(TimArea, 4, "extraList", extra_list: Vec<TimNode>),
        thrift_field!(TimArea, 5, "extraMap", extra_map: BTreeMap<String, String>),
    ];
}

impl_struct_value!(TimArea);

impl TimArea {
    pub fn new() -> TimArea {
        TimArea::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Appends a sub-area, marking the list present.
    pub fn push_node(mut self, node: TimNode) -> Self {
        self.extra_list.get_or_insert_with(Vec::new).push(node);
        self
    }

    /// Sets one attribute, marking the map present. A repeated key overwrites.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_map
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}
