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

use std::collections::BTreeMap;
use timwire_core::{impl_struct_value, thrift_field, FieldDescriptor, ThriftStruct};

/// A named location component nested under a [`TimArea`](crate::TimArea),
/// e.g. `district = "Xuhui"`. Nodes nest recursively through `extra_list`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TimNode {
    pub name: Option<String>,
    pub value: Option<String>,
    pub extra_list: Option<Vec<TimNode>>,
    pub extra_map: Option<BTreeMap<String, String>>,
}

impl ThriftStruct for TimNode {
    const NAME: &'static str = "TimNode";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        thrift_field!(TimNode, 1, "name", name: String),
        thrift_field!(TimNode, 2, "value", value: String),
        thrift_field!(TimNode, 3, "extraList", extra_list: Vec<TimNode>),
        thrift_field!(TimNode, 4, "extraMap", extra_map: BTreeMap<String, String>),
    ];
}

impl_struct_value!(TimNode);

impl TimNode {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> TimNode {
        TimNode {
            name: Some(name.into()),
            value: Some(value.into()),
            ..TimNode::default()
        }
    }

    pub fn push_child(mut self, child: TimNode) -> Self {
        self.extra_list.get_or_insert_with(Vec::new).push(child);
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_map
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Number of nested levels including this node.
    pub fn depth(&self) -> usize {
        1 + self
            .extra_list
            .iter()
            .flatten()
            .map(TimNode::depth)
            .max()
            .unwrap_or(0)
    }
}
