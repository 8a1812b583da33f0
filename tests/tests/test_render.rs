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
use timwire::{TimArea, TimNode};

#[test]
fn test_render_empty() {
    assert_eq!(TimArea::new().to_string(), "TimArea()");
    assert_eq!(TimNode::default().to_string(), "TimNode()");
}

#[test]
fn test_render_present_fields_in_tag_order() {
    let area = TimArea::new().with_city("Suzhou").with_country("China");
    assert_eq!(area.to_string(), "TimArea(country: China, city: Suzhou)");
}

#[test]
fn test_render_present_but_empty() {
    let area = TimArea {
        province: Some(String::new()),
        extra_list: Some(Vec::new()),
        extra_map: Some(BTreeMap::new()),
        ..TimArea::default()
    };
    assert_eq!(
        area.to_string(),
        "TimArea(province: , extraList: [], extraMap: {})"
    );
}

#[test]
fn test_render_nested() {
    let area = TimArea::new()
        .push_node(
            TimNode::new("district", "Gulou")
                .push_child(TimNode::new("street", "Zhongshan"))
                .with_attribute("code", "320106"),
        )
        .push_node(TimNode::new("district", "Xuanwu"))
        .with_attribute("b", "2")
        .with_attribute("a", "1");
    assert_eq!(
        area.to_string(),
        "TimArea(extraList: [TimNode(name: district, value: Gulou, \
         extraList: [TimNode(name: street, value: Zhongshan)], extraMap: {code: 320106}), \
         TimNode(name: district, value: Xuanwu)], extraMap: {a: 1, b: 2})"
    );
}

#[test]
fn test_render_matches_display_format() {
    let node = TimNode::new("k", "v");
    assert_eq!(format!("{}", node), node.to_string());
    assert_eq!(format!("<{}>", node), "<TimNode(name: k, value: v)>");
}
