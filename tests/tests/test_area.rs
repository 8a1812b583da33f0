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
use tests::{test_roundtrip, PROTOCOLS};
use timwire::{Codec, ProtocolKind, TimArea, TimNode};

fn full_area() -> TimArea {
    TimArea::new()
        .with_country("China")
        .with_province("Zhejiang")
        .with_city("Hangzhou")
        .push_node(TimNode::new("district", "Xihu").with_attribute("code", "330106"))
        .push_node(TimNode::new("street", "Wensan Road"))
        .with_attribute("zip", "310000")
        .with_attribute("lang", "zh-CN")
}

#[test]
fn test_full_area_roundtrip() {
    test_roundtrip(&full_area());
}

#[test]
fn test_default_area_has_no_fields() {
    let area = TimArea::default();
    assert_eq!(area, TimArea::new());
    assert!(area.country.is_none());
    assert!(area.province.is_none());
    assert!(area.city.is_none());
    assert!(area.extra_list.is_none());
    assert!(area.extra_map.is_none());
    test_roundtrip(&area);
}

#[test]
fn test_field_subsets_roundtrip() {
    let subsets = [
        TimArea::new().with_country("China"),
        TimArea::new().with_province("Guangdong"),
        TimArea::new().with_city("Shenzhen"),
        TimArea::new().push_node(TimNode::new("district", "Futian")),
        TimArea::new().with_attribute("zip", "518000"),
        TimArea::new().with_country("China").with_city("Shenzhen"),
        TimArea::new()
            .with_province("Guangdong")
            .with_attribute("zip", "518000"),
    ];
    for area in &subsets {
        test_roundtrip(area);
    }
}

#[test]
fn test_present_but_empty_fields_roundtrip() {
    let area = TimArea {
        country: Some(String::new()),
        province: None,
        city: Some(String::new()),
        extra_list: Some(Vec::new()),
        extra_map: Some(BTreeMap::new()),
    };
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        let bytes = codec.serialize(&area).unwrap();
        let decoded: TimArea = codec.deserialize(&bytes).unwrap();
        assert_eq!(decoded.country.as_deref(), Some(""));
        assert!(decoded.province.is_none());
        assert_eq!(decoded.extra_list, Some(Vec::new()));
        assert_eq!(decoded.extra_map, Some(BTreeMap::new()));
        assert_eq!(area, decoded);
    }
}

#[test]
fn test_empty_area_is_a_single_stop() {
    for protocol in PROTOCOLS {
        let bytes = Codec::default()
            .protocol(protocol)
            .serialize(&TimArea::new())
            .unwrap();
        assert_eq!(bytes, vec![0x00], "protocol {:?}", protocol);
    }
}

#[test]
fn test_absent_fields_are_not_emitted() {
    let with_city = Codec::default()
        .serialize(&TimArea::new().with_city("Xi'an"))
        .unwrap();
    let with_city_and_country = Codec::default()
        .serialize(&TimArea::new().with_country("China").with_city("Xi'an"))
        .unwrap();
    // "China" field adds 3 header bytes, 4 length bytes and 5 payload bytes
    assert_eq!(with_city_and_country.len(), with_city.len() + 12);
}

#[test]
fn test_unicode_values_roundtrip() {
    let area = TimArea::new()
        .with_country("中国")
        .with_city("上海")
        .with_attribute("名称", "浦东新区");
    test_roundtrip(&area);
}

#[test]
fn test_map_encoding_is_deterministic() {
    let mut forward = TimArea::new();
    for key in ["a", "b", "c", "d"] {
        forward = forward.with_attribute(key, key.to_uppercase());
    }
    let mut backward = TimArea::new();
    for key in ["d", "c", "b", "a"] {
        backward = backward.with_attribute(key, key.to_uppercase());
    }
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        assert_eq!(
            codec.serialize(&forward).unwrap(),
            codec.serialize(&backward).unwrap()
        );
    }
}

#[test]
fn test_many_nodes_roundtrip() {
    let mut area = TimArea::new().with_country("China");
    for i in 0..200 {
        area = area.push_node(TimNode::new(format!("node{}", i), i.to_string()));
    }
    test_roundtrip(&area);
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let area = TimArea::new().with_city("Nanjing");
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        let mut bytes = codec.serialize(&area).unwrap();
        bytes.extend_from_slice(&[0xAB, 0xCD]);
        let decoded: TimArea = codec.deserialize(&bytes).unwrap();
        assert_eq!(area, decoded);
    }
}

#[test]
fn test_protocols_produce_different_bytes() {
    let area = full_area();
    let binary = Codec::default()
        .protocol(ProtocolKind::Binary)
        .serialize(&area)
        .unwrap();
    let compact = Codec::default()
        .protocol(ProtocolKind::Compact)
        .serialize(&area)
        .unwrap();
    assert_ne!(binary, compact);
    assert!(compact.len() < binary.len());
}
