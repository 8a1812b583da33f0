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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tests::{test_roundtrip, PROTOCOLS};
use timwire::{Codec, Error, TimArea, TimNode};
use timwire_core::{impl_struct_value, thrift_field, FieldDescriptor, Requiredness, ThriftStruct};

#[derive(Debug, Default, PartialEq)]
struct Account {
    id: Option<i64>,
    nick: Option<String>,
}

impl ThriftStruct for Account {
    const NAME: &'static str = "Account";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        thrift_field!(Account, 1, "id", id: i64, required),
        thrift_field!(Account, 2, "nick", nick: String),
    ];
}

/// Every supported value codec in one record.
#[derive(Debug, Default, PartialEq)]
struct Sample {
    flag: Option<bool>,
    byte: Option<i8>,
    short: Option<i16>,
    int: Option<i32>,
    long: Option<i64>,
    ratio: Option<f64>,
    flags: Option<Vec<bool>>,
    tags: Option<BTreeSet<String>>,
    ids: Option<HashSet<i64>>,
    scores: Option<HashMap<String, i32>>,
    matrix: Option<Vec<Vec<i32>>>,
    by_area: Option<BTreeMap<i16, TimArea>>,
    owner: Option<Account>,
    other_flag: Option<bool>,
}

impl ThriftStruct for Sample {
    const NAME: &'static str = "Sample";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        thrift_field!(Sample, 1, "flag", flag: bool),
        thrift_field!(Sample, 2, "byte", byte: i8),
        thrift_field!(Sample, 3, "short", short: i16),
        thrift_field!(Sample, 4, "int", int: i32),
        thrift_field!(Sample, 5, "long", long: i64),
        thrift_field!(Sample, 6, "ratio", ratio: f64),
        thrift_field!(Sample, 7, "flags", flags: Vec<bool>),
        thrift_field!(Sample, 8, "tags", tags: BTreeSet<String>),
        thrift_field!(Sample, 9, "ids", ids: HashSet<i64>),
        thrift_field!(Sample, 10, "scores", scores: HashMap<String, i32>),
        thrift_field!(Sample, 11, "matrix", matrix: Vec<Vec<i32>>),
        thrift_field!(Sample, 12, "byArea", by_area: BTreeMap<i16, TimArea>),
        thrift_field!(Sample, 13, "owner", owner: Account),
        thrift_field!(Sample, 40, "otherFlag", other_flag: bool),
    ];
}

/// Tags at both ends of the id range.
#[derive(Debug, Default, PartialEq)]
struct Spread {
    low: Option<i32>,
    high: Option<i32>,
}

impl ThriftStruct for Spread {
    const NAME: &'static str = "Spread";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        thrift_field!(Spread, -30000, "low", low: i32),
        thrift_field!(Spread, 30000, "high", high: i32),
    ];
}

impl_struct_value!(Account, Sample, Spread);

fn full_sample() -> Sample {
    Sample {
        flag: Some(true),
        byte: Some(-128),
        short: Some(i16::MAX),
        int: Some(-1),
        long: Some(i64::MIN),
        ratio: Some(-0.125),
        flags: Some(vec![true, false, true]),
        tags: Some(["north", "south"].iter().map(|s| s.to_string()).collect()),
        ids: Some([1, -1, 1 << 50].into_iter().collect()),
        scores: Some([("a".to_string(), 1), ("b".to_string(), -2)].into_iter().collect()),
        matrix: Some(vec![vec![1, 2], vec![], vec![3]]),
        by_area: Some(
            [
                (1, TimArea::new().with_city("Harbin")),
                (-5, TimArea::new().push_node(TimNode::new("x", "y"))),
            ]
            .into_iter()
            .collect(),
        ),
        owner: Some(Account {
            id: Some(42),
            nick: Some("admin".to_string()),
        }),
        other_flag: Some(false),
    }
}

#[test]
fn test_all_value_types_roundtrip() {
    test_roundtrip(&full_sample());
}

#[test]
fn test_bool_fields_roundtrip_in_every_combination() {
    for (flag, other_flag) in [(true, true), (true, false), (false, true), (false, false)] {
        let sample = Sample {
            flag: Some(flag),
            int: Some(7),
            other_flag: Some(other_flag),
            ..Sample::default()
        };
        test_roundtrip(&sample);
    }
}

#[test]
fn test_sample_decodes_as_area_by_skipping() {
    // Sample and TimArea share no tag with a matching wire type
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        let bytes = codec.serialize(&full_sample()).unwrap();
        let area: TimArea = codec.deserialize(&bytes).unwrap();
        assert_eq!(area, TimArea::new());
    }
}

#[test]
fn test_required_field_roundtrip() {
    test_roundtrip(&Account {
        id: Some(7),
        nick: None,
    });
}

#[test]
fn test_required_field_missing_on_encode() {
    let account = Account {
        id: None,
        nick: Some("ghost".to_string()),
    };
    for protocol in PROTOCOLS {
        let err = Codec::default()
            .protocol(protocol)
            .serialize(&account)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)), "{:?}", err);
        assert!(err.to_string().contains("Required field id"));
    }
}

#[test]
fn test_required_field_missing_on_decode() {
    // an area stream carries no tag 1 of type i64
    for protocol in PROTOCOLS {
        let codec = Codec::default().protocol(protocol);
        let bytes = codec
            .serialize(&TimArea::new().with_country("China"))
            .unwrap();
        let err = codec.deserialize::<Account>(&bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)), "{:?}", err);
        assert!(err.is_protocol_error());
    }
}

#[test]
fn test_field_table() {
    assert_eq!(Account::FIELDS.len(), 2);
    assert_eq!(Account::FIELDS[0].requiredness, Requiredness::Required);
    assert_eq!(Account::FIELDS[1].requiredness, Requiredness::Optional);
    let ids: Vec<i16> = TimArea::FIELDS.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    let names: Vec<&str> = TimNode::FIELDS.iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["name", "value", "extraList", "extraMap"]);
}

#[test]
fn test_far_apart_tags_roundtrip() {
    test_roundtrip(&Spread {
        low: Some(1),
        high: Some(2),
    });
    test_roundtrip(&Spread {
        low: None,
        high: Some(-2),
    });
}
