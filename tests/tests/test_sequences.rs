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

use fieldwire::{shape_of, Bytes, Fieldwire, Shape};

mod test_helpers;
use test_helpers::{test_roundtrip, Gender, Inside, Person};

#[test]
fn shapes() {
    assert_eq!(shape_of::<bool>(), Shape::Bool);
    assert_eq!(shape_of::<i8>(), Shape::SignedInt);
    assert_eq!(shape_of::<u64>(), Shape::UnsignedInt);
    assert_eq!(shape_of::<f32>(), Shape::Float);
    assert_eq!(shape_of::<Gender>(), Shape::Enum);
    assert_eq!(shape_of::<String>(), Shape::String);
    assert_eq!(shape_of::<[i32; 4]>(), Shape::FixedArray(4));
    assert_eq!(shape_of::<Vec<Person>>(), Shape::Sequence);
    assert_eq!(shape_of::<Bytes>(), Shape::Sequence);
    assert_eq!(shape_of::<Inside>(), Shape::Object);
}

#[test]
fn vec_is_resized_to_the_wire_length() {
    let fieldwire = Fieldwire::default();
    let mut list = vec![9, 9, 9, 9, 9];
    fieldwire.decode_json(&mut list, "[1,2]").unwrap();
    assert_eq!(list, vec![1, 2]);
    fieldwire.decode_json(&mut list, "[3,4,5]").unwrap();
    assert_eq!(list, vec![3, 4, 5]);
    fieldwire.decode_json(&mut list, "[]").unwrap();
    assert!(list.is_empty());
}

#[test]
fn vec_elements_decode_in_place() {
    let fieldwire = Fieldwire::default();
    let mut people = vec![Person {
        age: 3,
        ..Person::default()
    }];
    // absent keys take their defaults, even for an existing element
    fieldwire
        .decode_json(
            &mut people,
            r#"[{"value":1,"test_uint":1,"inside":{"i_value":1,"i_v":[]}},{"age":4,"value":1,"test_uint":1,"inside":{"i_value":1,"i_v":[]}}]"#,
        )
        .unwrap();
    assert_eq!(people.len(), 2);
    assert_eq!(people[0].age, 50);
    assert_eq!(people[1].age, 4);
    assert_eq!(people[1].inside.i_age, 100);
}

#[test]
fn empty_sequences() {
    let fieldwire = Fieldwire::default();
    let empty: Vec<String> = Vec::new();
    assert_eq!(fieldwire.to_json_string(&empty).unwrap(), "[]");
    assert_eq!(fieldwire.to_msgpack(&empty).unwrap(), [0x90]);
    let none: [u8; 0] = [];
    assert_eq!(fieldwire.to_json_string(&none).unwrap(), "[]");
    let decoded: [u8; 0] = fieldwire.from_json_str("[]").unwrap();
    assert_eq!(decoded, none);
}

#[test]
fn nested_sequences() {
    let fieldwire = Fieldwire::default();
    let grid = vec![vec![1u16, 2], vec![], vec![3]];
    assert_eq!(fieldwire.to_json_string(&grid).unwrap(), "[[1,2],[],[3]]");
    assert_eq!(
        fieldwire.to_msgpack(&grid).unwrap(),
        [0x93, 0x92, 0x01, 0x02, 0x90, 0x91, 0x03]
    );
    test_roundtrip(&fieldwire, grid);
    test_roundtrip(&fieldwire, [vec![true], vec![false, true]]);
}

#[test]
fn byte_sequences() {
    let fieldwire = Fieldwire::default();
    // Vec<u8> is an ordinary sequence of integers
    assert_eq!(fieldwire.to_msgpack(&vec![1u8, 2]).unwrap(), [0x92, 0x01, 0x02]);
    // Bytes is binary, and a JSON integer array
    let bytes = Bytes::from(vec![0u8, 200]);
    assert_eq!(fieldwire.to_json_string(&bytes).unwrap(), "[0,200]");
    let decoded: Bytes = fieldwire.from_json_str("[0,200]").unwrap();
    assert_eq!(decoded, bytes);
    let err = fieldwire.from_json_str::<Bytes>("[1,256]").unwrap_err();
    assert_eq!(err.path(), "1");
    let err = fieldwire.from_json_str::<Bytes>(r#""abc""#).unwrap_err();
    assert_eq!(err.expected_type(), Some("binary"));
}
