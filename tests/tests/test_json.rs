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

use fieldwire::{Fieldwire, Node, NodeKind};
use serde_json::json;

mod test_helpers;
use test_helpers::{tagged_children, test_json_roundtrip, Child, Gender, Inside, Person, User};

#[test]
fn stringify_person() {
    let fieldwire = Fieldwire::default();
    let text = fieldwire.to_json_string(&Person::default()).unwrap();
    assert_eq!(
        text,
        r#"{"age":1,"value":1.0,"gender":0,"test_uint":1,"inside":{"i_age":1,"i_value":1.0,"i_v":[1,2,3,4,5]}}"#
    );
}

#[test]
fn person_tree_keeps_registration_order() {
    let fieldwire = Fieldwire::default();
    let tree = fieldwire.to_json_value(&Person::default()).unwrap();
    let keys: Vec<&str> = tree.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["age", "value", "gender", "test_uint", "inside"]);
    assert_eq!(tree["inside"]["i_v"], json!([1, 2, 3, 4, 5]));
}

#[test]
fn decode_nested_object() {
    let fieldwire = Fieldwire::default();
    let mut person = Person {
        age: 100,
        value: 2.0,
        ..Person::default()
    };
    fieldwire
        .decode_json(
            &mut person,
            r#"{"age":0,"value":233.0,"gender":1,"test_uint":2,"inside":{"i_age":233,"i_value":0.233,"i_v":[6,66,666]}}"#,
        )
        .unwrap();
    assert_eq!(person.age, 0);
    assert_eq!(person.value, 233.0f32);
    assert_eq!(person.gender, Gender::Female);
    assert_eq!(person.test_uint, 2);
    assert_eq!(person.inside.i_age, 233);
    assert_eq!(person.inside.i_value, 0.233f32);
    assert_eq!(person.inside.i_v, vec![6, 66, 666]);
}

#[test]
fn decode_applies_registered_defaults() {
    let fieldwire = Fieldwire::default();
    let mut person = Person {
        age: 7,
        gender: Gender::Female,
        ..Person::default()
    };
    fieldwire
        .decode_json(
            &mut person,
            r#"{"value":233.0,"test_uint":2,"inside":{"i_value":0.233,"i_v":[6,66,666]}}"#,
        )
        .unwrap();
    assert_eq!(person.age, 50);
    assert_eq!(person.value, 233.0f32);
    assert_eq!(person.gender, Gender::Male);
    assert_eq!(person.inside.i_age, 100);
}

#[test]
fn from_json_starts_from_wire_default() {
    let fieldwire = Fieldwire::default();
    let person: Person = fieldwire
        .from_json_str(r#"{"value":1.5,"test_uint":9,"inside":{"i_value":2,"i_v":[]}}"#)
        .unwrap();
    assert_eq!(person.age, 50);
    assert_eq!(person.value, 1.5);
    assert_eq!(person.test_uint, 9);
    assert_eq!(person.inside.i_age, 100);
    assert_eq!(person.inside.i_value, 2.0);
    assert!(person.inside.i_v.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
    let fieldwire = Fieldwire::default();
    let inside: Inside = fieldwire
        .from_json_str(r#"{"i_age":3,"i_value":1.0,"i_v":[],"extra":{"deep":[1,2]}}"#)
        .unwrap();
    assert_eq!(inside.i_age, 3);
}

#[test]
fn integer_decodes_into_float() {
    let fieldwire = Fieldwire::default();
    let value: f32 = fieldwire.from_json_str("-100").unwrap();
    assert_eq!(value, -100.0);
    let value: f64 = fieldwire.from_json_str("18446744073709551615").unwrap();
    assert_eq!(value, u64::MAX as f64);
}

#[test]
fn scalars() {
    let fieldwire = Fieldwire::default();
    assert_eq!(fieldwire.to_json_string(&"hello".to_string()).unwrap(), r#""hello""#);
    assert_eq!(fieldwire.to_json_string(&true).unwrap(), "true");
    assert_eq!(fieldwire.to_json_string(&-3i8).unwrap(), "-3");
    assert_eq!(fieldwire.to_json_string(&u64::MAX).unwrap(), "18446744073709551615");
    assert_eq!(fieldwire.to_json_string(&0.5f64).unwrap(), "0.5");
    assert_eq!(fieldwire.to_json_string(&0.233f32).unwrap(), "0.233");

    let text: String = fieldwire.from_json_str(r#""héllo""#).unwrap();
    assert_eq!(text, "héllo");
    let flag: bool = fieldwire.from_json_str("false").unwrap();
    assert!(!flag);
}

#[test]
fn non_finite_floats_become_null() {
    let fieldwire = Fieldwire::default();
    assert_eq!(fieldwire.to_json_string(&f64::NAN).unwrap(), "null");
    assert_eq!(fieldwire.to_json_string(&f32::INFINITY).unwrap(), "null");
}

#[test]
fn stringify_object_with_accessors() {
    let fieldwire = Fieldwire::default();
    let mut user = User::default();
    user.value = 3.6;
    user.age = 27;
    let text = fieldwire.to_json_string(&user).unwrap();
    assert_eq!(text, r#"{"age":27,"gender":0,"value":3.6,"height":180.0}"#);
}

#[test]
fn decode_object_with_accessors() {
    let fieldwire = Fieldwire::default();
    let mut user = User::default();
    fieldwire.decode_json(&mut user, r#"{"value":3.6}"#).unwrap();
    assert!((user.value - 3.6).abs() < 1e-7);
    assert_eq!(user.age, 32);
    assert_eq!(user.gender(), Gender::Female);
    assert_eq!(user.height, 175.5);
}

#[test]
fn custom_enum_rule() {
    let fieldwire = tagged_children();
    let children = vec![Child::Boy, Child::Girl, Child::Girl];
    assert_eq!(fieldwire.to_json_string(&children).unwrap(), r#"["B","G","G"]"#);

    let mut decoded: Vec<Child> = Vec::new();
    fieldwire.decode_json(&mut decoded, r#"["B","G","G"]"#).unwrap();
    assert_eq!(decoded, children);
}

#[test]
fn pretty_output() {
    let fieldwire = Fieldwire::default().pretty_json(true);
    let text = fieldwire.to_json_string(&vec![1, 2]).unwrap();
    assert_eq!(text, "[\n  1,\n  2\n]");
}

#[test]
fn value_tree_is_a_node() {
    let tree = json!({"a": [1, -2, 2.5], "b": "x", "c": null});
    assert_eq!(tree.kind(), NodeKind::Map);
    let a = tree.map_get("a").unwrap();
    assert_eq!(a.array_len(), Some(3));
    assert_eq!(a.array_at(1).unwrap().as_i64(), Some(-2));
    assert_eq!(a.array_at(2).unwrap().kind(), NodeKind::Float);
    assert_eq!(tree.map_get("c").unwrap().kind(), NodeKind::Nil);
    assert!(tree.map_get("d").is_none());
}

#[test]
fn json_roundtrips() {
    let fieldwire = Fieldwire::default();
    test_json_roundtrip(&fieldwire, Person::default());
    test_json_roundtrip(
        &fieldwire,
        Inside {
            i_age: -5,
            i_value: 0.25,
            i_v: vec![],
        },
    );
    test_json_roundtrip(&fieldwire, vec!["a".to_string(), String::new()]);
    test_json_roundtrip(&fieldwire, [[1u8, 2], [3, 4]]);
}

#[test]
fn free_functions_use_the_global_instance() {
    let text = fieldwire::to_json_string(&Person::default()).unwrap();
    let person: Person = fieldwire::from_json_str(&text).unwrap();
    assert_eq!(person, Person::default());

    let tree = fieldwire::to_json_value(&vec![true, false]).unwrap();
    let flags: Vec<bool> = fieldwire::from_json_value(&tree).unwrap();
    assert_eq!(flags, vec![true, false]);
}
