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

use fieldwire::{Error, Fieldwire};

mod test_helpers;
use test_helpers::{Gender, Inside, Person};

fn decode_person(text: &str) -> Error {
    let mut person = Person::default();
    Fieldwire::default()
        .decode_json(&mut person, text)
        .unwrap_err()
}

#[test]
fn element_type_error_has_path() {
    let err = decode_person(r#"{"value":1,"test_uint":2,"inside":{"i_value":1,"i_v":[1,1.0]}}"#);
    assert!(err.is_type_error());
    assert_eq!(err.path(), "inside.i_v.1");
    assert_eq!(err.expected_type(), Some("integer"));
    assert_eq!(err.to_string(), "inside.i_v.1: wrong type, should be integer");
}

#[test]
fn missing_value_has_path() {
    let err = decode_person(r#"{"value":1,"test_uint":2,"inside":{"i_v":[1,1]}}"#);
    assert!(!err.is_type_error());
    assert_eq!(err.path(), "inside.i_value");
    assert_eq!(err.detail(), "missing value");
    assert_eq!(err.to_string(), "inside.i_value: missing value");
}

#[test]
fn first_missing_field_in_registration_order_wins() {
    let err = decode_person(r#"{"inside":{"i_value":1,"i_v":[]}}"#);
    assert_eq!(err.path(), "value");
}

#[test]
fn float_into_integer_fails() {
    let err = Fieldwire::default().from_json_str::<i32>("-100.0").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(err.expected_type(), Some("integer"));
    assert_eq!(err.path(), "");
}

#[test]
fn scalar_type_errors() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.from_json_str::<u32>("-1").unwrap_err();
    assert_eq!(err.expected_type(), Some("unsigned integer"));
    let err = fieldwire.from_json_str::<bool>("1").unwrap_err();
    assert_eq!(err.expected_type(), Some("boolean"));
    let err = fieldwire.from_json_str::<String>("null").unwrap_err();
    assert_eq!(err.expected_type(), Some("string"));
    let err = fieldwire.from_json_str::<f64>(r#""1.5""#).unwrap_err();
    assert_eq!(err.expected_type(), Some("float"));
    let err = fieldwire.from_json_str::<Gender>("1.0").unwrap_err();
    assert_eq!(err.expected_type(), Some("integer"));
}

#[test]
fn container_type_errors() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.from_json_str::<Vec<i32>>(r#"{"a":1}"#).unwrap_err();
    assert_eq!(err.expected_type(), Some("array"));
    let err = fieldwire.from_json_str::<[i32; 2]>("3").unwrap_err();
    assert_eq!(err.expected_type(), Some("array"));
    let err = fieldwire.from_json_str::<Inside>("[1,2]").unwrap_err();
    assert_eq!(err.expected_type(), Some("object"));

    let err = decode_person(r#"{"value":1,"test_uint":2,"inside":"nope"}"#);
    assert_eq!(err.path(), "inside");
    assert_eq!(err.expected_type(), Some("object"));
}

#[test]
fn fixed_array_size_mismatch() {
    let fieldwire = Fieldwire::default();
    let mut array = [7i32; 3];
    let err = fieldwire.decode_json(&mut array, "[1,2]").unwrap_err();
    assert!(!err.is_type_error());
    assert_eq!(
        err.detail(),
        "the size of array is not same with target: expected 3, got 2"
    );
    // nothing was written before the length check
    assert_eq!(array, [7, 7, 7]);
}

#[test]
fn nested_fixed_array_path() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire
        .from_json_str::<[[u8; 2]; 2]>(r#"[[1,2],[3,"x"]]"#)
        .unwrap_err();
    assert_eq!(err.path(), "1.1");
    assert_eq!(err.expected_type(), Some("unsigned integer"));
}

#[test]
fn narrowing_out_of_range() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.from_json_str::<u8>("256").unwrap_err();
    assert!(!err.is_type_error());
    assert_eq!(err.detail(), "value 256 is out of range for u8");
    let err = fieldwire.from_json_str::<i8>("-129").unwrap_err();
    assert_eq!(err.detail(), "value -129 is out of range for i8");
    let err = fieldwire
        .from_json_str::<Vec<i16>>("[1,70000]")
        .unwrap_err();
    assert_eq!(err.path(), "1");
}

#[test]
fn float_narrowing_out_of_range() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.from_json_str::<f32>("1e300").unwrap_err();
    assert!(!err.is_type_error());
    assert!(err.detail().ends_with("is out of range for f32"));
    let err = fieldwire
        .from_json_str::<Vec<f32>>("[1.5,-1e39]")
        .unwrap_err();
    assert_eq!(err.path(), "1");

    let wide: f64 = fieldwire.from_json_str("1e300").unwrap();
    assert_eq!(wide, 1e300);
    let small: f32 = fieldwire.from_json_str("3.4e38").unwrap();
    assert!(small.is_finite());
}

#[test]
fn unknown_enum_discriminant() {
    let fieldwire = Fieldwire::default();
    let err = decode_person(r#"{"value":1,"gender":7,"test_uint":2,"inside":{"i_value":1,"i_v":[]}}"#);
    assert_eq!(err.path(), "gender");
    assert!(!err.is_type_error());
    assert!(err.detail().contains("unknown discriminant 7"));
    assert!(fieldwire.from_json_str::<Gender>("-1").is_err());
}

#[test]
fn malformed_json_text() {
    let err = Fieldwire::default()
        .from_json_str::<Vec<i32>>("[1,2")
        .unwrap_err();
    assert_eq!(err.path(), "");
    assert!(err.detail().starts_with("invalid json"));
}

#[test]
fn prefixing_composes() {
    let err = Error::type_error("integer").with_prefix("3").with_prefix("items");
    assert_eq!(err.path(), "items.3");
    let err = err.with_prefix("");
    assert_eq!(err.path(), "items.3");
}
