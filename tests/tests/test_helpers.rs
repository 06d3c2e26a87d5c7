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

#![allow(dead_code)]

use fieldwire::{
    accessor, member, object_serializer, Error, Fields, Fieldwire, Node, Object, ReadContext,
    Serializer, WireDefault, WireEnum, WireObject, WriteContext,
};
use std::fmt::Debug;

#[derive(WireEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male = 0,
    Female = 1,
}

#[derive(WireObject, Debug, Clone, PartialEq)]
pub struct Inside {
    #[wire(default = 100)]
    pub i_age: i32,
    pub i_value: f32,
    pub i_v: Vec<i32>,
}

impl Default for Inside {
    fn default() -> Self {
        Inside {
            i_age: 1,
            i_value: 1.0,
            i_v: vec![1, 2, 3, 4, 5],
        }
    }
}

#[derive(WireObject, Debug, Clone, PartialEq)]
pub struct Person {
    #[wire(default = 50)]
    pub age: i32,
    pub value: f32,
    #[wire(default = Gender::Male)]
    pub gender: Gender,
    pub test_uint: u32,
    pub inside: Inside,
}

impl Default for Person {
    fn default() -> Self {
        Person {
            age: 1,
            value: 1.0,
            gender: Gender::Male,
            test_uint: 1,
            inside: Inside::default(),
        }
    }
}

/// Keeps `gender` private behind accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    gender: Gender,
    pub age: i32,
    pub height: f64,
    pub value: f64,
}

impl Default for User {
    fn default() -> Self {
        User {
            gender: Gender::Male,
            age: 1,
            height: 180.0,
            value: 1.0,
        }
    }
}

impl User {
    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn set_gender(&mut self, gender: Gender) -> bool {
        self.gender = gender;
        self.gender == Gender::Male
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

impl Object for User {
    fn register(fields: &mut Fields<Self>) {
        fields
            .push(member("age", |u: &User| &u.age, |u: &mut User| &mut u.age).with_default(32))
            .push(accessor("gender", User::gender, User::set_gender).with_default(Gender::Female))
            .push(accessor("value", User::value, User::set_value))
            .push(accessor("height", User::height, User::set_height).with_default(175.5));
    }
}

object_serializer!(User);

#[derive(WireEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Child {
    Boy,
    Girl,
}

pub fn write_child(child: &Child, context: &mut WriteContext) -> Result<(), Error> {
    context.encoder.write_str(match child {
        Child::Boy => "B",
        Child::Girl => "G",
    });
    Ok(())
}

pub fn read_child(child: &mut Child, _: &mut ReadContext, node: &dyn Node) -> Result<(), Error> {
    let tag = node.as_str().ok_or_else(|| Error::type_error("string"))?;
    *child = if tag == "B" { Child::Boy } else { Child::Girl };
    Ok(())
}

/// A `Fieldwire` whose `Child` values use the `"B"`/`"G"` tags.
pub fn tagged_children() -> Fieldwire {
    let fieldwire = Fieldwire::default();
    fieldwire.register_serializer::<Child>(write_child, read_child);
    fieldwire
}

pub fn test_json_roundtrip<T>(fieldwire: &Fieldwire, value: T)
where
    T: Serializer + WireDefault + PartialEq + Debug,
{
    let text = fieldwire.to_json_string(&value).unwrap();
    let result: T = fieldwire.from_json_str(&text).unwrap();
    assert_eq!(value, result);
}

pub fn test_msgpack_roundtrip<T>(fieldwire: &Fieldwire, value: T)
where
    T: Serializer + WireDefault + PartialEq + Debug,
{
    let bytes = fieldwire.to_msgpack(&value).unwrap();
    let result: T = fieldwire.from_msgpack(&bytes).unwrap();
    assert_eq!(value, result);
}

pub fn test_roundtrip<T>(fieldwire: &Fieldwire, value: T)
where
    T: Serializer + WireDefault + PartialEq + Debug + Clone,
{
    test_json_roundtrip(fieldwire, value.clone());
    test_msgpack_roundtrip(fieldwire, value);
}
