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

use fieldwire::{member, object_serializer, Fields, Fieldwire, Object};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

mod test_helpers;
use test_helpers::{Inside, Person, User};

#[derive(Debug, Default, PartialEq)]
struct Empty {
    hidden: i32,
}

impl Object for Empty {
    fn register(_: &mut Fields<Self>) {}
}

object_serializer!(Empty);

#[test]
fn type_without_fields_is_an_error() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.register::<Empty>().unwrap_err();
    assert!(err.detail().contains("no registered fields"));
    assert!(fieldwire.to_json_string(&Empty::default()).is_err());
    assert!(fieldwire.from_json_str::<Empty>("{}").is_err());
    assert!(!fieldwire.get_type_resolver().is_registered::<Empty>());
}

#[test]
fn register_is_idempotent() {
    let fieldwire = Fieldwire::default();
    assert!(!fieldwire.get_type_resolver().is_registered::<Person>());
    fieldwire.register::<Person>().unwrap();
    fieldwire.register::<Person>().unwrap();
    assert!(fieldwire.get_type_resolver().is_registered::<Person>());
    // nested object types are built on first use, not with the outer type
    assert!(!fieldwire.get_type_resolver().is_registered::<Inside>());
    fieldwire.to_json_value(&Person::default()).unwrap();
    assert!(fieldwire.get_type_resolver().is_registered::<Inside>());
}

#[test]
fn field_list_is_shared() {
    let resolver = Fieldwire::default();
    let resolver = resolver.get_type_resolver();
    let first = resolver.fields::<User>().unwrap();
    let second = resolver.fields::<User>().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    let keys: Vec<&str> = first.keys().collect();
    assert_eq!(keys, ["age", "gender", "value", "height"]);
    assert!(first.get("age").unwrap().has_default());
    assert!(!first.get("value").unwrap().has_default());
    assert!(first.get("missing").is_none());
}

static BUILDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Default, Clone, PartialEq)]
struct Counted {
    id: u64,
}

impl Object for Counted {
    fn register(fields: &mut Fields<Self>) {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        fields.push(member("id", |c: &Counted| &c.id, |c: &mut Counted| &mut c.id));
    }
}

object_serializer!(Counted);

#[test]
fn concurrent_first_use_builds_once() {
    let fieldwire = Arc::new(Fieldwire::default());
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            let fieldwire = Arc::clone(&fieldwire);
            thread::spawn(move || {
                let bytes = fieldwire.to_msgpack(&Counted { id: i }).unwrap();
                let decoded: Counted = fieldwire.from_msgpack(&bytes).unwrap();
                assert_eq!(decoded.id, i);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
}

#[test]
fn global_instance() {
    assert!(std::ptr::eq(fieldwire::global(), fieldwire::global()));
    fieldwire::register::<Person>().unwrap();
    assert!(fieldwire::global()
        .get_type_resolver()
        .is_registered::<Person>());

    let mut inside = Inside::default();
    let tree = serde_json::json!({"i_value": 4, "i_v": [9]});
    fieldwire::decode(&mut inside, &tree).unwrap();
    assert_eq!(inside.i_value, 4.0);
    assert_eq!(inside.i_v, vec![9]);
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Limits {
    low: i32,
    high: i32,
}

impl Object for Limits {
    fn register(fields: &mut Fields<Self>) {
        fields
            .push(member("low", |l: &Limits| &l.low, |l: &mut Limits| &mut l.low))
            .push(member("high", |l: &Limits| &l.high, |l: &mut Limits| &mut l.high));
    }
}

object_serializer!(Limits);

#[derive(Debug, Default, Clone, PartialEq)]
struct Sensor {
    name: String,
    limits: Limits,
}

impl Object for Sensor {
    fn register(fields: &mut Fields<Self>) {
        // registration may use the same registry for other types
        fieldwire::register::<Limits>().unwrap();
        let limits: Limits = fieldwire::from_json_str(r#"{"low":-5,"high":5}"#).unwrap_or_default();
        fields
            .push(member("name", |s: &Sensor| &s.name, |s: &mut Sensor| &mut s.name))
            .push(
                member("limits", |s: &Sensor| &s.limits, |s: &mut Sensor| &mut s.limits)
                    .with_default(limits),
            );
    }
}

object_serializer!(Sensor);

#[test]
fn registration_can_use_the_registry() {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let sensor = fieldwire::from_json_str::<Sensor>(r#"{"name":"gauge-a"}"#);
        let _ = sender.send(sensor);
    });
    let sensor = receiver
        .recv_timeout(Duration::from_secs(10))
        .expect("decode did not finish")
        .unwrap();
    assert_eq!(sensor.name, "gauge-a");
    assert_eq!(sensor.limits, Limits { low: -5, high: 5 });
    assert!(fieldwire::global()
        .get_type_resolver()
        .is_registered::<Limits>());
}

#[derive(Debug, Default, PartialEq)]
struct Unnamed {
    value: i32,
}

impl Object for Unnamed {
    fn register(fields: &mut Fields<Self>) {
        fields.push(member("", |u: &Unnamed| &u.value, |u: &mut Unnamed| &mut u.value));
    }
}

object_serializer!(Unnamed);

#[test]
fn empty_field_key_is_an_error() {
    let fieldwire = Fieldwire::default();
    let err = fieldwire.register::<Unnamed>().unwrap_err();
    assert!(err.detail().contains("empty field key"));
    assert!(fieldwire.to_json_string(&Unnamed::default()).is_err());
    assert!(!fieldwire.get_type_resolver().is_registered::<Unnamed>());
}
