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

//! Per-type lookup tables: object field lists and whole-type serializers.

use super::context::{ReadContext, WriteContext};
use crate::error::Error;
use crate::meta::Fields;
use crate::serializer::struct_::Object;
use crate::wire::Node;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::debug;

pub type WriteFn<T> = fn(&T, &mut WriteContext) -> Result<(), Error>;
pub type ReadFn<T> = fn(&mut T, &mut ReadContext, &dyn Node) -> Result<(), Error>;

type Entry = Arc<dyn Any + Send + Sync>;

/// A whole-type encode/decode pair that replaces shape dispatch for `T`.
pub struct Harness<T> {
    write_fn: WriteFn<T>,
    read_fn: ReadFn<T>,
}

impl<T> Clone for Harness<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Harness<T> {}

impl<T> Harness<T> {
    pub fn new(write_fn: WriteFn<T>, read_fn: ReadFn<T>) -> Harness<T> {
        Harness { write_fn, read_fn }
    }

    #[inline(always)]
    pub fn get_write_fn(&self) -> WriteFn<T> {
        self.write_fn
    }

    #[inline(always)]
    pub fn get_read_fn(&self) -> ReadFn<T> {
        self.read_fn
    }
}

/// Memoized registry shared by every encode and decode of one [`Fieldwire`](crate::Fieldwire).
///
/// Field lists are built lazily, at most once per type. The steady-state
/// lookup takes only a read lock. A first use serializes on a per-type build
/// guard, so no table lock is held while `Object::register` runs and a
/// registration may itself encode, decode or register other types.
#[derive(Default)]
pub struct TypeResolver {
    objects: RwLock<HashMap<TypeId, Entry>>,
    building: Mutex<HashMap<TypeId, Arc<Mutex<()>>>>,
    harnesses: RwLock<HashMap<TypeId, Entry>>,
    has_harness: AtomicBool,
}

impl TypeResolver {
    /// Returns the field list of `T`, building it on first use.
    pub fn fields<T: Object>(&self) -> Result<Arc<Fields<T>>, Error> {
        let type_id = TypeId::of::<T>();
        if let Some(entry) = self.lookup(type_id) {
            return downcast_fields::<T>(entry);
        }

        let guard = self.build_guard(type_id);
        let _building = guard.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = self.lookup(type_id) {
            return downcast_fields::<T>(entry);
        }
        let fields = Arc::new(build_fields::<T>()?);
        let entry: Entry = fields.clone();
        self.objects
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(type_id, entry);
        Ok(fields)
    }

    fn lookup(&self, type_id: TypeId) -> Option<Entry> {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
    }

    fn build_guard(&self, type_id: TypeId) -> Arc<Mutex<()>> {
        self.building
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_default()
            .clone()
    }

    /// Builds the field list of `T` now. Calling it again is a no-op.
    pub fn register<T: Object>(&self) -> Result<(), Error> {
        self.fields::<T>().map(|_| ())
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.objects
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    /// Installs a whole-type serializer for `T`, replacing any earlier one.
    pub fn register_serializer<T: 'static>(&self, write_fn: WriteFn<T>, read_fn: ReadFn<T>) {
        let harness: Entry = Arc::new(Harness::new(write_fn, read_fn));
        self.harnesses
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), harness);
        self.has_harness.store(true, Ordering::Release);
        debug!(
            type_name = type_name::<T>(),
            "registered whole-type serializer"
        );
    }

    #[inline(always)]
    pub fn get_harness<T: 'static>(&self) -> Option<Harness<T>> {
        if !self.has_harness.load(Ordering::Acquire) {
            return None;
        }
        self.harnesses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<Harness<T>>().copied())
    }
}

fn build_fields<T: Object>() -> Result<Fields<T>, Error> {
    let mut fields = Fields::new();
    T::register(&mut fields);
    if fields.is_empty() {
        return Err(Error::no_fields(type_name::<T>()));
    }
    if fields.keys().any(str::is_empty) {
        return Err(Error::message(format!(
            "empty field key registered for {}",
            type_name::<T>()
        )));
    }
    debug!(
        type_name = type_name::<T>(),
        field_count = fields.len(),
        "built object field list"
    );
    Ok(fields)
}

fn downcast_fields<T: Object>(entry: Entry) -> Result<Arc<Fields<T>>, Error> {
    entry.downcast::<Fields<T>>().map_err(|_| {
        Error::message(format!(
            "registry entry of {} has an unexpected type",
            type_name::<T>()
        ))
    })
}
