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

//! Field descriptors: how one named field of an object is read, written and
//! defaulted.
//!
//! A descriptor starts as a typed [`FieldSpec`] built by [`member`] or
//! [`accessor`], optionally refined with a default or a wire transform, and is
//! then erased into a [`Field<T>`] when pushed into the type's [`Fields`] list.

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{self, Serializer, WireDefault};
use crate::wire::Node;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

type GetRef<T, V> = Box<dyn Fn(&T) -> &V + Send + Sync>;
type GetMut<T, V> = Box<dyn Fn(&mut T) -> &mut V + Send + Sync>;
type Getter<T, V> = Box<dyn Fn(&T) -> V + Send + Sync>;
type Setter<T, V> = Box<dyn Fn(&mut T, V) + Send + Sync>;
type DefaultFn<V> = Box<dyn Fn() -> V + Send + Sync>;
type FromWire<V, W> = Box<dyn Fn(W) -> Result<V, Error> + Send + Sync>;
type ToWire<V, W> = Box<dyn Fn(&V) -> W + Send + Sync>;

type WriteFieldFn<T> = Box<dyn Fn(&T, &mut WriteContext) -> Result<(), Error> + Send + Sync>;
type ReadFieldFn<T> =
    Box<dyn Fn(&mut T, &mut ReadContext, &dyn Node) -> Result<(), Error> + Send + Sync>;
type FillDefaultFn<T> = Box<dyn Fn(&mut T) + Send + Sync>;

enum Access<T, V> {
    Member { get: GetRef<T, V>, get_mut: GetMut<T, V> },
    Accessor { get: Getter<T, V>, set: Setter<T, V> },
}

impl<T, V> Access<T, V> {
    #[inline(always)]
    fn with_value<R>(&self, instance: &T, f: impl FnOnce(&V) -> R) -> R {
        match self {
            Access::Member { get, .. } => f(get(instance)),
            Access::Accessor { get, .. } => f(&get(instance)),
        }
    }

    #[inline(always)]
    fn assign(&self, instance: &mut T, value: V) {
        match self {
            Access::Member { get_mut, .. } => *get_mut(instance) = value,
            Access::Accessor { set, .. } => set(instance, value),
        }
    }
}

/// Describes a field reached directly through a borrow of the instance.
///
/// ```rust
/// use fieldwire_core::meta::{member, Fields};
///
/// struct Point {
///     x: i32,
/// }
///
/// let mut fields = Fields::<Point>::new();
/// fields.push(member("x", |p: &Point| &p.x, |p: &mut Point| &mut p.x).with_default(0));
/// assert_eq!(fields.len(), 1);
/// ```
pub fn member<T, V, G, M>(key: impl Into<Cow<'static, str>>, get: G, get_mut: M) -> FieldSpec<T, V>
where
    G: Fn(&T) -> &V + Send + Sync + 'static,
    M: Fn(&mut T) -> &mut V + Send + Sync + 'static,
{
    FieldSpec {
        key: key.into(),
        access: Access::Member {
            get: Box::new(get),
            get_mut: Box::new(get_mut),
        },
        default: None,
    }
}

/// Describes a field behind a getter/setter pair. Whatever the setter
/// returns is discarded.
pub fn accessor<T, V, G, S, R>(
    key: impl Into<Cow<'static, str>>,
    get: G,
    set: S,
) -> FieldSpec<T, V>
where
    G: Fn(&T) -> V + Send + Sync + 'static,
    S: Fn(&mut T, V) -> R + Send + Sync + 'static,
{
    FieldSpec {
        key: key.into(),
        access: Access::Accessor {
            get: Box::new(get),
            set: setter(move |instance, value| {
                let _ = set(instance, value);
            }),
        },
        default: None,
    }
}

fn setter<T, V, F>(f: F) -> Setter<T, V>
where
    F: Fn(&mut T, V) + Send + Sync + 'static,
{
    Box::new(f)
}

/// A typed field descriptor whose logical and wire types are both `V`.
pub struct FieldSpec<T, V> {
    key: Cow<'static, str>,
    access: Access<T, V>,
    default: Option<DefaultFn<V>>,
}

impl<T, V> FieldSpec<T, V> {
    /// Value assigned when the key is absent on decode.
    pub fn with_default(mut self, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.default = Some(Box::new(move || value.clone()));
        self
    }

    /// Like [`FieldSpec::with_default`] for values built on demand.
    pub fn with_default_fn<F>(mut self, make: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.default = Some(Box::new(make));
        self
    }

    /// Encodes the field as `W` instead of `V`.
    ///
    /// `to_wire` runs once per encode, `from_wire` once per decode after the
    /// wire value has been read. A default stays in the logical form and is
    /// assigned without passing through `from_wire`.
    pub fn transform<W, D, E>(self, from_wire: D, to_wire: E) -> TransformedSpec<T, V, W>
    where
        D: Fn(W) -> Result<V, Error> + Send + Sync + 'static,
        E: Fn(&V) -> W + Send + Sync + 'static,
    {
        TransformedSpec {
            spec: self,
            from_wire: Box::new(from_wire),
            to_wire: Box::new(to_wire),
        }
    }
}

/// A field descriptor with logical type `V` and wire type `W`.
pub struct TransformedSpec<T, V, W> {
    spec: FieldSpec<T, V>,
    from_wire: FromWire<V, W>,
    to_wire: ToWire<V, W>,
}

impl<T, V, W> TransformedSpec<T, V, W> {
    pub fn with_default(mut self, value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        self.spec = self.spec.with_default(value);
        self
    }

    pub fn with_default_fn<F>(mut self, make: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.spec = self.spec.with_default_fn(make);
        self
    }
}

/// A type-erased field descriptor of an object type `T`.
pub struct Field<T> {
    key: Cow<'static, str>,
    write_fn: WriteFieldFn<T>,
    read_fn: ReadFieldFn<T>,
    default_fn: Option<FillDefaultFn<T>>,
}

impl<T> Field<T> {
    #[inline(always)]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline(always)]
    pub fn has_default(&self) -> bool {
        self.default_fn.is_some()
    }

    /// Writes the field's wire value. The key is written by the caller.
    #[inline(always)]
    pub fn write(&self, instance: &T, context: &mut WriteContext) -> Result<(), Error> {
        (self.write_fn)(instance, context)
    }

    /// Decodes `node` into a fresh wire value and assigns it to the field.
    #[inline(always)]
    pub fn read(
        &self,
        instance: &mut T,
        context: &mut ReadContext,
        node: &dyn Node,
    ) -> Result<(), Error> {
        (self.read_fn)(instance, context, node)
    }

    /// Assigns the default. Returns `false` if the field has none.
    pub fn fill_default(&self, instance: &mut T) -> bool {
        match &self.default_fn {
            Some(fill) => {
                fill(instance);
                true
            }
            None => false,
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("key", &self.key)
            .field("has_default", &self.has_default())
            .finish()
    }
}

fn write_field_fn<T, F>(f: F) -> WriteFieldFn<T>
where
    F: Fn(&T, &mut WriteContext) -> Result<(), Error> + Send + Sync + 'static,
{
    Box::new(f)
}

fn read_field_fn<T, F>(f: F) -> ReadFieldFn<T>
where
    F: Fn(&mut T, &mut ReadContext, &dyn Node) -> Result<(), Error> + Send + Sync + 'static,
{
    Box::new(f)
}

fn fill_default_fn<T: 'static, V: 'static>(
    access: Arc<Access<T, V>>,
    default: Option<DefaultFn<V>>,
) -> Option<FillDefaultFn<T>> {
    let make = default?;
    let fill: FillDefaultFn<T> = Box::new(move |instance: &mut T| access.assign(instance, make()));
    Some(fill)
}

impl<T, V> From<FieldSpec<T, V>> for Field<T>
where
    T: 'static,
    V: Serializer + WireDefault,
{
    fn from(spec: FieldSpec<T, V>) -> Field<T> {
        let FieldSpec {
            key,
            access,
            default,
        } = spec;
        let access = Arc::new(access);
        let write_access = access.clone();
        let read_access = access.clone();
        Field {
            key,
            write_fn: write_field_fn(move |instance, context| {
                write_access.with_value(instance, |value| serializer::write(value, context))
            }),
            read_fn: read_field_fn(move |instance, context, node| {
                let mut value = V::wire_default();
                serializer::read(&mut value, context, node)?;
                read_access.assign(instance, value);
                Ok(())
            }),
            default_fn: fill_default_fn(access, default),
        }
    }
}

impl<T, V, W> From<TransformedSpec<T, V, W>> for Field<T>
where
    T: 'static,
    V: 'static,
    W: Serializer + WireDefault,
{
    fn from(spec: TransformedSpec<T, V, W>) -> Field<T> {
        let TransformedSpec {
            spec: FieldSpec {
                key,
                access,
                default,
            },
            from_wire,
            to_wire,
        } = spec;
        let access = Arc::new(access);
        let write_access = access.clone();
        let read_access = access.clone();
        Field {
            key,
            write_fn: write_field_fn(move |instance, context| {
                write_access.with_value(instance, |value| {
                    let wire = to_wire(value);
                    serializer::write(&wire, context)
                })
            }),
            read_fn: read_field_fn(move |instance, context, node| {
                let mut wire = W::wire_default();
                serializer::read(&mut wire, context, node)?;
                let value = from_wire(wire)?;
                read_access.assign(instance, value);
                Ok(())
            }),
            default_fn: fill_default_fn(access, default),
        }
    }
}

/// The ordered field list of an object type.
pub struct Fields<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for Fields<T> {
    fn default() -> Self {
        Fields { fields: Vec::new() }
    }
}

impl<T> Fields<T> {
    pub fn new() -> Self {
        Fields::default()
    }

    /// Appends a field. Keys are expected to be unique within one type and
    /// must not be empty; the registry rejects a list with an empty key.
    pub fn push<F: Into<Field<T>>>(&mut self, field: F) -> &mut Self {
        self.fields.push(field.into());
        self
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, Field<T>> {
        self.fields.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Field<T>> {
        self.fields.iter().find(|field| field.key() == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::key)
    }
}

impl<'a, T> IntoIterator for &'a Fields<T> {
    type Item = &'a Field<T>;
    type IntoIter = std::slice::Iter<'a, Field<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<T> fmt::Debug for Fields<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.iter()).finish()
    }
}
