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

//! Path-carrying errors raised by the codec engine.
//!
//! There are exactly two kinds of failure:
//!
//! - [`Error::Message`]: a generic failure such as a missing required field, a
//!   fixed-size array whose wire length differs from its declared length, an
//!   integer that does not fit its target, or a failure raised by a custom
//!   transform or whole-type serializer.
//! - [`Error::TypeError`]: the wire node's concrete type disagrees with the
//!   shape the target expects. It carries the display name of the expected
//!   type (`"integer"`, `"boolean"`, `"array"`, `"object"`, ...).
//!
//! Both kinds carry a dotted path. The path is empty where the error is
//! created; every enclosing array index or object field prepends its own
//! segment through [`Error::with_prefix`] as the error travels upward, so the
//! path a caller sees reads outermost-first, e.g. `inside.i_v.1`.
//!
//! ## Debug Mode: FIELDWIRE_PANIC_ON_ERROR
//!
//! Compile with the `FIELDWIRE_PANIC_ON_ERROR` environment variable set to make
//! every constructor panic at the exact creation site:
//!
//! ```bash
//! RUST_BACKTRACE=1 FIELDWIRE_PANIC_ON_ERROR=1 cargo test
//! ```

use std::borrow::Cow;

use thiserror::Error;

/// Set at compile time through `FIELDWIRE_PANIC_ON_ERROR`.
pub const PANIC_ON_ERROR: bool = option_env!("FIELDWIRE_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for every encode and decode operation.
///
/// Always build errors through the static constructor functions
/// ([`Error::type_error`], [`Error::missing_value`], [`Error::size_mismatch`], ...)
/// rather than the variants directly, so `FIELDWIRE_PANIC_ON_ERROR` is honoured.
///
/// ```rust
/// use fieldwire_core::error::Error;
///
/// let err = Error::type_error("integer").with_prefix("1").with_prefix("i_v");
/// assert_eq!(err.path(), "i_v.1");
/// assert_eq!(err.expected_type(), Some("integer"));
/// assert_eq!(err.to_string(), "i_v.1: wrong type, should be integer");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Generic failure.
    #[error("{}", describe(.path, .message))]
    Message {
        path: String,
        message: Cow<'static, str>,
    },

    /// The wire node has a different type than the target expects.
    #[error("{}", describe_type(.path, .expected))]
    TypeError {
        path: String,
        expected: Cow<'static, str>,
    },
}

fn describe(path: &str, message: &str) -> String {
    if path.is_empty() {
        message.to_string()
    } else {
        format!("{path}: {message}")
    }
}

fn describe_type(path: &str, expected: &str) -> String {
    describe(path, &format!("wrong type, should be {expected}"))
}

#[inline(always)]
#[track_caller]
fn raise(err: Error) -> Error {
    if PANIC_ON_ERROR {
        panic!("FIELDWIRE_PANIC_ON_ERROR: {}", err);
    }
    err
}

impl Error {
    /// Creates a [`Error::TypeError`] with an empty path.
    ///
    /// ```
    /// use fieldwire_core::error::Error;
    ///
    /// let err = Error::type_error("string");
    /// assert!(err.is_type_error());
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(expected: S) -> Self {
        raise(Error::TypeError {
            path: String::new(),
            expected: expected.into(),
        })
    }

    /// Creates a generic [`Error::Message`] with an empty path.
    ///
    /// Custom transforms and whole-type serializers use this to reject input.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn message<S: Into<Cow<'static, str>>>(message: S) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: message.into(),
        })
    }

    /// A required field is absent from the wire map. The path is the field key.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn missing_value<S: Into<String>>(key: S) -> Self {
        raise(Error::Message {
            path: key.into(),
            message: Cow::Borrowed("missing value"),
        })
    }

    /// A fixed-size array received a wire array of a different length.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!(
                "the size of array is not same with target: expected {expected}, got {actual}"
            )),
        })
    }

    /// An integer wire value does not fit the target integer type.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn out_of_range<V: std::fmt::Display>(value: V, target: &'static str) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!("value {value} is out of range for {target}")),
        })
    }

    /// An integer does not name any variant of the target enum.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_enum(discriminant: i64, target: &'static str) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!("unknown discriminant {discriminant} for enum {target}")),
        })
    }

    /// Malformed wire input: unparsable JSON text, truncated MessagePack, etc.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(message: S) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: message.into(),
        })
    }

    /// A read ran past the end of the input buffer.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!(
                "buffer out of bound: {offset} + {length} > {capacity}"
            )),
        })
    }

    /// A writer was driven inconsistently, e.g. a container closed early.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn encode_error<S: Into<Cow<'static, str>>>(message: S) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: message.into(),
        })
    }

    /// Nesting went deeper than the configured `max_depth`.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed(max_depth: usize) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!("nesting depth exceeds the limit of {max_depth}")),
        })
    }

    /// An object type was used without any registered field.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn no_fields(type_name: &'static str) -> Self {
        raise(Error::Message {
            path: String::new(),
            message: Cow::Owned(format!("no registered fields for {type_name}")),
        })
    }

    /// Prepends one path segment: an array index or an object field key.
    ///
    /// An empty segment leaves the path untouched.
    #[must_use]
    pub fn with_prefix<S: AsRef<str>>(mut self, segment: S) -> Self {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return self;
        }
        let path = match &mut self {
            Error::Message { path, .. } | Error::TypeError { path, .. } => path,
        };
        if path.is_empty() {
            *path = segment.to_string();
        } else {
            let mut prefixed = String::with_capacity(segment.len() + 1 + path.len());
            prefixed.push_str(segment);
            prefixed.push('.');
            prefixed.push_str(path);
            *path = prefixed;
        }
        self
    }

    /// Dotted location of the failure, outermost segment first.
    pub fn path(&self) -> &str {
        match self {
            Error::Message { path, .. } | Error::TypeError { path, .. } => path,
        }
    }

    /// The failure description without the path.
    pub fn detail(&self) -> Cow<'_, str> {
        match self {
            Error::Message { message, .. } => Cow::Borrowed(message),
            Error::TypeError { expected, .. } => {
                Cow::Owned(format!("wrong type, should be {expected}"))
            }
        }
    }

    /// Display name of the expected type, for type errors only.
    pub fn expected_type(&self) -> Option<&str> {
        match self {
            Error::TypeError { expected, .. } => Some(expected),
            Error::Message { .. } => None,
        }
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::TypeError { .. })
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```
/// use fieldwire_core::ensure;
/// use fieldwire_core::error::Error;
///
/// fn check_tag(tag: &str) -> Result<(), Error> {
///     ensure!(tag.len() == 1, "tag must be one character");
///     ensure!(tag != "?", "tag {} is reserved", tag);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::message($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::message(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a generic [`enum@Error`].
///
/// ```
/// use fieldwire_core::bail;
/// use fieldwire_core::error::Error;
///
/// fn parse_tag(tag: &str) -> Result<u8, Error> {
///     match tag {
///         "B" => Ok(0),
///         "G" => Ok(1),
///         other => bail!("unknown tag {}", other),
///     }
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::message($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::message(format!($fmt, $($arg)*)))
    };
}
