//! Fixed-field records.
//!
//! Records are structures with a known set of named, typed fields. Instead of runtime
//! reflection, a record exposes an explicit capability interface, [`Record`], and each field
//! type converts to and from [`Value`] through [`FieldValue`].
//!
//! Field names are resolved against the record's precomputed name table with an ASCII
//! case-insensitive match, so `"text"` and `"Text"` address the same field. No
//! locale-dependent case mapping is involved.
//!
//! # Usage
//!
//! ```
//! use dotpath::{Value, get, impl_record, set};
//!
//! #[derive(Debug, Clone, Default)]
//! struct Server {
//!     host: String,
//!     port: i64,
//! }
//! impl_record!(Server { host, port });
//!
//! let mut server = Server::default();
//! set(&mut server, "Host", "localhost")?;
//! set(&mut server, "port", 8080)?;
//!
//! assert_eq!(server.host, "localhost");
//! assert_eq!(get(&server, ["PORT"])?, Some(Value::Int(8080)));
//! # Ok::<(), dotpath::Error>(())
//! ```

use std::{any::Any, fmt};

use serde::{Serializer, ser::SerializeMap};

use crate::{access::AccessError, access::Slot, map::Map, value::Value};

/// Capability interface for fixed-field records.
///
/// Methods taking a `name` are always called with an entry of [`Record::field_names`]; the
/// case-insensitive resolution happens before the call.
pub trait Record: fmt::Debug + Send + Sync + Any {
    /// Declared field names in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Reads a field as a snapshot [`Value`]. Returns `None` if no such field exists.
    fn read_field(&self, name: &str) -> Option<Value>;

    /// Assigns a field.
    ///
    /// # Errors
    /// [`AccessError::TypeMismatch`] when `value` does not fit the declared type, and
    /// [`AccessError::FieldNotFound`] when no such field exists.
    fn write_field(&mut self, name: &str, value: Value) -> Result<(), AccessError>;

    /// Lends a field out for in-place mutation so writes can descend through it.
    ///
    /// Fields that only exist as snapshot copies return `None`, which makes them
    /// not addressable for nested writes.
    fn field_slot(&mut self, name: &str) -> Option<Slot<'_>> {
        let _ = name;
        None
    }

    /// Clones the record behind a fresh box.
    fn clone_record(&self) -> Box<dyn Record>;

    /// Upcast used to recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}

/// Resolves `name` against the record's field table.
///
/// Exact matches win over case-insensitive ones.
pub fn find_field(record: &dyn Record, name: &str) -> Option<&'static str> {
    let names = record.field_names();
    names
        .iter()
        .copied()
        .find(|field| *field == name)
        .or_else(|| {
            names
                .iter()
                .copied()
                .find(|field| field.eq_ignore_ascii_case(name))
        })
}

impl Clone for Box<dyn Record> {
    fn clone(&self) -> Self {
        self.clone_record()
    }
}

impl PartialEq for Box<dyn Record> {
    fn eq(&self, other: &Self) -> bool {
        self.field_names() == other.field_names()
            && self
                .field_names()
                .iter()
                .all(|name| self.read_field(name) == other.read_field(name))
    }
}

/// Serializes a record as a map of its fields.
#[allow(clippy::borrowed_box)]
pub(crate) fn serialize_record<S>(record: &Box<dyn Record>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let names = record.field_names();
    let mut map = serializer.serialize_map(Some(names.len()))?;
    for name in names {
        map.serialize_entry(name, &record.read_field(name).unwrap_or_default())?;
    }
    map.end()
}

/// Conversion between a record field's declared type and [`Value`].
pub trait FieldValue: Sized {
    /// Type name reported in [`AccessError::TypeMismatch`].
    const EXPECTED: &'static str;

    /// Snapshot of the field as a [`Value`].
    fn to_value(&self) -> Value;

    /// Converts a [`Value`] into the declared type, handing the value back on mismatch.
    fn from_value(value: Value) -> Result<Self, Value>;

    /// Mutable view for nested writes. Only container-typed fields have one.
    fn slot(&mut self) -> Option<Slot<'_>> {
        None
    }
}

/// Assigns `value` to a typed field, mapping a rejected value to a type mismatch.
#[doc(hidden)]
pub fn assign<T: FieldValue>(slot: &mut T, field: &str, value: Value) -> Result<(), AccessError> {
    match T::from_value(value) {
        Ok(converted) => {
            *slot = converted;
            Ok(())
        }
        Err(rejected) => Err(AccessError::TypeMismatch {
            field: field.to_string(),
            expected: T::EXPECTED.to_string(),
            actual: rejected.type_name().to_string(),
        }),
    }
}

/// Builds a nested record from a record of the same type or from a mapping.
///
/// Mapping keys resolve case-insensitively; an unknown key or a rejected field value fails
/// the whole conversion.
#[doc(hidden)]
pub fn record_from_value<R>(value: Value) -> Result<R, Value>
where
    R: Record + Clone + Default,
{
    match value {
        Value::Record(record) => match record.as_any().downcast_ref::<R>() {
            Some(concrete) => Ok(concrete.clone()),
            None => Err(Value::Record(record)),
        },
        Value::Map(map) => {
            let mut record = R::default();
            let assigned = map.iter().all(|(key, item)| {
                find_field(&record, key)
                    .is_some_and(|name| record.write_field(name, item.clone()).is_ok())
            });
            if assigned {
                Ok(record)
            } else {
                Err(Value::Map(map))
            }
        }
        other => Err(other),
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "bool";

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(other),
        }
    }
}

macro_rules! integer_field {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn from_value(value: Value) -> Result<Self, Value> {
                    match value {
                        Value::Int(n) => <$ty>::try_from(n).map_err(|_| Value::Int(n)),
                        other => Err(other),
                    }
                }
            }
        )*
    };
}

integer_field!(i64, i32, i16, i8, u64, u32, u16, u8, usize);

impl FieldValue for f64 {
    const EXPECTED: &'static str = "f64";

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(n) => Ok(n),
            Value::Int(n) => Ok(n as f64),
            other => Err(other),
        }
    }
}

impl FieldValue for f32 {
    const EXPECTED: &'static str = "f32";

    fn to_value(&self) -> Value {
        Value::Float((*self).into())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Float(n) => Ok(n as f32),
            Value::Int(n) => Ok(n as f32),
            other => Err(other),
        }
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "String";

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(other),
        }
    }
}

impl FieldValue for Value {
    const EXPECTED: &'static str = "Value";

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(Slot::Value(self))
    }
}

impl FieldValue for Map {
    const EXPECTED: &'static str = "Map";

    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(other),
        }
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        Some(Slot::Map(self))
    }
}

impl FieldValue for Vec<Value> {
    const EXPECTED: &'static str = "Vec<Value>";

    fn to_value(&self) -> Value {
        Value::List(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::List(list) => Ok(list),
            other => Err(other),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, T::to_value)
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }

    fn slot(&mut self) -> Option<Slot<'_>> {
        self.as_mut().and_then(T::slot)
    }
}

/// Implements [`Record`] and [`FieldValue`] for a struct by listing its fields.
///
/// The struct must implement `Debug`, `Clone` and `Default`, and every listed field type
/// must implement [`FieldValue`]. Field names are the Rust identifiers.
///
/// ```
/// use dotpath::{Map, impl_record};
///
/// #[derive(Debug, Clone, Default)]
/// struct Profile {
///     name: String,
///     extra: Map,
/// }
/// impl_record!(Profile { name, extra });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Record for $ty {
            fn field_names(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            fn read_field(&self, name: &str) -> ::core::option::Option<$crate::Value> {
                match name {
                    $(stringify!($field) => ::core::option::Option::Some(
                        $crate::FieldValue::to_value(&self.$field)
                    ),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn write_field(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::AccessError> {
                match name {
                    $(stringify!($field) => $crate::record::assign(&mut self.$field, name, value),)*
                    _ => {
                        drop(value);
                        ::core::result::Result::Err($crate::AccessError::FieldNotFound {
                            field: name.to_string(),
                        })
                    }
                }
            }

            fn field_slot(&mut self, name: &str) -> ::core::option::Option<$crate::Slot<'_>> {
                match name {
                    $(stringify!($field) => $crate::FieldValue::slot(&mut self.$field),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn clone_record(&self) -> ::std::boxed::Box<dyn $crate::Record> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }

        impl $crate::FieldValue for $ty {
            const EXPECTED: &'static str = stringify!($ty);

            fn to_value(&self) -> $crate::Value {
                $crate::Value::Record(::std::boxed::Box::new(::core::clone::Clone::clone(self)))
            }

            fn from_value(value: $crate::Value) -> ::core::result::Result<Self, $crate::Value> {
                $crate::record::record_from_value(value)
            }

            fn slot(&mut self) -> ::core::option::Option<$crate::Slot<'_>> {
                ::core::option::Option::Some($crate::Slot::Record(self))
            }
        }
    };
}
