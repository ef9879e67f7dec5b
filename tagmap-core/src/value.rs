use crate::{AnyValue, Kind, Record};
use std::{any::Any, ptr};
use time::OffsetDateTime;

/// Value stored in a [`Mapping`](crate::Mapping), ready to be bound as a statement parameter.
#[derive(Default, Debug, Clone, Copy)]
pub enum Value<'a> {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    String(&'a str),
    Bool(bool),
    Opaque(Opaque<'a>),
}

/// Value handed over untouched, borrowed from the record it was extracted from.
#[derive(Debug, Clone, Copy)]
pub enum Opaque<'a> {
    Record(&'a dyn Record),
    Slice(&'a dyn AnyValue),
    Map(&'a dyn AnyValue),
    Interface(&'a dyn AnyValue),
    Timestamp(OffsetDateTime),
}

impl<'a> Value<'a> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_opaque(&self) -> Option<&Opaque<'a>> {
        match self {
            Value::Opaque(v) => Some(v),
            _ => None,
        }
    }
}

impl<'a> Opaque<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            Opaque::Record(..) => Kind::Struct,
            Opaque::Slice(..) => Kind::Slice,
            Opaque::Map(..) => Kind::Map,
            Opaque::Interface(..) => Kind::Interface,
            Opaque::Timestamp(..) => Kind::Timestamp,
        }
    }

    /// The borrowed value as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        match *self {
            Opaque::Record(v) => AnyValue::as_any(v).downcast_ref(),
            Opaque::Slice(v) | Opaque::Map(v) | Opaque::Interface(v) => {
                AnyValue::as_any(v).downcast_ref()
            }
            Opaque::Timestamp(..) => None,
        }
    }

    pub fn timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            Opaque::Timestamp(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Int(l), Self::Int(r)) => l == r,
            (Self::Float(l), Self::Float(r)) => l == r,
            (Self::String(l), Self::String(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Opaque(l), Self::Opaque(r)) => l == r,
            _ => false,
        }
    }
}

/// Borrowed values are equal when they point to the same object.
impl PartialEq for Opaque<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(l), Self::Record(r)) => ptr::addr_eq(*l, *r),
            (Self::Slice(l), Self::Slice(r))
            | (Self::Map(l), Self::Map(r))
            | (Self::Interface(l), Self::Interface(r)) => ptr::addr_eq(*l, *r),
            (Self::Timestamp(l), Self::Timestamp(r)) => l == r,
            _ => false,
        }
    }
}

macro_rules! impl_from {
    ($source:ty, $destination:path) => {
        impl From<$source> for Value<'_> {
            fn from(value: $source) -> Self {
                $destination(value.into())
            }
        }
    };
}
impl_from!(i64, Value::Int);
impl_from!(i32, Value::Int);
impl_from!(f64, Value::Float);
impl_from!(f32, Value::Float);
impl_from!(bool, Value::Bool);

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::String(value)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
