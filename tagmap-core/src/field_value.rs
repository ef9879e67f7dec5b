use crate::{Kind, Record};
use std::{
    any::{self, Any},
    borrow::Cow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    fmt::{self, Debug},
    rc::Rc,
    sync::{
        Arc,
        mpsc::{Receiver, Sender, SyncSender},
    },
};
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Type erased value, carried through extraction without being examined.
///
/// Implemented for every `'static` type, downstream code recovers the concrete
/// type with `as_any().downcast_ref::<T>()`.
pub trait AnyValue: Any {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AnyValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

impl Debug for dyn AnyValue + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AnyValue::type_name(self))
    }
}

/// Runtime view of a single field value.
///
/// This is what a [`Record`] hands out for each one of its fields, extraction never looks at
/// the Rust value directly.
pub enum FieldValue<'a> {
    Invalid,
    Bool(bool),
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Int128(i128),
    UInt(usize),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    UInt128(u128),
    Float32(f32),
    Float64(f64),
    String(&'a str),
    Timestamp(OffsetDateTime),
    Struct(&'a dyn Record),
    Pointer(Box<FieldValue<'a>>),
    Slice(/* len: */ usize, &'a dyn AnyValue),
    Map(/* len: */ usize, &'a dyn AnyValue),
    Interface(&'a dyn AnyValue),
    Func(&'static str),
    Chan(&'static str),
    UnsafePointer(*const ()),
}

impl<'a> FieldValue<'a> {
    pub fn kind(&self) -> Kind {
        match self {
            FieldValue::Invalid => Kind::Invalid,
            FieldValue::Bool(..) => Kind::Bool,
            FieldValue::Int(..) => Kind::Int,
            FieldValue::Int8(..) => Kind::Int8,
            FieldValue::Int16(..) => Kind::Int16,
            FieldValue::Int32(..) => Kind::Int32,
            FieldValue::Int64(..) => Kind::Int64,
            FieldValue::Int128(..) => Kind::Int128,
            FieldValue::UInt(..) => Kind::UInt,
            FieldValue::UInt8(..) => Kind::UInt8,
            FieldValue::UInt16(..) => Kind::UInt16,
            FieldValue::UInt32(..) => Kind::UInt32,
            FieldValue::UInt64(..) => Kind::UInt64,
            FieldValue::UInt128(..) => Kind::UInt128,
            FieldValue::Float32(..) => Kind::Float32,
            FieldValue::Float64(..) => Kind::Float64,
            FieldValue::String(..) => Kind::String,
            FieldValue::Timestamp(..) => Kind::Timestamp,
            FieldValue::Struct(..) => Kind::Struct,
            FieldValue::Pointer(..) => Kind::Pointer,
            FieldValue::Slice(..) => Kind::Slice,
            FieldValue::Map(..) => Kind::Map,
            FieldValue::Interface(..) => Kind::Interface,
            FieldValue::Func(..) => Kind::Func,
            FieldValue::Chan(..) => Kind::Chan,
            FieldValue::UnsafePointer(..) => Kind::UnsafePointer,
        }
    }

    /// Follows one level of indirection, any other value is returned unchanged.
    pub fn deref(self) -> FieldValue<'a> {
        match self {
            FieldValue::Pointer(inner) => *inner,
            v => v,
        }
    }
}

impl Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Invalid => f.write_str("Invalid"),
            FieldValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            FieldValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            FieldValue::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            FieldValue::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            FieldValue::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            FieldValue::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            FieldValue::Int128(v) => f.debug_tuple("Int128").field(v).finish(),
            FieldValue::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            FieldValue::UInt8(v) => f.debug_tuple("UInt8").field(v).finish(),
            FieldValue::UInt16(v) => f.debug_tuple("UInt16").field(v).finish(),
            FieldValue::UInt32(v) => f.debug_tuple("UInt32").field(v).finish(),
            FieldValue::UInt64(v) => f.debug_tuple("UInt64").field(v).finish(),
            FieldValue::UInt128(v) => f.debug_tuple("UInt128").field(v).finish(),
            FieldValue::Float32(v) => f.debug_tuple("Float32").field(v).finish(),
            FieldValue::Float64(v) => f.debug_tuple("Float64").field(v).finish(),
            FieldValue::String(v) => f.debug_tuple("String").field(v).finish(),
            FieldValue::Timestamp(v) => f.debug_tuple("Timestamp").field(v).finish(),
            FieldValue::Struct(v) => f.debug_tuple("Struct").field(v).finish(),
            FieldValue::Pointer(v) => f.debug_tuple("Pointer").field(v).finish(),
            FieldValue::Slice(len, v) => f.debug_tuple("Slice").field(len).field(v).finish(),
            FieldValue::Map(len, v) => f.debug_tuple("Map").field(len).field(v).finish(),
            FieldValue::Interface(v) => f.debug_tuple("Interface").field(v).finish(),
            FieldValue::Func(v) => f.debug_tuple("Func").field(v).finish(),
            FieldValue::Chan(v) => f.debug_tuple("Chan").field(v).finish(),
            FieldValue::UnsafePointer(v) => f.debug_tuple("UnsafePointer").field(v).finish(),
        }
    }
}

/// Exposes a Rust value to the extraction engine.
///
/// Implemented for the primitive types, strings, timestamps from `time`, the standard
/// collections and smart pointers. `#[derive(Record)]` implements it for records.
pub trait AsField {
    fn as_field(&self) -> FieldValue<'_>;
}

macro_rules! impl_as_field {
    ($source:ty, $destination:path) => {
        impl AsField for $source {
            fn as_field(&self) -> FieldValue<'_> {
                $destination(*self)
            }
        }
    };
}

impl_as_field!(bool, FieldValue::Bool);
impl_as_field!(isize, FieldValue::Int);
impl_as_field!(i8, FieldValue::Int8);
impl_as_field!(i16, FieldValue::Int16);
impl_as_field!(i32, FieldValue::Int32);
impl_as_field!(i64, FieldValue::Int64);
impl_as_field!(i128, FieldValue::Int128);
impl_as_field!(usize, FieldValue::UInt);
impl_as_field!(u8, FieldValue::UInt8);
impl_as_field!(u16, FieldValue::UInt16);
impl_as_field!(u32, FieldValue::UInt32);
impl_as_field!(u64, FieldValue::UInt64);
impl_as_field!(u128, FieldValue::UInt128);
impl_as_field!(f32, FieldValue::Float32);
impl_as_field!(f64, FieldValue::Float64);
impl_as_field!(OffsetDateTime, FieldValue::Timestamp);

impl AsField for str {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::String(self)
    }
}

impl AsField for String {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::String(self.as_str())
    }
}

impl AsField for Cow<'_, str> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::String(self.as_ref())
    }
}

impl AsField for PrimitiveDateTime {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self.assume_utc())
    }
}

impl AsField for Date {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self.midnight().assume_utc())
    }
}

impl<T: AsField> AsField for Option<T> {
    fn as_field(&self) -> FieldValue<'_> {
        match self {
            Some(v) => FieldValue::Pointer(Box::new(v.as_field())),
            None => FieldValue::Invalid,
        }
    }
}

macro_rules! impl_as_field_pointer {
    ($($pointer:ty),+ $(,)?) => {
        $(impl<T: AsField + ?Sized> AsField for $pointer {
            fn as_field(&self) -> FieldValue<'_> {
                FieldValue::Pointer(Box::new((**self).as_field()))
            }
        })+
    };
}
impl_as_field_pointer!(Box<T>, Rc<T>, Arc<T>);

/// A shared reference is a view of the value, not an indirection.
impl<T: AsField + ?Sized> AsField for &T {
    fn as_field(&self) -> FieldValue<'_> {
        (**self).as_field()
    }
}

impl AsField for dyn AnyValue {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Interface(self)
    }
}

macro_rules! impl_as_field_collection {
    ($variant:path, $($collection:ty => <$($generic:ident),+>),+ $(,)?) => {
        $(impl<$($generic: 'static),+> AsField for $collection {
            fn as_field(&self) -> FieldValue<'_> {
                $variant(self.len(), self)
            }
        })+
    };
}
impl_as_field_collection!(
    FieldValue::Slice,
    Vec<T> => <T>,
    VecDeque<T> => <T>,
    LinkedList<T> => <T>,
    BTreeSet<T> => <T>,
    HashSet<T, S> => <T, S>,
);
impl_as_field_collection!(
    FieldValue::Map,
    BTreeMap<K, V> => <K, V>,
    HashMap<K, V, S> => <K, V, S>,
);

impl<T: 'static, const N: usize> AsField for [T; N] {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::Slice(N, self)
    }
}

impl<T: ?Sized> AsField for *const T {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::UnsafePointer(self.cast::<()>())
    }
}

impl<T: ?Sized> AsField for *mut T {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::UnsafePointer(self.cast::<()>().cast_const())
    }
}

macro_rules! impl_as_field_type_name {
    ($variant:path, $($source:ty => <$($generic:ident),*>),+ $(,)?) => {
        $(impl<$($generic),*> AsField for $source {
            fn as_field(&self) -> FieldValue<'_> {
                $variant(any::type_name::<Self>())
            }
        })+
    };
}
impl_as_field_type_name!(
    FieldValue::Chan,
    Sender<T> => <T>,
    SyncSender<T> => <T>,
    Receiver<T> => <T>,
);
impl_as_field_type_name!(
    FieldValue::Func,
    fn() -> R => <R>,
    fn(A) -> R => <A, R>,
    fn(A, B) -> R => <A, B, R>,
    fn(A, B, C) -> R => <A, B, C, R>,
);
