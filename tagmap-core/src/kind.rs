use std::fmt::{self, Display};

/// Kind of a field value, as reported by [`FieldValue::kind`](crate::FieldValue::kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No concrete value (an empty `Option`).
    Invalid,
    Bool,
    /// Platform width signed integer (`isize`).
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    /// Platform width unsigned integer (`usize`).
    UInt,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Float32,
    Float64,
    String,
    Timestamp,
    /// A record exposing its own fields.
    Struct,
    /// A single level of indirection (`Box<T>`, `Rc<T>`, `Arc<T>`, `Some(T)`).
    Pointer,
    Slice,
    Map,
    /// A type erased value (`dyn AnyValue`).
    Interface,
    Func,
    Chan,
    UnsafePointer,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Invalid => "invalid",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Int128 => "int128",
            Kind::UInt => "uint",
            Kind::UInt8 => "uint8",
            Kind::UInt16 => "uint16",
            Kind::UInt32 => "uint32",
            Kind::UInt64 => "uint64",
            Kind::UInt128 => "uint128",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Timestamp => "timestamp",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Interface => "interface",
            Kind::Func => "func",
            Kind::Chan => "chan",
            Kind::UnsafePointer => "unsafe pointer",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
