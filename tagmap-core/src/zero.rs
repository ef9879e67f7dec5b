use crate::FieldValue;
use time::{OffsetDateTime, macros::datetime};

/// The instant an uninitialized timestamp holds: January 1, year 1, 00:00:00 UTC.
pub const ZERO_INSTANT: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

impl FieldValue<'_> {
    /// Whether this is the default (uninitialized) value of its kind.
    ///
    /// Timestamps are compared to [`ZERO_INSTANT`], collections are default when empty and
    /// records when all their fields are default. The zero value of a pointer is null, which
    /// in Rust is only spelled `None` ([`FieldValue::Invalid`]), so a pointer is never
    /// default. Neither are interfaces, functions and channels.
    pub fn is_default(&self) -> bool {
        match self {
            FieldValue::Invalid => true,
            FieldValue::Bool(v) => !*v,
            FieldValue::Int(v) => *v == 0,
            FieldValue::Int8(v) => *v == 0,
            FieldValue::Int16(v) => *v == 0,
            FieldValue::Int32(v) => *v == 0,
            FieldValue::Int64(v) => *v == 0,
            FieldValue::Int128(v) => *v == 0,
            FieldValue::UInt(v) => *v == 0,
            FieldValue::UInt8(v) => *v == 0,
            FieldValue::UInt16(v) => *v == 0,
            FieldValue::UInt32(v) => *v == 0,
            FieldValue::UInt64(v) => *v == 0,
            FieldValue::UInt128(v) => *v == 0,
            FieldValue::Float32(v) => *v == 0.0,
            FieldValue::Float64(v) => *v == 0.0,
            FieldValue::String(v) => v.is_empty(),
            FieldValue::Timestamp(v) => *v == ZERO_INSTANT,
            FieldValue::Struct(v) => v.is_zero(),
            FieldValue::Slice(len, ..) | FieldValue::Map(len, ..) => *len == 0,
            FieldValue::Pointer(..)
            | FieldValue::Interface(..)
            | FieldValue::Func(..)
            | FieldValue::Chan(..) => false,
            FieldValue::UnsafePointer(v) => v.is_null(),
        }
    }
}
