use crate::{ExtractError, FieldValue, Opaque, Result, Value};

/// Converts the value of field `field` into its [`Value`] representation.
///
/// `isize` and the signed integers from 16 to 64 bits become [`Value::Int`], floats become
/// [`Value::Float`]. Records, collections, interfaces and timestamps are passed through as
/// [`Value::Opaque`]. Every other kind fails with [`ExtractError::UnsupportedKind`]: `i8`,
/// the unsigned integers, pointers and empty options among them. A missing value reaches the
/// mapping as null only through `default = "null"`.
pub fn coerce<'a>(field: &'static str, value: FieldValue<'a>) -> Result<Value<'a>> {
    Ok(match value {
        FieldValue::Bool(v) => Value::Bool(v),
        FieldValue::Int(v) => Value::Int(v as i64),
        FieldValue::Int16(v) => Value::Int(v.into()),
        FieldValue::Int32(v) => Value::Int(v.into()),
        FieldValue::Int64(v) => Value::Int(v),
        FieldValue::Float32(v) => Value::Float(v.into()),
        FieldValue::Float64(v) => Value::Float(v),
        FieldValue::String(v) => Value::String(v),
        FieldValue::Timestamp(v) => Value::Opaque(Opaque::Timestamp(v)),
        FieldValue::Struct(v) => Value::Opaque(Opaque::Record(v)),
        FieldValue::Slice(_, v) => Value::Opaque(Opaque::Slice(v)),
        FieldValue::Map(_, v) => Value::Opaque(Opaque::Map(v)),
        FieldValue::Interface(v) => Value::Opaque(Opaque::Interface(v)),
        v @ (FieldValue::Invalid
        | FieldValue::Int8(..)
        | FieldValue::Int128(..)
        | FieldValue::UInt(..)
        | FieldValue::UInt8(..)
        | FieldValue::UInt16(..)
        | FieldValue::UInt32(..)
        | FieldValue::UInt64(..)
        | FieldValue::UInt128(..)
        | FieldValue::Pointer(..)
        | FieldValue::Func(..)
        | FieldValue::Chan(..)
        | FieldValue::UnsafePointer(..)) => {
            return Err(ExtractError::UnsupportedKind {
                field,
                kind: v.kind(),
            }
            .into());
        }
    })
}
