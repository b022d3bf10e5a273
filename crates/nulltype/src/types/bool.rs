use std::result::Result as StdResult;

use crate::{ArgumentValue, Kind, Null, Value, decode::Decode, encode::Encode, error::DecodeError};

pub type NullBool = Null<bool>;

impl_kind!(bool, "Bool");

/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
fn parse_bool(text: &[u8]) -> StdResult<bool, DecodeError> {
    match text {
        b"1" | b"t" | b"T" | b"TRUE" | b"true" | b"True" => Ok(true),
        b"0" | b"f" | b"F" | b"FALSE" | b"false" | b"False" => Ok(false),
        _ => Err(DecodeError::parse(bool::NAME, text, "invalid syntax")),
    }
}

/// Integers map to booleans only when they are exactly 0 or 1.
fn from_int(value: i128) -> StdResult<bool, DecodeError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(DecodeError::Range {
            kind: bool::NAME,
            value,
        }),
    }
}

impl Encode for bool {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Bool(*self)
    }
}

impl Decode for bool {
    fn decode(value: &Value) -> StdResult<bool, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_bool(value.blob()),
            Value::Bool(v) => Ok(*v),
            Value::Int8(v) => from_int((*v).into()),
            Value::Int16(v) => from_int((*v).into()),
            Value::Int32(v) => from_int((*v).into()),
            Value::Int64(v) => from_int((*v).into()),
            Value::Int(v) => from_int(*v as i128),
            Value::Uint8(v) => from_int((*v).into()),
            Value::Uint16(v) => from_int((*v).into()),
            Value::Uint32(v) => from_int((*v).into()),
            Value::Uint64(v) => from_int((*v).into()),
            Value::Null => Err(DecodeError::UnexpectedNull),
            Value::Float32(_) | Value::Float64(_) | Value::Time(_) => Err(value.unsupported()),
        }
    }
}
