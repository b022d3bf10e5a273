use std::result::Result as StdResult;

use atoi::FromRadix10SignedChecked;

use super::narrow;
use crate::{ArgumentValue, Kind, Null, Value, decode::Decode, encode::Encode, error::DecodeError};

pub type NullInt8 = Null<i8>;
pub type NullInt16 = Null<i16>;
pub type NullInt32 = Null<i32>;
pub type NullInt64 = Null<i64>;
pub type NullInt = Null<isize>;

impl_kind!(i8, "Int8");
impl_kind!(i16, "Int16");
impl_kind!(i32, "Int32");
impl_kind!(i64, "Int64");
impl_kind!(isize, "Int");

/// Parse a base-10 integer that must span the whole input, with an optional leading sign.
fn parse_int<T>(kind: &'static str, text: &[u8]) -> StdResult<T, DecodeError>
where
    T: FromRadix10SignedChecked,
{
    let complete = text.last().is_some_and(u8::is_ascii_digit);
    match T::from_radix_10_signed_checked(text) {
        (Some(n), used) if used == text.len() && complete => Ok(n),
        (None, used) if used == text.len() => {
            Err(DecodeError::parse(kind, text, "value out of range"))
        }
        _ => Err(DecodeError::parse(kind, text, "invalid syntax")),
    }
}

impl Encode for i8 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Int64(i64::from(*self))
    }
}

impl Decode for i8 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_int(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(*v),
            Value::Int(v) => narrow(Self::NAME, *v as i128),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Encode for i16 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Int64(i64::from(*self))
    }
}

impl Decode for i16 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_int(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(*v),
            Value::Int(v) => narrow(Self::NAME, *v as i128),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Encode for i32 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Int64(i64::from(*self))
    }
}

impl Decode for i32 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_int(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(Self::from(*v)),
            Value::Int32(v) => Ok(*v),
            // isize is 64 bits wide on most targets, so this narrows too.
            Value::Int(v) => narrow(Self::NAME, *v as i128),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Encode for i64 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Int64(*self)
    }
}

impl Decode for i64 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_int(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(Self::from(*v)),
            Value::Int32(v) => Ok(Self::from(*v)),
            Value::Int64(v) => Ok(*v),
            Value::Int(v) => narrow(Self::NAME, *v as i128),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Encode for isize {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Int64(*self as i64)
    }
}

impl Decode for isize {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_int(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(Self::from(*v)),
            Value::Int32(v) => narrow(Self::NAME, i128::from(*v)),
            Value::Int64(v) => narrow(Self::NAME, i128::from(*v)),
            Value::Int(v) => Ok(*v),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}
