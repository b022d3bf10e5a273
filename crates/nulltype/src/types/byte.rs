use std::{fmt, result::Result as StdResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ArgumentValue, Kind, Null, Value, decode::Decode, encode::Encode, error::DecodeError};

pub type NullByte = Null<u8>;

impl Kind for u8 {
    const NAME: &'static str = "Byte";

    fn zero() -> Self {
        0
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        u8::deserialize(deserializer)
    }

    /// A byte renders as the character with that code point.
    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&char::from(*self), f)
    }
}

impl Encode for u8 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Uint8(*self)
    }
}

impl Decode for u8 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Uint8(v) => Ok(*v),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}
