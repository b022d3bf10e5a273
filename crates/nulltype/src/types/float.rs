use std::{fmt, result::Result as StdResult, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

use super::parse_text;
use crate::{ArgumentValue, Kind, Null, Value, decode::Decode, encode::Encode, error::DecodeError};

pub type NullFloat32 = Null<f32>;
pub type NullFloat64 = Null<f64>;

/// Floats have no JSON literal for NaN or the infinities, so those fail to encode.
macro_rules! float_kind {
    ($ty:ty, $name:literal) => {
        impl Kind for $ty {
            const NAME: &'static str = $name;

            fn zero() -> Self {
                0.0
            }

            fn serialize_json<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
                if !self.is_finite() {
                    return Err(<S::Error as ser::Error>::custom(format!(
                        "{} {} has no JSON representation",
                        Self::NAME,
                        self
                    )));
                }
                self.serialize(serializer)
            }

            fn deserialize_json<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> StdResult<Self, D::Error> {
                <$ty>::deserialize(deserializer)
            }

            fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

float_kind!(f32, "Float32");
float_kind!(f64, "Float64");

/// Spelled-out infinities and NaN, with an optional sign.
fn is_non_finite_literal(text: &[u8]) -> bool {
    let unsigned = text
        .strip_prefix(b"+")
        .or_else(|| text.strip_prefix(b"-"))
        .unwrap_or(text);
    [&b"inf"[..], b"infinity", b"nan"]
        .iter()
        .any(|lit| unsigned.eq_ignore_ascii_case(lit))
}

/// Parse float text, rejecting values too large for the kind instead of rounding them to infinity.
fn parse_float<T>(kind: &'static str, text: &[u8]) -> StdResult<T, DecodeError>
where
    T: FromStr + Into<f64> + Copy,
    T::Err: fmt::Display,
{
    let v: T = parse_text(kind, text)?;
    if !Into::<f64>::into(v).is_finite() && !is_non_finite_literal(text) {
        return Err(DecodeError::parse(kind, text, "value out of range"));
    }
    Ok(v)
}

impl Encode for f32 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Float32(*self)
    }
}

impl Decode for f32 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_float(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(Self::from(*v)),
            Value::Int32(v) => Ok(*v as Self),
            Value::Int64(v) => Ok(*v as Self),
            Value::Int(v) => Ok(*v as Self),
            Value::Float32(v) => Ok(*v),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Encode for f64 {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Float64(*self)
    }
}

impl Decode for f64 {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(_) | Value::Bytes(_) => parse_float(Self::NAME, value.blob()),
            Value::Int8(v) => Ok(Self::from(*v)),
            Value::Int16(v) => Ok(Self::from(*v)),
            Value::Int32(v) => Ok(Self::from(*v)),
            Value::Int64(v) => Ok(*v as Self),
            Value::Int(v) => Ok(*v as Self),
            Value::Float64(v) => Ok(*v),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}
