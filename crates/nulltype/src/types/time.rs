//! The timestamp kind.
use std::{fmt, result::Result as StdResult};

use serde::{Deserialize, Deserializer, Serializer, de, ser};
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;
pub use time::OffsetDateTime;

use crate::{ArgumentValue, Kind, Null, Value, decode::Decode, encode::Encode, error::DecodeError};

pub type NullTime = Null<OffsetDateTime>;

/// January 1, year 1, 00:00:00 UTC.
const ZERO: OffsetDateTime = datetime!(0001-01-01 0:00 UTC);

impl Kind for OffsetDateTime {
    const NAME: &'static str = "Time";

    fn zero() -> Self {
        ZERO
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        let formatted = self.format(&Rfc3339).map_err(|e| {
            <S::Error as ser::Error>::custom(format!("failed to format OffsetDateTime: {e}"))
        })?;
        serializer.serialize_str(&formatted)
    }

    fn deserialize_json<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&text, &Rfc3339).map_err(|e| {
            <D::Error as de::Error>::custom(format!("invalid RFC3339 time {text:?}: {e}"))
        })
    }

    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format(&Rfc3339) {
            Ok(formatted) => f.write_str(&formatted),
            // Years outside 0..=9999 have no RFC3339 form.
            Err(_) => fmt::Display::fmt(self, f),
        }
    }
}

impl Encode for OffsetDateTime {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Time(*self)
    }
}

impl Decode for OffsetDateTime {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Time(v) => Ok(*v),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}
