use std::{fmt, result::Result as StdResult};

use bstr::ByteSlice;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ArgumentValue, Null, Value,
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Result},
};

pub type NullString = Null<String>;

impl_kind!(String, "String");

impl Encode for String {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Text(self.clone())
    }
}

impl Encode for str {
    fn encode(&self) -> ArgumentValue {
        ArgumentValue::Text(self.to_owned())
    }
}

impl Decode for String {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            // Invalid UTF-8 sequences become U+FFFD.
            Value::Bytes(v) => Ok(v.to_str_lossy().into_owned()),
            Value::Null => Err(DecodeError::UnexpectedNull),
            _ => Err(value.unsupported()),
        }
    }
}

impl Null<String> {
    /// Returns `true` if the value is `NULL` or the empty string.
    pub fn is_empty(&self) -> bool {
        self.get().is_empty() || self.is_null()
    }
}

/// A string where the empty string and `NULL` are the same state.
///
/// The empty string is normalized to `NULL` on construction, on [`scan`](Self::scan) and on
/// [`from_json`](Self::from_json), so `""` is never encoded as a database parameter or as a JSON
/// string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NonEmptyString(Null<String>);

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let valid = !value.is_empty();
        Self(Null::new(value, valid))
    }

    pub fn null() -> Self {
        Self(Null::null())
    }

    /// The held string; empty when `NULL`.
    pub fn get(&self) -> &str {
        self.0.get()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_option(&self) -> Option<&str> {
        self.0.as_option().map(String::as_str)
    }

    pub fn into_inner(self) -> Null<String> {
        self.0
    }

    fn normalize(&mut self) {
        if self.0.get().is_empty() {
            self.0.set_null();
        }
    }

    pub fn scan(&mut self, value: &Value) -> Result<()> {
        self.0.scan(value)?;
        self.normalize();
        Ok(())
    }

    pub fn value(&self) -> Option<ArgumentValue> {
        self.0.value()
    }

    pub fn to_json(&self) -> StdResult<Vec<u8>, EncodeError> {
        self.0.to_json()
    }

    pub fn from_json(&mut self, data: &[u8]) -> Result<()> {
        self.0.from_json(data)?;
        self.normalize();
        Ok(())
    }
}

impl From<&str> for NonEmptyString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NonEmptyString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<Null<String>> for NonEmptyString {
    fn from(value: Null<String>) -> Self {
        let mut s = Self(value);
        s.normalize();
        s
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Decode for NonEmptyString {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        Ok(Null::<String>::decode(value)?.into())
    }
}

impl Encode for NonEmptyString {
    fn encode(&self) -> ArgumentValue {
        self.0.encode()
    }
}

impl Serialize for NonEmptyString {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NonEmptyString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Null::<String>::deserialize(deserializer).map(Self::from)
    }
}
