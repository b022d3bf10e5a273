//! The generic nullable container and the [`Kind`] trait that parameterizes it.
use std::{fmt, result::Result as StdResult};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    ArgumentValue, Value,
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Result},
};

/// A primitive that can be held by [`Null`].
///
/// Implementations supply the zero value, the JSON literal format and the display format. The
/// coercion table for database values comes from the [`Decode`] impl.
pub trait Kind: Decode + Encode + Clone + PartialEq + fmt::Debug {
    /// Name of the kind used in error messages and diagnostics.
    const NAME: &'static str;

    /// The value stored while the container is `NULL`.
    fn zero() -> Self;

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Write the JSON literal for a present value.
    fn serialize_json<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error>;

    /// Read a present value from a non-null JSON token.
    fn deserialize_json<'de, D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error>;

    /// Render a present value as text.
    fn fmt_display(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A value of kind `T` that may be `NULL`.
///
/// `NULL` and absent are the same state. While `NULL`, the held value is always `T::zero()`.
///
/// Decoding overwrites the container in place, so an instance shared across threads must be
/// synchronized by the caller if any thread mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Null<T: Kind> {
    value: T,
    valid: bool,
}

impl<T: Kind> Null<T> {
    /// Create a container. When `valid` is false the given value is discarded.
    pub fn new(value: T, valid: bool) -> Self {
        if valid {
            Self::some(value)
        } else {
            Self::null()
        }
    }

    pub fn some(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn null() -> Self {
        Self {
            value: T::zero(),
            valid: false,
        }
    }

    /// The held value; `T::zero()` when `NULL`.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Returns `true` if the value is `NULL` or equal to the kind's zero value.
    pub fn is_zero_or_null(&self) -> bool {
        !self.valid || self.value.is_zero()
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    pub fn set_null(&mut self) {
        self.value = T::zero();
        self.valid = false;
    }

    /// Decode a value received from the database into `self`.
    ///
    /// `NULL` always succeeds. Anything else is coerced according to the kind's coercion table.
    /// On failure `self` is left unchanged.
    pub fn scan(&mut self, value: &Value) -> Result<()> {
        if value.is_null() {
            self.set_null();
            return Ok(());
        }
        match T::decode(value) {
            Ok(v) => {
                self.set(v);
                Ok(())
            }
            Err(err) => {
                tracing::trace!(
                    target: "nulltype",
                    kind = T::NAME,
                    source = %value.type_info(),
                    error = %err,
                    "scan rejected"
                );
                Err(err)
            }
        }
    }

    /// The database parameter for this value, or `None` for `NULL`.
    pub fn value(&self) -> Option<ArgumentValue> {
        self.as_option().map(Encode::encode)
    }

    /// Encode as a JSON document: `null`, or the kind's JSON literal.
    pub fn to_json(&self) -> StdResult<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a JSON document into `self`. On failure `self` is left unchanged.
    pub fn from_json(&mut self, data: &[u8]) -> Result<()> {
        match serde_json::from_slice::<Self>(data) {
            Ok(v) => {
                *self = v;
                Ok(())
            }
            Err(err) => {
                tracing::trace!(target: "nulltype", kind = T::NAME, error = %err, "JSON rejected");
                Err(DecodeError::Json(err))
            }
        }
    }
}

impl<T: Kind> Default for Null<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Kind> From<T> for Null<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T: Kind> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::some)
    }
}

impl<T: Kind> From<Null<T>> for Option<T> {
    fn from(value: Null<T>) -> Self {
        value.into_option()
    }
}

impl<T: Kind> fmt::Display for Null<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.value.fmt_display(f)
        } else {
            f.write_str("<null>")
        }
    }
}

impl<T: Kind> Decode for Null<T> {
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        let mut n = Self::null();
        n.scan(value)?;
        Ok(n)
    }
}

impl<T: Kind> Encode for Null<T> {
    fn encode(&self) -> ArgumentValue {
        self.value().unwrap_or(ArgumentValue::Null)
    }
}

impl<T: Kind> Serialize for Null<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize_json(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

/// A non-null JSON token, read through the kind's JSON hook.
struct Present<T>(T);

impl<'de, T: Kind> Deserialize<'de> for Present<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        T::deserialize_json(deserializer).map(Present)
    }
}

impl<'de, T: Kind> Deserialize<'de> for Null<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let present = Option::<Present<T>>::deserialize(deserializer)?;
        Ok(present.map_or_else(Self::null, |Present(v)| Self::some(v)))
    }
}
