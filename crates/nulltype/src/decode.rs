//! Provides [`Decode`] for decoding values received from the database.
use std::result::Result as StdResult;

use crate::{Value, error::DecodeError};

/// A type that can be decoded from a database value.
pub trait Decode: Sized {
    /// Decode a new value of this type from a value handed over by the database driver.
    fn decode(value: &Value) -> StdResult<Self, DecodeError>;
}

// implement `Decode` for Option<T> for all kinds
impl<T> Decode for Option<T>
where
    T: Decode,
{
    fn decode(value: &Value) -> StdResult<Self, DecodeError> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::decode(value)?))
        }
    }
}
