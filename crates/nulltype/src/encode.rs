//! Provides [`Encode`] for encoding values as database parameters.
use crate::ArgumentValue;

/// Encode a single value to be sent to the database.
pub trait Encode {
    /// Produce the parameter the database layer expects for this value. Encoding never fails.
    fn encode(&self) -> ArgumentValue;
}

impl<T> Encode for &T
where
    T: Encode + ?Sized,
{
    fn encode(&self) -> ArgumentValue {
        (**self).encode()
    }
}

impl<T> Encode for Option<T>
where
    T: Encode,
{
    fn encode(&self) -> ArgumentValue {
        if let Some(v) = self {
            v.encode()
        } else {
            ArgumentValue::Null
        }
    }
}
