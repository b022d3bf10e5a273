//! Nullable primitive values that round-trip through database parameters and JSON.
//!
//! Every kind is a [`Null<T>`]: a value plus a validity flag. [`Null::scan`] and [`Null::value`]
//! handle the database side, [`Null::from_json`], [`Null::to_json`] and the serde impls handle
//! the JSON side. `NULL` means the same thing in both.
//!
//! ```
//! use nulltype::{NullInt64, Value};
//!
//! let mut n = NullInt64::null();
//! n.scan(&Value::from("42"))?;
//! assert_eq!(n.to_json()?, b"42");
//!
//! n.scan(&Value::Null)?;
//! assert_eq!(n.to_json()?, b"null");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
mod enum_mode;

mod argument;
pub mod decode;
pub mod encode;
mod error;
mod null;
pub mod types;
mod value;

pub use crate::{
    argument::ArgumentValue,
    decode::Decode,
    encode::Encode,
    error::{DecodeError, EncodeError, Result},
    null::{Kind, Null},
    types::{
        NonEmptyString, NullBool, NullByte, NullFloat32, NullFloat64, NullInt, NullInt8,
        NullInt16, NullInt32, NullInt64, NullString, NullTime,
    },
    value::{SourceType, Value},
};
