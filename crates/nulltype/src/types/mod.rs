//! Nullable kinds and their conversions.
//!
//! # Kinds
//!
//! | Alias            | Rust type              | Accepted database values                        | Parameter  |
//! |------------------|------------------------|-------------------------------------------------|------------|
//! | [`NullBool`]     | `bool`                 | text, bytes, any integer that is 0 or 1, bool   | `Bool`     |
//! | [`NullByte`]     | `u8`                   | u8                                              | `Uint8`    |
//! | [`NullInt8`]     | `i8`                   | text, bytes, i8, isize (range checked)          | `Int64`    |
//! | [`NullInt16`]    | `i16`                  | text, bytes, i8, i16, isize (range checked)     | `Int64`    |
//! | [`NullInt32`]    | `i32`                  | text, bytes, i8..i32, isize (range checked)     | `Int64`    |
//! | [`NullInt64`]    | `i64`                  | text, bytes, i8..i64, isize                     | `Int64`    |
//! | [`NullInt`]      | `isize`                | text, bytes, i8..i64, isize                     | `Int64`    |
//! | [`NullFloat32`]  | `f32`                  | text, bytes, i8..i64, isize, f32                | `Float32`  |
//! | [`NullFloat64`]  | `f64`                  | text, bytes, i8..i64, isize, f64                | `Float64`  |
//! | [`NullString`]   | `String`               | text, bytes                                     | `Text`     |
//! | [`NullTime`]     | `time::OffsetDateTime` | time                                            | `Time`     |
//!
//! `NULL` is accepted by every kind and produces the `NULL` state.
//!
//! #### Note: Strings
//!
//! [`NullString`] treats the empty string as an ordinary value. [`NonEmptyString`] treats it as
//! `NULL` everywhere: on construction, on scan, and on both JSON directions.

use std::{fmt::Display, str::from_utf8, str::FromStr};

use crate::error::DecodeError;

/// Implement [`crate::Kind`] for a type whose serde and `Display` impls already have the right
/// format.
macro_rules! impl_kind {
    ($ty:ty, $name:literal) => {
        impl $crate::Kind for $ty {
            const NAME: &'static str = $name;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn serialize_json<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(self, serializer)
            }

            fn deserialize_json<'de, D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                <$ty as ::serde::Deserialize>::deserialize(deserializer)
            }

            fn fmt_display(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

mod bool;
mod byte;
mod float;
mod int;
mod str;
pub mod time;

pub use self::{
    bool::NullBool,
    byte::NullByte,
    float::{NullFloat32, NullFloat64},
    int::{NullInt, NullInt8, NullInt16, NullInt32, NullInt64},
    str::{NonEmptyString, NullString},
    time::NullTime,
};

/// Parse raw text with the type's `FromStr` impl.
fn parse_text<T>(kind: &'static str, text: &[u8]) -> Result<T, DecodeError>
where
    T: FromStr,
    T::Err: Display,
{
    let s = from_utf8(text).map_err(|e| DecodeError::parse(kind, text, e))?;
    s.parse().map_err(|e| DecodeError::parse(kind, text, e))
}

/// Narrow an integer into a smaller kind, reporting the source value when it does not fit.
fn narrow<T: TryFrom<i128>>(kind: &'static str, value: i128) -> Result<T, DecodeError> {
    T::try_from(value).map_err(|_| DecodeError::Range { kind, value })
}
