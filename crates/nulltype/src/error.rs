//! Types for working with errors produced by nulltype.

use crate::SourceType;

/// A specialized `Result` type for decode operations.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Represents all the ways decoding a value can fail, from either boundary.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum DecodeError {
    /// The database value's runtime type has no coercion rule for the target kind.
    #[error("unsupported type: {0}")]
    UnsupportedSourceType(SourceType),

    /// A textual value could not be parsed as the target kind.
    #[error("cannot parse {text:?} as {kind}: {reason}")]
    Parse {
        kind: &'static str,
        text: String,
        reason: String,
    },

    /// A numeric value lies outside the range the target kind can represent.
    #[error("value out of range for {kind}: {value}")]
    Range { kind: &'static str, value: i128 },

    /// A bare kind was asked to decode `NULL`. Use [`crate::Null`] or `Option<T>`.
    #[error("unexpected NULL")]
    UnexpectedNull,

    /// The JSON token was malformed or had the wrong type.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn parse(kind: &'static str, text: &[u8], reason: impl ToString) -> Self {
        DecodeError::Parse {
            kind,
            text: String::from_utf8_lossy(text).into_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Errors produced while encoding a value.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
