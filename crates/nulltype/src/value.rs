use time::OffsetDateTime;

use crate::{ArgumentValue, error::DecodeError};

enum_mode! {
    /// Runtime types a database driver can hand to [`crate::Null::scan`].
    pub SourceType {
        Null => "NULL",
        Text => "string",
        Bytes => "bytes",
        Bool => "bool",
        Int8 => "i8",
        Int16 => "i16",
        Int32 => "i32",
        Int64 => "i64",
        Int => "isize",
        Uint8 => "u8",
        Uint16 => "u16",
        Uint32 => "u32",
        Uint64 => "u64",
        Float32 => "f32",
        Float64 => "f64",
        Time => "time",
    }
    default Null
}

impl SourceType {
    pub fn is_null(&self) -> bool {
        matches!(self, SourceType::Null)
    }
}

/// A value received from the database layer, already decoded by the driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    /// A platform-width signed integer.
    Int(isize),
    /// A typed single byte.
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Time(OffsetDateTime),
}

impl Value {
    /// Raw bytes of a `Text` or `Bytes` value; empty for every other variant.
    pub fn blob(&self) -> &[u8] {
        match self {
            Value::Text(v) => v.as_bytes(),
            Value::Bytes(v) => v.as_slice(),
            _ => &[],
        }
    }

    pub fn type_info(&self) -> SourceType {
        match self {
            Value::Null => SourceType::Null,
            Value::Text(_) => SourceType::Text,
            Value::Bytes(_) => SourceType::Bytes,
            Value::Bool(_) => SourceType::Bool,
            Value::Int8(_) => SourceType::Int8,
            Value::Int16(_) => SourceType::Int16,
            Value::Int32(_) => SourceType::Int32,
            Value::Int64(_) => SourceType::Int64,
            Value::Int(_) => SourceType::Int,
            Value::Uint8(_) => SourceType::Uint8,
            Value::Uint16(_) => SourceType::Uint16,
            Value::Uint32(_) => SourceType::Uint32,
            Value::Uint64(_) => SourceType::Uint64,
            Value::Float32(_) => SourceType::Float32,
            Value::Float64(_) => SourceType::Float64,
            Value::Time(_) => SourceType::Time,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub(crate) fn unsupported(&self) -> DecodeError {
        DecodeError::UnsupportedSourceType(self.type_info())
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )+
    };
}

value_from! {
    String => Text,
    Vec<u8> => Bytes,
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    isize => Int,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f32 => Float32,
    f64 => Float64,
    OffsetDateTime => Time,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_owned())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A parameter read back the way a driver returns it: integers as platform ints when they fit.
impl From<ArgumentValue> for Value {
    fn from(v: ArgumentValue) -> Self {
        match v {
            ArgumentValue::Null => Value::Null,
            ArgumentValue::Bool(v) => Value::Bool(v),
            ArgumentValue::Int64(v) => isize::try_from(v).map_or(Value::Int64(v), Value::Int),
            ArgumentValue::Uint8(v) => Value::Uint8(v),
            ArgumentValue::Float32(v) => Value::Float32(v),
            ArgumentValue::Float64(v) => Value::Float64(v),
            ArgumentValue::Text(v) => Value::Text(v),
            ArgumentValue::Time(v) => Value::Time(v),
        }
    }
}
