use time::OffsetDateTime;

/// A value handed to the database layer as a statement parameter.
///
/// Every signed integer kind is widened to `Int64`; the other kinds pass through unchanged.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgumentValue {
    Null,
    Bool(bool),
    Int64(i64),
    /// A single byte.
    Uint8(u8),
    Float32(f32),
    Float64(f64),
    Text(String),
    Time(OffsetDateTime),
}

impl ArgumentValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ArgumentValue::Null)
    }

    /// Converts `Null` into `None`, everything else into `Some`.
    pub fn into_option(self) -> Option<ArgumentValue> {
        match self {
            ArgumentValue::Null => None,
            v => Some(v),
        }
    }
}
