use serde::{Deserialize, Serialize};

///
/// Value
///
/// One cell of a row.
///
/// Null → SQL NULL; every `FromCell` read of it is absent.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

///
/// FromCell
///
/// Scalar decoding from one cell. Returns `None` for NULL and for any
/// representation the target type does not accept; decoding never fails.
///

pub trait FromCell: Sized {
    fn from_cell(value: &Value) -> Option<Self>;
}

impl FromCell for Value {
    fn from_cell(value: &Value) -> Option<Self> {
        (!value.is_null()).then(|| value.clone())
    }
}

impl FromCell for bool {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromCell for i64 {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            Value::Uint(v) => Self::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromCell for i32 {
    fn from_cell(value: &Value) -> Option<Self> {
        i64::from_cell(value).and_then(|v| Self::try_from(v).ok())
    }
}

impl FromCell for u64 {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Uint(v) => Some(*v),
            Value::Int(v) => Self::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromCell for u32 {
    fn from_cell(value: &Value) -> Option<Self> {
        u64::from_cell(value).and_then(|v| Self::try_from(v).ok())
    }
}

impl FromCell for f64 {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromCell for String {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromCell for Vec<u8> {
    fn from_cell(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(v) => Some(v.clone()),
            _ => None,
        }
    }
}
