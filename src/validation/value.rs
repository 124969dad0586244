//! Raw, untrusted arguments.
//!
//! Constructors and mutators take `impl Into<Value>` instead of a concrete
//! Rust type so that a caller can hand over an argument of the wrong kind and
//! get a [`ValidationError::WrongType`] back instead of a compile error. The
//! `expect_*` methods are the first validation tier: they only check the kind.

use serde::{Deserialize, Serialize};

use super::{Number, ValidationError};

/// A loosely-typed argument as it arrives from a caller or a decoded payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Converts any accepted argument, fixing the target type for the
    /// `expect_*` chain that follows.
    pub fn of(arg: impl Into<Value>) -> Value {
        arg.into()
    }

    /// Short kind name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "str",
            Value::List(_) => "list",
        }
    }

    /// Accepts text only.
    pub fn expect_text(self, field: &'static str) -> Result<String, ValidationError> {
        match self {
            Value::Text(text) => Ok(text),
            other => Err(ValidationError::wrong_type(field, "a string", &other)),
        }
    }

    /// Accepts `Int` or `Float`. `Bool` is rejected.
    pub fn expect_number(self, field: &'static str) -> Result<Number, ValidationError> {
        match self {
            Value::Int(i) => Ok(Number::Int(i)),
            Value::Float(f) => Ok(Number::Float(f)),
            other => Err(ValidationError::wrong_type(field, "a number", &other)),
        }
    }

    /// Accepts `Int` only.
    pub fn expect_int(self, field: &'static str) -> Result<i64, ValidationError> {
        match self {
            Value::Int(i) => Ok(i),
            other => Err(ValidationError::wrong_type(field, "an integer", &other)),
        }
    }

    /// Accepts a list; elements are left for the caller to check.
    pub fn expect_list(
        self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<Vec<Value>, ValidationError> {
        match self {
            Value::List(items) => Ok(items),
            other => Err(ValidationError::wrong_type(field, expected, &other)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! int_into_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

int_into_value!(i8, i16, i32, i64, u8, u16, u32);

// Wider than i64: values past i64::MAX become floats, as a number that large
// would in the source arithmetic.
macro_rules! wide_int_into_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Value::Float(value as f64), Value::Int)
                }
            }
        )*
    };
}

wide_int_into_value!(u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
