//! Typed values understood by the parser.

use derive_more::{Display, From};

/// The closed set of types a variable can be declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueKind {
    #[display("string")]
    String,
    /// Platform-native signed integer (`isize`).
    #[display("int")]
    Int,
    #[display("int64")]
    Int64,
    #[display("float32")]
    Float32,
    #[display("float64")]
    Float64,
    #[display("bool")]
    Bool,
}

/// A value of one of the supported kinds.
///
/// Used for declared defaults, which are checked against the declared kind at
/// parse time, and as the argument passed to validators.
#[derive(Debug, Clone, PartialEq, Display, From)]
pub enum Value {
    #[display("{_0}")]
    String(String),
    #[display("{_0}")]
    Int(isize),
    #[display("{_0}")]
    Int64(i64),
    #[display("{_0}")]
    Float32(f32),
    #[display("{_0}")]
    Float64(f64),
    #[display("{_0}")]
    Bool(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Int(_) => ValueKind::Int,
            Value::Int64(_) => ValueKind::Int64,
            Value::Float32(_) => ValueKind::Float32,
            Value::Float64(_) => ValueKind::Float64,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Untyped integer literals default to `i32`; they are treated as `int`.
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as isize)
    }
}

/// Rust types that can be the target of a declaration.
///
/// Each implementation owns the conversion from the raw environment string.
pub(crate) trait EnvValue: Sized {
    const KIND: ValueKind;

    /// Convert the raw environment string, `None` if it is not a valid value.
    fn parse_raw(raw: &str) -> Option<Self>;

    /// Extract a declared default of the matching kind.
    fn from_value(value: &Value) -> Option<Self>;

    fn to_value(&self) -> Value;
}

impl EnvValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn parse_raw(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl EnvValue for isize {
    const KIND: ValueKind = ValueKind::Int;

    fn parse_raw(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }
}

impl EnvValue for i64 {
    const KIND: ValueKind = ValueKind::Int64;

    fn parse_raw(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Int64(*self)
    }
}

impl EnvValue for f32 {
    const KIND: ValueKind = ValueKind::Float32;

    fn parse_raw(raw: &str) -> Option<Self> {
        raw.parse::<f32>()
            .ok()
            .filter(|v| !v.is_infinite() || is_infinity_literal(raw))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float32(v) => Some(*v),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Float32(*self)
    }
}

impl EnvValue for f64 {
    const KIND: ValueKind = ValueKind::Float64;

    fn parse_raw(raw: &str) -> Option<Self> {
        raw.parse::<f64>()
            .ok()
            .filter(|v| !v.is_infinite() || is_infinity_literal(raw))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Float64(*self)
    }
}

impl EnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn parse_raw(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

// Finite input that overflows to infinity is out of range, not a value.
fn is_infinity_literal(raw: &str) -> bool {
    raw.trim_start_matches(['+', '-'])
        .to_ascii_lowercase()
        .starts_with("inf")
}
