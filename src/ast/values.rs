use crate::error::QueryError;
use serde::{Deserialize, Serialize};

/// An argument value.
///
/// A closed union of the scalar kinds a selection argument can carry, so the
/// renderer stays exhaustive: adding a kind is a compile-time decision, not a
/// runtime surprise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Rendered exactly as provided, with no implicit quoting or escaping.
    /// Callers that need a quoted GraphQL string pass a pre-quoted value.
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Bare token, for enum-like values such as `ASC` or `PUBLISHED`.
    Ident(String),
}

impl Value {
    /// Create a bare-identifier value (enum-like token).
    pub fn ident(name: impl Into<String>) -> Self {
        Value::Ident(name.into())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Ident(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = QueryError;

    /// Convert a JSON scalar into an argument value. Non-scalar JSON (null,
    /// arrays, objects) has no argument rendering and is rejected.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        match json {
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(QueryError::invalid_state(format!(
                        "JSON number out of range: {}",
                        n
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s)),
            other => Err(QueryError::invalid_state(format!(
                "JSON {} is not an argument scalar",
                match other {
                    serde_json::Value::Null => "null",
                    serde_json::Value::Array(_) => "array",
                    serde_json::Value::Object(_) => "object",
                    _ => "value",
                }
            ))),
        }
    }
}
