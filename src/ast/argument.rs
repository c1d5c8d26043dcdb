use crate::ast::Value;
use serde::{Deserialize, Serialize};

/// One `key: value` pair attached to a collection selection, e.g. a filter,
/// limit, or offset. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    key: String,
    value: Value,
}

impl Argument {
    /// Create an argument. No validation happens here: an empty key passes
    /// through and renders as given, matching the permissive contract of the
    /// rest of the builder.
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
