//! # Value Kinds — Closed Dispatch over the JSON Value Space
//!
//! Defines [`ValueKind`], the tagged union used to dispatch validation
//! checkers by a value's runtime shape. Branching happens on this enum,
//! not on ad-hoc `is_*()` probing, so the compiler enforces that every
//! checker handles every kind.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The runtime kind of a JSON value.
///
/// `integer` is deliberately absent: it is a schema-side refinement of
/// `number`, not a distinct runtime kind. Whether a number counts as an
/// integer is decided by [`is_integer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// JSON `null`.
    Null,
    /// JSON `true`/`false`.
    Boolean,
    /// Any JSON number (integer or float).
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Array,
    /// A JSON object.
    Object,
}

impl ValueKind {
    /// Classify a value by its runtime shape.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// The lowercase name used in schemas and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a JSON value is a mathematically whole number.
///
/// `1`, `-3`, and `2.0` are integers; `2.5` is not. Non-numbers are not.
pub fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                true
            } else {
                n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
            }
        }
        _ => false,
    }
}
