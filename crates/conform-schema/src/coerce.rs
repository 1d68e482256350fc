//! # Coercion Engine
//!
//! Best-effort type repair for values that fail a direct type check.
//! Coercion never mutates the input: it either produces a new value of an
//! allowed type or reports failure with the original value unchanged.
//!
//! Callers that adopt a coerced value must surface a coercion warning —
//! silent repair hides config-authoring mistakes.

use serde_json::{Number, Value};

use crate::node::{SchemaNode, SchemaType, TypeSpec};

/// The outcome of a coercion attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Coercion {
    /// Whether a conversion (or a no-op on an already-valid value) applied.
    pub success: bool,
    /// The converted value on success; the original value otherwise.
    pub value: Value,
}

impl Coercion {
    fn success(value: Value) -> Self {
        Self {
            success: true,
            value,
        }
    }

    fn failure(value: Value) -> Self {
        Self {
            success: false,
            value,
        }
    }
}

/// Attempt to convert `value` into a type the schema allows.
///
/// A value that already satisfies the schema's `type` facet is returned
/// unchanged with `success: true` (idempotence — no warning is warranted).
/// A schema with no `type` facet has nothing to coerce toward, and the
/// attempt fails.
///
/// String inputs are tried against the allowed types in a fixed priority:
/// number/integer, then boolean, then null, then array/object via a
/// strict document parse. Non-string inputs stringify (numbers and
/// booleans) or collapse to a truthiness boolean (numbers).
pub fn coerce(value: &Value, schema: &SchemaNode) -> Coercion {
    let Some(spec) = &schema.schema_type else {
        return Coercion::failure(value.clone());
    };
    if spec.allows(value) {
        return Coercion::success(value.clone());
    }

    let coerced = match value {
        Value::String(s) => coerce_string(s, spec),
        Value::Number(n) => coerce_number(n, spec),
        Value::Bool(b) if spec.contains(SchemaType::String) => {
            Some(Value::String(b.to_string()))
        }
        _ => None,
    };

    match coerced {
        Some(new_value) => {
            tracing::debug!(
                from = %crate::ValueKind::of(value),
                to = %crate::ValueKind::of(&new_value),
                "coerced value to satisfy schema type"
            );
            Coercion::success(new_value)
        }
        None => Coercion::failure(value.clone()),
    }
}

/// String-input rules, in priority order.
fn coerce_string(s: &str, spec: &TypeSpec) -> Option<Value> {
    let wants_integer = spec.contains(SchemaType::Integer);
    if wants_integer || spec.contains(SchemaType::Number) {
        if let Some(n) = parse_number(s, wants_integer && !spec.contains(SchemaType::Number)) {
            return Some(Value::Number(n));
        }
    }
    if spec.contains(SchemaType::Boolean) {
        if let Some(b) = parse_boolean(s) {
            return Some(Value::Bool(b));
        }
    }
    if spec.contains(SchemaType::Null) && s.trim().eq_ignore_ascii_case("null") {
        return Some(Value::Null);
    }
    if spec.contains(SchemaType::Array) || spec.contains(SchemaType::Object) {
        if let Ok(parsed) = serde_json::from_str::<Value>(s) {
            let shape_matches = match &parsed {
                Value::Array(_) => spec.contains(SchemaType::Array),
                Value::Object(_) => spec.contains(SchemaType::Object),
                _ => false,
            };
            if shape_matches {
                return Some(parsed);
            }
        }
    }
    None
}

/// Permissive numeric parse of a trimmed string. Blank strings and
/// non-finite results are rejected; `integer_only` additionally requires a
/// whole number.
fn parse_number(s: &str, integer_only: bool) -> Option<Number> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: f64 = trimmed.parse().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    if integer_only && parsed.fract() != 0.0 {
        return None;
    }
    number_from_f64(parsed)
}

/// Recognized boolean tokens, case-insensitive and trimmed.
fn parse_boolean(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Number-input rules: stringify, or collapse to truthiness.
fn coerce_number(n: &Number, spec: &TypeSpec) -> Option<Value> {
    if spec.contains(SchemaType::String) {
        return Some(Value::String(n.to_string()));
    }
    if spec.contains(SchemaType::Boolean) {
        let truthy = n.as_f64().is_some_and(|f| f != 0.0);
        return Some(Value::Bool(truthy));
    }
    None
}

/// Represent a finite f64 as a JSON number, preferring the integer form
/// for whole values.
fn number_from_f64(f: f64) -> Option<Number> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(Number::from(f as i64))
    } else {
        Number::from_f64(f)
    }
}
