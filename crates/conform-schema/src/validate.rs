//! # Schema Validator
//!
//! Recursive validation of a value against a [`SchemaNode`], combining
//! exact-match checks, type checks with coercion, per-kind structural
//! checks, logical combinators, and conditionals into one aggregated
//! report.
//!
//! ## Step Order
//!
//! Each node runs a fixed sequence: deprecation warning, `const`, `enum`,
//! type check (with coercion on mismatch), structural checks on the
//! current — possibly coerced — value, combinators, then `if`/`then`/
//! `else`. Exact-match and type failures short-circuit; everything else
//! accumulates, and validity is the logical AND across every step that
//! ran.
//!
//! ## Coercion at this Layer
//!
//! The validator consults the coercion engine only for string inputs —
//! the shape raw config text produces. Non-string conversions (number to
//! string, number to boolean) remain available to direct callers of
//! [`crate::coerce`], but a number sitting where the schema wants a string
//! is reported, not silently stringified.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use conform_core::{ValueKind, ValuePath};

use crate::coerce::coerce;
use crate::constraints;
use crate::node::SchemaNode;
use crate::report::{ValidationReport, WarningKind};

/// Maximum schema/value nesting depth before validation reports a
/// depth-exceeded error instead of recursing further.
pub const MAX_DEPTH: usize = 64;

/// Validate a value against a schema, starting at the root path.
pub fn validate(value: &Value, schema: &SchemaNode) -> ValidationReport {
    validate_at(value, schema, ValuePath::root())
}

/// Validate a value against a schema at a caller-supplied path.
pub fn validate_at(value: &Value, schema: &SchemaNode, path: ValuePath) -> ValidationReport {
    validate_inner(value, schema, &path, 0)
}

/// Validate each keyed value against the schema of the same key and fold
/// the per-key reports together. Keys without a schema are skipped.
pub fn validate_batch(
    values: &Map<String, Value>,
    schemas: &BTreeMap<String, SchemaNode>,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    for (key, value) in values {
        if let Some(schema) = schemas.get(key) {
            report.merge(validate_at(value, schema, ValuePath::from_key(key)));
        }
    }
    report
}

pub(crate) fn validate_inner(
    value: &Value,
    schema: &SchemaNode,
    path: &ValuePath,
    depth: usize,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    if depth > MAX_DEPTH {
        report.push_error(
            path,
            format!("validation nesting exceeds the depth limit ({MAX_DEPTH})"),
            schema,
            value,
        );
        return report;
    }

    // Deprecation fires regardless of validity.
    if let Some(message) = &schema.deprecation_message {
        report.push_warning(path, message.clone(), WarningKind::Deprecation);
    }

    // Exact-match constraints short-circuit on violation: further checks
    // against a value already known to mismatch add nothing.
    if let Some(expected) = &schema.const_value {
        if value != expected {
            report.push_error(
                path,
                schema
                    .error_message
                    .clone()
                    .unwrap_or_else(|| format!("value must equal the constant {expected}")),
                schema,
                value,
            );
            return report;
        }
    }

    if let Some(allowed) = &schema.enum_values {
        if !allowed.contains(value) {
            report.push_error(
                path,
                schema.error_message.clone().unwrap_or_else(|| {
                    format!("value is not one of the {} allowed values", allowed.len())
                }),
                schema,
                value,
            );
            return report;
        }
    }

    // Type check with string-input coercion. On unrecoverable mismatch,
    // structural checks against the wrong shape are meaningless.
    let mut coerced: Option<Value> = None;
    if let Some(spec) = &schema.schema_type {
        if !spec.allows(value) {
            let attempt = if matches!(value, Value::String(_)) {
                Some(coerce(value, schema))
            } else {
                None
            };
            match attempt {
                Some(result) if result.success => {
                    report.push_warning(
                        path,
                        format!(
                            "value coerced from {} to {}",
                            ValueKind::of(value),
                            ValueKind::of(&result.value)
                        ),
                        WarningKind::Coercion,
                    );
                    coerced = Some(result.value);
                }
                _ => {
                    report.push_error(
                        path,
                        schema.error_message.clone().unwrap_or_else(|| {
                            format!("expected {}, got {}", spec.describe(), ValueKind::of(value))
                        }),
                        schema,
                        value,
                    );
                    return report;
                }
            }
        }
    }
    let current: &Value = coerced.as_ref().unwrap_or(value);

    // Structural checks dispatch on the current value's runtime kind.
    match current {
        Value::Number(n) => {
            report
                .errors
                .extend(constraints::check_number(n, schema, path));
        }
        Value::String(s) => {
            report
                .errors
                .extend(constraints::check_string(s, schema, path));
        }
        Value::Array(items) => {
            let sub = constraints::check_array(items, schema, path, depth);
            report.merge(sub);
        }
        Value::Object(object) => {
            let sub = constraints::check_object(object, schema, path, depth);
            report.merge(sub);
        }
        Value::Null | Value::Bool(_) => {}
    }

    apply_combinators(current, schema, path, depth, &mut report);

    if let Some(condition) = &schema.if_schema {
        let condition_met = validate_inner(current, condition, path, depth + 1).is_valid();
        let branch = if condition_met {
            &schema.then_schema
        } else {
            &schema.else_schema
        };
        if let Some(branch_schema) = branch {
            report.merge(validate_inner(current, branch_schema, path, depth + 1));
        }
    }

    // The report's coerced value may already hold a container rebuilt from
    // coerced children; otherwise surface the type-level coercion.
    if report.coerced_value.is_none() {
        report.coerced_value = coerced;
    }

    report
}

/// `anyOf`/`oneOf`/`allOf`/`not`, evaluated against the current value.
/// These run independently of the structural checks and can add errors on
/// top of a structurally-valid value.
fn apply_combinators(
    value: &Value,
    schema: &SchemaNode,
    path: &ValuePath,
    depth: usize,
    report: &mut ValidationReport,
) {
    if let Some(any_of) = &schema.any_of {
        // First success wins and its sub-result is adopted.
        let mut matched = None;
        for candidate in any_of.schemas() {
            let sub = validate_inner(value, candidate, path, depth + 1);
            if sub.is_valid() {
                matched = Some(sub);
                break;
            }
        }
        match matched {
            Some(sub) => report.merge(sub),
            None => report.push_error(
                path,
                format!(
                    "value does not match any of the {} alternatives",
                    any_of.len()
                ),
                schema,
                value,
            ),
        }
    }

    if let Some(one_of) = &schema.one_of {
        // Exclusivity requires evaluating every candidate.
        let subs: Vec<ValidationReport> = one_of
            .schemas()
            .into_iter()
            .map(|candidate| validate_inner(value, candidate, path, depth + 1))
            .collect();
        let mut matches = subs.into_iter().filter(|sub| sub.is_valid());
        match (matches.next(), matches.count()) {
            (Some(only), 0) => report.merge(only),
            (None, _) => report.push_error(
                path,
                format!(
                    "value matches none of the {} schemas, expected exactly one",
                    one_of.len()
                ),
                schema,
                value,
            ),
            (Some(_), extra) => report.push_error(
                path,
                format!(
                    "value matches {} schemas, expected exactly one",
                    extra + 1
                ),
                schema,
                value,
            ),
        }
    }

    if let Some(all_of) = &schema.all_of {
        // Errors accumulate from every failing operand.
        for candidate in all_of.schemas() {
            report.merge(validate_inner(value, candidate, path, depth + 1));
        }
    }

    if let Some(not_schema) = &schema.not {
        if validate_inner(value, not_schema, path, depth + 1).is_valid() {
            report.push_error(
                path,
                "value matches a schema it is required not to match",
                schema,
                value,
            );
        }
    }
}
