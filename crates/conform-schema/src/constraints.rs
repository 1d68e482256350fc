//! # Primitive Constraint Checkers
//!
//! Per-kind constraint checks dispatched by the validator once a value's
//! runtime type is settled: numeric range/multiple rules, string
//! length/pattern/format rules, array length/uniqueness rules plus element
//! recursion, and object required/pattern/additional-property rules plus
//! property recursion.
//!
//! Checkers never fail. Constraint violations accumulate — one value can
//! collect several sibling violations in a single pass. A malformed regex
//! in the schema is reported as a schema-authoring error on `pattern` and
//! skipped (with a log) on `patternProperties`.

use regex::Regex;
use serde_json::{Map, Value};

use conform_core::ValuePath;

use crate::node::{AdditionalProperties, ItemsSpec, SchemaNode};
use crate::report::{ValidationError, ValidationReport};
use crate::validate::validate_inner;

/// Relative tolerance for `multipleOf` on floats. Exact remainder would
/// reject `0.3 multipleOf 0.1` due to binary representation.
const MULTIPLE_OF_TOLERANCE: f64 = 1e-9;

/// Numeric range and multiple constraints.
pub(crate) fn check_number(
    number: &serde_json::Number,
    schema: &SchemaNode,
    path: &ValuePath,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(n) = number.as_f64() else {
        return errors;
    };
    let value = Value::Number(number.clone());

    let mut push = |message: String| {
        errors.push(ValidationError {
            path: path.clone(),
            message,
            schema: schema.clone(),
            value: value.clone(),
        });
    };

    if let Some(min) = schema.minimum {
        if n < min {
            push(format!("value {n} is less than the minimum {min}"));
        }
    }
    if let Some(max) = schema.maximum {
        if n > max {
            push(format!("value {n} exceeds the maximum {max}"));
        }
    }
    if let Some(min) = schema.exclusive_minimum {
        if n <= min {
            push(format!("value {n} must be strictly greater than {min}"));
        }
    }
    if let Some(max) = schema.exclusive_maximum {
        if n >= max {
            push(format!("value {n} must be strictly less than {max}"));
        }
    }
    if let Some(multiple) = schema.multiple_of {
        if violates_multiple_of(n, multiple) {
            push(format!("value {n} is not a multiple of {multiple}"));
        }
    }

    errors
}

/// Epsilon-tolerant multiple check so intended float multiples pass.
fn violates_multiple_of(value: f64, multiple: f64) -> bool {
    if multiple == 0.0 || !multiple.is_finite() {
        return false;
    }
    let ratio = value / multiple;
    (ratio - ratio.round()).abs() > MULTIPLE_OF_TOLERANCE * ratio.abs().max(1.0)
}

/// String length, pattern, and format constraints.
pub(crate) fn check_string(
    string: &str,
    schema: &SchemaNode,
    path: &ValuePath,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let value = Value::String(string.to_string());
    let length = string.chars().count();

    let mut push = |message: String| {
        errors.push(ValidationError {
            path: path.clone(),
            message,
            schema: schema.clone(),
            value: value.clone(),
        });
    };

    if let Some(min) = schema.min_length {
        if length < min {
            push(format!(
                "string is {length} characters, shorter than the minimum {min}"
            ));
        }
    }
    if let Some(max) = schema.max_length {
        if length > max {
            push(format!(
                "string is {length} characters, longer than the maximum {max}"
            ));
        }
    }
    if let Some(pattern) = &schema.pattern {
        // Compiled fresh per check; the engine holds no caches.
        match Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(string) {
                    push(format!("string does not match pattern {pattern:?}"));
                }
            }
            Err(_) => {
                tracing::warn!(%pattern, "schema pattern does not compile");
                push(format!(
                    "schema pattern {pattern:?} is not a valid regular expression"
                ));
            }
        }
    }
    if let Some(format) = &schema.format {
        if !crate::format::validate_format(format, string) {
            push(format!("string is not a valid {format}"));
        }
    }

    errors
}

/// Array length and uniqueness constraints, plus element recursion.
///
/// With uniform `items`, every element is validated. With tuple `items`,
/// element `i` is validated against schema `i`; trailing elements beyond
/// the tuple length are not validated.
pub(crate) fn check_array(
    items: &[Value],
    schema: &SchemaNode,
    path: &ValuePath,
    depth: usize,
) -> ValidationReport {
    let mut report = ValidationReport::new();
    let count = items.len();

    if let Some(min) = schema.min_items {
        if count < min {
            report.push_error(
                path,
                format!("array has {count} items, fewer than the minimum {min}"),
                schema,
                &Value::Array(items.to_vec()),
            );
        }
    }
    if let Some(max) = schema.max_items {
        if count > max {
            report.push_error(
                path,
                format!("array has {count} items, more than the maximum {max}"),
                schema,
                &Value::Array(items.to_vec()),
            );
        }
    }
    if schema.unique_items == Some(true) {
        // Deep equality; the scan stops at the first duplicate found.
        'scan: for i in 1..count {
            for j in 0..i {
                if items[i] == items[j] {
                    report.push_error(
                        path,
                        format!("array items are not unique (index {i} repeats index {j})"),
                        schema,
                        &items[i],
                    );
                    break 'scan;
                }
            }
        }
    }

    if let Some(items_spec) = &schema.items {
        let mut rebuilt = items.to_vec();
        let mut changed = false;
        match items_spec {
            ItemsSpec::Uniform(element_schema) => {
                for (i, element) in items.iter().enumerate() {
                    let child = validate_inner(element, element_schema, &path.index(i), depth + 1);
                    changed |= absorb_child(&mut report, child, &mut rebuilt[i]);
                }
            }
            ItemsSpec::Tuple(schemas) => {
                for (i, element_schema) in schemas.iter().enumerate().take(items.len()) {
                    let child = validate_inner(&items[i], element_schema, &path.index(i), depth + 1);
                    changed |= absorb_child(&mut report, child, &mut rebuilt[i]);
                }
            }
        }
        if changed {
            report.coerced_value = Some(Value::Array(rebuilt));
        }
    }

    report
}

/// Object required/pattern/additional-property constraints, plus property
/// recursion.
pub(crate) fn check_object(
    object: &Map<String, Value>,
    schema: &SchemaNode,
    path: &ValuePath,
    depth: usize,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    // Missing-key errors in the order the schema lists them.
    if let Some(required) = &schema.required {
        for name in required {
            if !object.contains_key(name) {
                report.push_error(
                    path,
                    format!("missing required property {name:?}"),
                    schema,
                    &Value::Object(object.clone()),
                );
            }
        }
    }

    let mut rebuilt = object.clone();
    let mut changed = false;

    if let Some(properties) = &schema.properties {
        for (key, property_schema) in properties {
            if let Some(child_value) = object.get(key) {
                let child = validate_inner(child_value, property_schema, &path.key(key), depth + 1);
                if let Some(slot) = rebuilt.get_mut(key) {
                    changed |= absorb_child(&mut report, child, slot);
                }
            }
        }
    }

    // A key matching several patterns is validated against each matching
    // schema; coercions chain through the rebuilt value.
    if let Some(pattern_properties) = &schema.pattern_properties {
        for (pattern, pattern_schema) in pattern_properties {
            let re = match Regex::new(pattern) {
                Ok(re) => re,
                Err(_) => {
                    tracing::warn!(%pattern, "patternProperties key does not compile; skipped");
                    continue;
                }
            };
            for (key, _) in object.iter().filter(|(key, _)| re.is_match(key)) {
                let Some(slot) = rebuilt.get_mut(key) else {
                    continue;
                };
                let child = validate_inner(&slot.clone(), pattern_schema, &path.key(key), depth + 1);
                changed |= absorb_child(&mut report, child, slot);
            }
        }
    }

    if let Some(additional) = &schema.additional_properties {
        for (key, child_value) in object {
            if is_covered(key, schema) {
                continue;
            }
            match additional {
                AdditionalProperties::Allowed(false) => {
                    report.push_error(
                        &path.key(key),
                        format!("property {key:?} is not allowed"),
                        schema,
                        child_value,
                    );
                }
                AdditionalProperties::Allowed(true) => {}
                AdditionalProperties::Schema(additional_schema) => {
                    let child =
                        validate_inner(child_value, additional_schema, &path.key(key), depth + 1);
                    if let Some(slot) = rebuilt.get_mut(key) {
                        changed |= absorb_child(&mut report, child, slot);
                    }
                }
            }
        }
    }

    if changed {
        report.coerced_value = Some(Value::Object(rebuilt));
    }

    report
}

/// Whether an object key is claimed by `properties` or a compiling
/// `patternProperties` pattern.
fn is_covered(key: &str, schema: &SchemaNode) -> bool {
    if schema
        .properties
        .as_ref()
        .is_some_and(|props| props.contains_key(key))
    {
        return true;
    }
    schema.pattern_properties.as_ref().is_some_and(|patterns| {
        patterns
            .keys()
            .any(|pattern| Regex::new(pattern).is_ok_and(|re| re.is_match(key)))
    })
}

/// Merge a child report into the parent, writing the child's coerced value
/// (if any) into the parent's rebuilt slot. Returns whether the slot changed.
fn absorb_child(report: &mut ValidationReport, mut child: ValidationReport, slot: &mut Value) -> bool {
    let coerced = child.coerced_value.take();
    report.errors.append(&mut child.errors);
    report.warnings.append(&mut child.warnings);
    match coerced {
        Some(value) => {
            *slot = value;
            true
        }
        None => false,
    }
}
