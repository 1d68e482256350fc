//! # Schema Defaults
//!
//! Synthesizes a default value from a schema: an explicit `default` wins;
//! otherwise object schemas assemble defaults from their properties and
//! array schemas fall back to an empty array.

use serde_json::{Map, Value};

use crate::node::{SchemaNode, SchemaType};

/// Build the default value a schema describes, if any.
///
/// - An explicit `default` is returned as-is.
/// - An object schema (by `type` or by having `properties`) synthesizes an
///   object from each property's recursive default, omitting properties
///   with none.
/// - An array schema with no explicit default yields `[]`.
/// - Anything else has no default.
pub fn schema_default(schema: &SchemaNode) -> Option<Value> {
    if let Some(default) = &schema.default {
        return Some(default.clone());
    }

    let is_object = schema
        .schema_type
        .as_ref()
        .is_some_and(|spec| spec.contains(SchemaType::Object))
        || schema.properties.is_some();
    if is_object {
        let mut object = Map::new();
        if let Some(properties) = &schema.properties {
            for (key, property_schema) in properties {
                if let Some(child_default) = schema_default(property_schema) {
                    object.insert(key.clone(), child_default);
                }
            }
        }
        return Some(Value::Object(object));
    }

    if schema
        .schema_type
        .as_ref()
        .is_some_and(|spec| spec.contains(SchemaType::Array))
    {
        return Some(Value::Array(Vec::new()));
    }

    None
}
