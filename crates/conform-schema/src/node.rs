//! # Schema Nodes
//!
//! The recursive, immutable description of an expected value shape. A
//! [`SchemaNode`] is a plain data record with many independent optional
//! facets; every facet that is present contributes conjunctively to
//! validation. Nodes deserialize directly from JSON schema documents
//! (camelCase keys, `type`/`const`/`enum`/`if`/`else` handled via renames)
//! and are never mutated by the validator.
//!
//! Unknown schema keys are ignored on deserialization so vendor extensions
//! do not break loading.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use conform_core::value::is_integer;
use conform_core::ValueKind;

/// A type name allowed by a schema's `type` facet.
///
/// `Integer` is a refinement of `Number`: it matches any number whose
/// fractional part is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// Matches JSON strings.
    String,
    /// Matches any JSON number.
    Number,
    /// Matches whole JSON numbers (`2` and `2.0`, not `2.5`).
    Integer,
    /// Matches JSON booleans.
    Boolean,
    /// Matches JSON arrays.
    Array,
    /// Matches JSON objects.
    Object,
    /// Matches JSON null.
    Null,
}

impl SchemaType {
    /// Whether a value's runtime shape satisfies this type name.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            SchemaType::String => matches!(ValueKind::of(value), ValueKind::String),
            SchemaType::Number => matches!(ValueKind::of(value), ValueKind::Number),
            SchemaType::Integer => is_integer(value),
            SchemaType::Boolean => matches!(ValueKind::of(value), ValueKind::Boolean),
            SchemaType::Array => matches!(ValueKind::of(value), ValueKind::Array),
            SchemaType::Object => matches!(ValueKind::of(value), ValueKind::Object),
            SchemaType::Null => matches!(ValueKind::of(value), ValueKind::Null),
        }
    }

    /// The lowercase name as written in schemas.
    pub fn name(&self) -> &'static str {
        match self {
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::Array => "array",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The `type` facet: a single type name or a set of allowed names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// A single allowed type.
    One(SchemaType),
    /// Several allowed types; the value may match any of them.
    Many(Vec<SchemaType>),
}

impl TypeSpec {
    /// Whether the value's runtime type is among the allowed types.
    pub fn allows(&self, value: &Value) -> bool {
        match self {
            TypeSpec::One(t) => t.matches(value),
            TypeSpec::Many(ts) => ts.iter().any(|t| t.matches(value)),
        }
    }

    /// Whether a specific type name is listed.
    pub fn contains(&self, ty: SchemaType) -> bool {
        match self {
            TypeSpec::One(t) => *t == ty,
            TypeSpec::Many(ts) => ts.contains(&ty),
        }
    }

    /// The allowed names joined for diagnostics (`"number or string"`).
    pub fn describe(&self) -> String {
        match self {
            TypeSpec::One(t) => t.name().to_string(),
            TypeSpec::Many(ts) => {
                let names: Vec<&str> = ts.iter().map(SchemaType::name).collect();
                names.join(" or ")
            }
        }
    }
}

/// The `items` facet: one schema for every element, or a positional tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemsSpec {
    /// Every element is validated against this schema.
    Uniform(Box<SchemaNode>),
    /// Element `i` is validated against schema `i`. Elements beyond the
    /// tuple length are not validated.
    Tuple(Vec<SchemaNode>),
}

/// The `additionalProperties` facet: a blanket allow/deny, or a schema
/// applied to every property not covered by `properties` or
/// `patternProperties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` allows uncovered properties unchecked; `false` rejects them.
    Allowed(bool),
    /// Uncovered properties are validated against this schema.
    Schema(Box<SchemaNode>),
}

/// A combinator operand: a single schema or a list of schemas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaList {
    /// A single schema, treated as a one-element list.
    One(Box<SchemaNode>),
    /// An ordered list of schemas.
    Many(Vec<SchemaNode>),
}

impl SchemaList {
    /// The operand schemas, in order.
    pub fn schemas(&self) -> Vec<&SchemaNode> {
        match self {
            SchemaList::One(s) => vec![s.as_ref()],
            SchemaList::Many(list) => list.iter().collect(),
        }
    }

    /// Number of operand schemas.
    pub fn len(&self) -> usize {
        match self {
            SchemaList::One(_) => 1,
            SchemaList::Many(list) => list.len(),
        }
    }

    /// Whether the operand list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A recursive constraint description attached to a value position.
///
/// All facets are optional and additive: a node with no facets accepts
/// every value. Nodes are read-only during validation and have no identity
/// beyond structural equality.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaNode {
    /// Allowed runtime type(s).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSpec>,

    /// Exact-match constant.
    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_value: Option<Value>,

    /// Exact-match enumeration.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,

    // ---- numeric bounds ----
    /// Inclusive lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Strict lower bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    /// Strict upper bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    /// The value must be a multiple of this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_of: Option<f64>,

    // ---- string bounds ----
    /// Minimum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum length in characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression the string must match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Named semantic format (`email`, `uri`, `date`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // ---- array bounds ----
    /// Minimum number of elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    /// Maximum number of elements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Whether elements must be pairwise distinct (deep equality).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_items: Option<bool>,
    /// Element schema(s).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsSpec>,

    // ---- object shape ----
    /// Schemas for named properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, SchemaNode>>,
    /// Property names that must be present, checked in the order given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Policy for properties not covered by `properties`/`patternProperties`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Schemas keyed by a regular expression over property names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_properties: Option<BTreeMap<String, SchemaNode>>,

    // ---- combinators ----
    /// Valid if at least one operand matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any_of: Option<SchemaList>,
    /// Valid if exactly one operand matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_of: Option<SchemaList>,
    /// Valid if every operand matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_of: Option<SchemaList>,
    /// Valid if the operand does **not** match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<SchemaNode>>,

    // ---- conditional ----
    /// Condition schema selecting between `then` and `else`.
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub if_schema: Option<Box<SchemaNode>>,
    /// Applied when `if` matches.
    #[serde(rename = "then", skip_serializing_if = "Option::is_none")]
    pub then_schema: Option<Box<SchemaNode>>,
    /// Applied when `if` does not match.
    #[serde(rename = "else", skip_serializing_if = "Option::is_none")]
    pub else_schema: Option<Box<SchemaNode>>,

    // ---- metadata ----
    /// Default value used by [`crate::schema_default`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// When set, using the value emits a deprecation warning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
    /// Overrides the generated message for exact-match and type errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SchemaNode {
    /// Load a schema node from a JSON document.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_spec_single() {
        let node: SchemaNode = serde_json::from_value(json!({"type": "string"})).unwrap();
        let spec = node.schema_type.unwrap();
        assert!(spec.allows(&json!("hi")));
        assert!(!spec.allows(&json!(1)));
        assert_eq!(spec.describe(), "string");
    }

    #[test]
    fn test_type_spec_many() {
        let node: SchemaNode =
            serde_json::from_value(json!({"type": ["number", "null"]})).unwrap();
        let spec = node.schema_type.unwrap();
        assert!(spec.allows(&json!(3)));
        assert!(spec.allows(&json!(null)));
        assert!(!spec.allows(&json!("3")));
        assert_eq!(spec.describe(), "number or null");
    }

    #[test]
    fn test_integer_matches_whole_floats() {
        assert!(SchemaType::Integer.matches(&json!(2)));
        assert!(SchemaType::Integer.matches(&json!(2.0)));
        assert!(!SchemaType::Integer.matches(&json!(2.5)));
    }

    #[test]
    fn test_items_uniform_vs_tuple() {
        let uniform: SchemaNode =
            serde_json::from_value(json!({"items": {"type": "string"}})).unwrap();
        assert!(matches!(uniform.items, Some(ItemsSpec::Uniform(_))));

        let tuple: SchemaNode = serde_json::from_value(
            json!({"items": [{"type": "string"}, {"type": "number"}]}),
        )
        .unwrap();
        match tuple.items {
            Some(ItemsSpec::Tuple(ref schemas)) => assert_eq!(schemas.len(), 2),
            other => panic!("expected tuple items, got {other:?}"),
        }
    }

    #[test]
    fn test_additional_properties_forms() {
        let flag: SchemaNode =
            serde_json::from_value(json!({"additionalProperties": false})).unwrap();
        assert!(matches!(
            flag.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        ));

        let schema: SchemaNode = serde_json::from_value(
            json!({"additionalProperties": {"type": "string"}}),
        )
        .unwrap();
        assert!(matches!(
            schema.additional_properties,
            Some(AdditionalProperties::Schema(_))
        ));
    }

    #[test]
    fn test_combinator_single_schema_form() {
        let node: SchemaNode =
            serde_json::from_value(json!({"anyOf": {"type": "string"}})).unwrap();
        assert_eq!(node.any_of.unwrap().len(), 1);
    }

    #[test]
    fn test_if_then_else_keywords() {
        let node: SchemaNode = serde_json::from_value(json!({
            "if": {"const": "on"},
            "then": {"type": "string"},
            "else": {"type": "number"}
        }))
        .unwrap();
        assert!(node.if_schema.is_some());
        assert!(node.then_schema.is_some());
        assert!(node.else_schema.is_some());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let node: SchemaNode = serde_json::from_value(json!({
            "type": "string",
            "x-vendor-extension": {"anything": true}
        }))
        .unwrap();
        assert!(node.schema_type.is_some());
    }

    #[test]
    fn test_camel_case_keys() {
        let node: SchemaNode = serde_json::from_value(json!({
            "minLength": 1,
            "maxLength": 5,
            "deprecationMessage": "use newKey instead"
        }))
        .unwrap();
        assert_eq!(node.min_length, Some(1));
        assert_eq!(node.max_length, Some(5));
        assert!(node.deprecation_message.is_some());
    }

    #[test]
    fn test_structural_equality() {
        let a: SchemaNode = serde_json::from_value(json!({"type": "string"})).unwrap();
        let b: SchemaNode = serde_json::from_value(json!({"type": "string"})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialize_skips_absent_facets() {
        let node: SchemaNode = serde_json::from_value(json!({"type": "string"})).unwrap();
        let out = serde_json::to_value(&node).unwrap();
        assert_eq!(out, json!({"type": "string"}));
    }
}
