//! # Validation Reports
//!
//! Structured validation outcomes. A [`ValidationReport`] accumulates
//! errors and warnings in traversal order; validity is derived from the
//! error list, so `valid == errors.is_empty()` holds by construction.
//!
//! Reports merge associatively: merging appends the other report's errors
//! and warnings in order and adopts its coerced value when present. Tests
//! can therefore assert exact diagnostic sequences.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use conform_core::ValuePath;

use crate::node::SchemaNode;

/// A single validation failure, located in the value under validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Locator of the offending value (`editor.tabSize`, `items[2].name`).
    pub path: ValuePath,
    /// Human-readable description of the violation.
    pub message: String,
    /// The schema node that produced the error.
    pub schema: SchemaNode,
    /// The offending value, unmodified.
    pub value: Value,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// The class of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    /// The schema marks this position as deprecated.
    Deprecation,
    /// The value was type-coerced to satisfy the schema.
    Coercion,
    /// Informational note.
    Info,
}

/// A non-fatal diagnostic attached to a value position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// Locator of the value the warning refers to.
    pub path: ValuePath,
    /// Human-readable description.
    pub message: String,
    /// Warning class.
    pub kind: WarningKind,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// The aggregated outcome of validating one value against one schema.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationReport {
    /// Failures, in traversal order. Empty means valid.
    pub errors: Vec<ValidationError>,
    /// Non-fatal diagnostics, in traversal order.
    pub warnings: Vec<ValidationWarning>,
    /// Set when the value used for validation differs from the caller's
    /// input (a coercion happened somewhere in the traversal).
    pub coerced_value: Option<Value>,
}

impl ValidationReport {
    /// An empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the validated value is acceptable.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Append an error.
    pub fn push_error(
        &mut self,
        path: &ValuePath,
        message: impl Into<String>,
        schema: &SchemaNode,
        value: &Value,
    ) {
        self.errors.push(ValidationError {
            path: path.clone(),
            message: message.into(),
            schema: schema.clone(),
            value: value.clone(),
        });
    }

    /// Append a warning.
    pub fn push_warning(&mut self, path: &ValuePath, message: impl Into<String>, kind: WarningKind) {
        self.warnings.push(ValidationWarning {
            path: path.clone(),
            message: message.into(),
            kind,
        });
    }

    /// Fold another report into this one.
    ///
    /// Errors and warnings are appended in order; the other report's
    /// coerced value, when present, replaces this one's. The operation is
    /// associative, and the merged report is valid iff both inputs are.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        if other.coerced_value.is_some() {
            self.coerced_value = other.coerced_value;
        }
    }
}

// Serialized by hand so the wire form carries the derived `valid` flag
// alongside the lists, matching the consumer-facing result shape.
impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationReport", 4)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("warnings", &self.warnings)?;
        state.serialize_field("coercedValue", &self.coerced_value)?;
        state.end()
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}
