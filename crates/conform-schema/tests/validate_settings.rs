//! Integration test: validate a realistic settings document against a
//! nested schema, exercising type coercion, pattern properties,
//! combinators, and conditional branches together.

use std::collections::BTreeMap;

use serde_json::json;

use conform_schema::{
    schema_default, validate, validate_batch, SchemaNode, WarningKind,
};

fn editor_schema() -> SchemaNode {
    serde_json::from_value(json!({
        "type": "object",
        "properties": {
            "tabSize": {
                "type": "integer",
                "minimum": 1,
                "maximum": 16,
                "default": 4
            },
            "fontFamily": {"type": "string", "minLength": 1, "default": "monospace"},
            "rulers": {
                "type": "array",
                "items": {"type": "integer", "minimum": 0},
                "uniqueItems": true,
                "default": []
            },
            "wordWrap": {
                "enum": ["off", "on", "bounded"],
                "default": "off"
            },
            "fontSize": {
                "type": "number",
                "exclusiveMinimum": 0,
                "deprecationMessage": "fontSize is superseded by textScale"
            }
        },
        "patternProperties": {
            "^experimental\\.": {"type": "boolean"}
        },
        "additionalProperties": false
    }))
    .unwrap()
}

#[test]
fn test_valid_document_passes_clean() {
    let doc = json!({
        "tabSize": 2,
        "fontFamily": "Iosevka",
        "rulers": [80, 100],
        "wordWrap": "bounded",
        "experimental.ligatures": true
    });
    let report = validate(&doc, &editor_schema());
    assert!(report.is_valid(), "unexpected errors: {report}");
    assert!(report.warnings.is_empty());
    assert!(report.coerced_value.is_none());
}

#[test]
fn test_mixed_document_accumulates_located_diagnostics() {
    let doc = json!({
        "tabSize": "8",
        "fontFamily": "",
        "rulers": [80, 80],
        "wordWrap": "wrap",
        "fontSize": 14,
        "experimental.inline": "yes",
        "colorTheme": "sand"
    });
    let report = validate(&doc, &editor_schema());
    assert!(!report.is_valid());

    let error_paths: Vec<&str> = report.errors.iter().map(|e| e.path.as_str()).collect();
    assert!(error_paths.contains(&"fontFamily"), "empty string fails minLength");
    assert!(error_paths.contains(&"rulers"), "duplicate ruler fails uniqueItems");
    assert!(error_paths.contains(&"wordWrap"), "unlisted enum member");
    assert!(error_paths.contains(&"colorTheme"), "additional property rejected");

    // tabSize repaired, with the repair surfaced.
    let coercions: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::Coercion)
        .collect();
    assert_eq!(coercions.len(), 2, "tabSize and experimental.inline coerce");

    // fontSize use is flagged as deprecated even though the value is fine.
    assert!(report
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::Deprecation && w.path.as_str() == "fontSize"));

    let coerced = report.coerced_value.expect("document had coercions");
    assert_eq!(coerced["tabSize"], json!(8));
    assert_eq!(coerced["experimental.inline"], json!(true));
}

#[test]
fn test_conditional_schema_selects_branch() {
    let schema: SchemaNode = serde_json::from_value(json!({
        "type": "object",
        "properties": {"strategy": {"enum": ["fixed", "auto"]}},
        "if": {"properties": {"strategy": {"const": "fixed"}}, "required": ["strategy"]},
        "then": {"required": ["interval"]},
        "else": {"required": ["threshold"]}
    }))
    .unwrap();

    assert!(validate(&json!({"strategy": "fixed", "interval": 30}), &schema).is_valid());
    assert!(validate(&json!({"strategy": "auto", "threshold": 0.5}), &schema).is_valid());

    let report = validate(&json!({"strategy": "fixed"}), &schema);
    assert_eq!(report.errors.len(), 1);
    assert!(report.errors[0].message.contains("\"interval\""));
}

#[test]
fn test_batch_mirrors_per_key_validation() {
    let values = json!({
        "editor.tabSize": "3",
        "terminal.shell": "/bin/zsh",
        "workbench.sideBar": "left"
    });
    let mut schemas = BTreeMap::new();
    schemas.insert(
        "editor.tabSize".to_string(),
        serde_json::from_value(json!({"type": "integer", "minimum": 1})).unwrap(),
    );
    schemas.insert(
        "terminal.shell".to_string(),
        serde_json::from_value(json!({"type": "string", "pattern": "^/"})).unwrap(),
    );

    let report = validate_batch(values.as_object().unwrap(), &schemas);
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path.as_str(), "editor.tabSize");
}

#[test]
fn test_defaults_synthesized_from_schema_tree() {
    let defaults = schema_default(&editor_schema()).expect("object schema has defaults");
    assert_eq!(defaults["tabSize"], json!(4));
    assert_eq!(defaults["fontFamily"], json!("monospace"));
    assert_eq!(defaults["rulers"], json!([]));
    assert_eq!(defaults["wordWrap"], json!("off"));
    // fontSize has no default and is omitted.
    assert!(defaults.get("fontSize").is_none());
}

#[test]
fn test_engine_holds_no_state_between_calls() {
    let schema = editor_schema();
    let bad = json!({"tabSize": "not a size"});
    let good = json!({"tabSize": 4});

    let first = validate(&bad, &schema);
    let second = validate(&good, &schema);
    let third = validate(&bad, &schema);

    assert!(!first.is_valid());
    assert!(second.is_valid());
    assert_eq!(first.errors.len(), third.errors.len());
    assert_eq!(first.errors[0].message, third.errors[0].message);
}
