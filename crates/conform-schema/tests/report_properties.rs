//! Property tests for validation-report merging: associativity,
//! AND-composition of validity, and order preservation.

use proptest::prelude::*;
use serde_json::{json, Value};

use conform_schema::{
    SchemaNode, ValidationError, ValidationReport, ValidationWarning, ValuePath, WarningKind,
};

fn arb_path() -> impl Strategy<Value = ValuePath> {
    prop_oneof![
        Just(ValuePath::root()),
        "[a-z]{1,8}(\\.[a-z]{1,8}){0,2}".prop_map(|s| ValuePath::from(s.as_str())),
    ]
}

fn arb_error() -> impl Strategy<Value = ValidationError> {
    (arb_path(), "[a-z ]{1,20}").prop_map(|(path, message)| ValidationError {
        path,
        message,
        schema: SchemaNode::default(),
        value: Value::Null,
    })
}

fn arb_warning() -> impl Strategy<Value = ValidationWarning> {
    let kind = prop_oneof![
        Just(WarningKind::Deprecation),
        Just(WarningKind::Coercion),
        Just(WarningKind::Info),
    ];
    (arb_path(), "[a-z ]{1,20}", kind).prop_map(|(path, message, kind)| ValidationWarning {
        path,
        message,
        kind,
    })
}

fn arb_report() -> impl Strategy<Value = ValidationReport> {
    (
        prop::collection::vec(arb_error(), 0..4),
        prop::collection::vec(arb_warning(), 0..4),
        prop_oneof![Just(None), Just(Some(json!(1))), Just(Some(json!("x")))],
    )
        .prop_map(|(errors, warnings, coerced_value)| ValidationReport {
            errors,
            warnings,
            coerced_value,
        })
}

proptest! {
    #[test]
    fn merge_is_associative(a in arb_report(), b in arb_report(), c in arb_report()) {
        let mut left_first = a.clone();
        left_first.merge(b.clone());
        left_first.merge(c.clone());

        let mut bc = b;
        bc.merge(c);
        let mut right_first = a;
        right_first.merge(bc);

        prop_assert_eq!(left_first, right_first);
    }

    #[test]
    fn merged_validity_is_logical_and(a in arb_report(), b in arb_report()) {
        let expected = a.is_valid() && b.is_valid();
        let mut merged = a;
        merged.merge(b);
        prop_assert_eq!(merged.is_valid(), expected);
    }

    #[test]
    fn merge_preserves_error_order(a in arb_report(), b in arb_report()) {
        let mut expected: Vec<String> = a.errors.iter().map(|e| e.message.clone()).collect();
        expected.extend(b.errors.iter().map(|e| e.message.clone()));

        let mut merged = a;
        merged.merge(b);
        let actual: Vec<String> = merged.errors.iter().map(|e| e.message.clone()).collect();
        prop_assert_eq!(actual, expected);
    }
}
