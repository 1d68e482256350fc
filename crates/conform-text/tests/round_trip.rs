//! Property test: any document this engine can produce survives a
//! format/parse round trip unchanged.

use proptest::prelude::*;
use serde_json::{Map, Value};

use conform_text::{format_document, parse_document};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        // Finite floats only; JSON has no NaN/inf.
        (-1e9f64..1e9f64).prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z0-9_./ -]{1,10}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_document() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-zA-Z0-9_.-]{1,12}", arb_value(), 0..5)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn format_then_parse_round_trips(doc in arb_document()) {
        for indent in [0usize, 2, 4] {
            let rendered = format_document(&doc, indent);
            let reparsed = parse_document(&rendered)
                .expect("formatter output must always parse");
            prop_assert_eq!(&reparsed, &doc);
        }
    }
}
