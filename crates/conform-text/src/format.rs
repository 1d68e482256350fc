//! # Document Formatter
//!
//! A stable pretty-printer for parsed documents. Output is strict JSON,
//! so `parse_document(format_document(doc, n)) == doc` for any document
//! this engine produces.

use serde_json::Value;

use crate::parse::Document;

/// Render a document as indented JSON text.
///
/// `indent` is the number of spaces per nesting level; `0` still breaks
/// lines but flattens indentation.
pub fn format_document(doc: &Document, indent: usize) -> String {
    let mut out = String::new();
    write_value(&mut out, &Value::Object(doc.clone()), indent, 0);
    out.push('\n');
    out
}

fn write_value(out: &mut String, value: &Value, indent: usize, level: usize) {
    match value {
        Value::Array(items) if !items.is_empty() => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, indent, level + 1);
                write_value(out, item, indent, level + 1);
            }
            out.push('\n');
            push_indent(out, indent, level);
            out.push(']');
        }
        Value::Object(map) if !map.is_empty() => {
            out.push('{');
            for (i, (key, child)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\n');
                push_indent(out, indent, level + 1);
                // Scalar rendering below handles key escaping too.
                write_value(out, &Value::String(key.clone()), indent, level + 1);
                out.push_str(": ");
                write_value(out, child, indent, level + 1);
            }
            out.push('\n');
            push_indent(out, indent, level);
            out.push('}');
        }
        Value::Array(_) => out.push_str("[]"),
        Value::Object(_) => out.push_str("{}"),
        // Scalars render as compact JSON, which escapes strings correctly.
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn push_indent(out: &mut String, indent: usize, level: usize) {
    for _ in 0..indent * level {
        out.push(' ');
    }
}
