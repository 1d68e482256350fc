//! # Resilient Document Parser
//!
//! Parses JSON-like configuration text into a document, recovering from
//! the two mistakes hand-edited config files actually contain: comments
//! and trailing commas.
//!
//! ## Recovery Stages
//!
//! 1. Strict parse. The top level must be an object — scalars and arrays
//!    are rejected with a dedicated error.
//! 2. Strip `//` and `/* */` comments with a string-aware scanner, then
//!    re-parse. Comment markers inside quoted strings are left alone;
//!    both quote kinds toggle the in-string state and escaped quotes do
//!    not.
//! 3. Additionally strip commas trailing immediately before `}`/`]`, then
//!    re-parse.
//!
//! When every stage fails, the error reported is the one from the
//! original strict parse — diagnostics must point at the text the user
//! wrote, not at a rewritten intermediate. Stripped characters are
//! replaced with spaces (newlines preserved) so later-stage positions
//! stay meaningful.

use serde_json::{Map, Value};

use conform_core::ParseFailure;

/// A parsed configuration document: the top-level key/value mapping.
pub type Document = Map<String, Value>;

/// Parse configuration text into a document, applying staged recovery.
pub fn parse_document(text: &str) -> Result<Document, ParseFailure> {
    let original_failure = match parse_strict(text) {
        Ok(doc) => return Ok(doc),
        Err(failure) => failure,
    };

    let without_comments = strip_comments(text);
    if let Ok(doc) = parse_strict(&without_comments) {
        tracing::debug!("document recovered after comment stripping");
        return Ok(doc);
    }

    let without_commas = strip_trailing_commas(&without_comments);
    if let Ok(doc) = parse_strict(&without_commas) {
        tracing::debug!("document recovered after trailing-comma stripping");
        return Ok(doc);
    }

    Err(original_failure)
}

/// Strict parse requiring a top-level object.
fn parse_strict(text: &str) -> Result<Document, ParseFailure> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            // Locate the error at the first meaningful character.
            let offset = text.len() - text.trim_start().len();
            let (line, column) = line_col_at(text, offset);
            Err(ParseFailure {
                line,
                column,
                message: format!(
                    "top-level value must be an object, got {}",
                    kind_name(&other)
                ),
            })
        }
        Err(e) => Err(failure_from_serde(e)),
    }
}

fn kind_name(value: &Value) -> &'static str {
    conform_core::ValueKind::of(value).name()
}

/// serde_json reports line/column directly; pass them through and trim
/// the duplicated position suffix from the message.
fn failure_from_serde(e: serde_json::Error) -> ParseFailure {
    let rendered = e.to_string();
    let suffix = format!(" at line {} column {}", e.line(), e.column());
    let message = rendered
        .strip_suffix(&suffix)
        .unwrap_or(&rendered)
        .to_string();
    ParseFailure {
        line: e.line(),
        column: e.column(),
        message,
    }
}

/// Translate a character offset into a 1-indexed line/column pair by
/// scanning for newlines up to the offset.
fn line_col_at(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for (i, c) in text.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Blank out `//` and `/* */` comments, leaving strings intact and
/// preserving the text's line structure.
fn strip_comments(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match in_string {
            Some(quote) => {
                out.push(c);
                if c == '\\' && i + 1 < chars.len() {
                    // The escaped character cannot close the string.
                    out.push(chars[i + 1]);
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
            }
            None => {
                if c == '"' || c == '\'' {
                    in_string = Some(c);
                    out.push(c);
                    i += 1;
                } else if c == '/' && chars.get(i + 1) == Some(&'/') {
                    while i < chars.len() && chars[i] != '\n' {
                        out.push(' ');
                        i += 1;
                    }
                } else if c == '/' && chars.get(i + 1) == Some(&'*') {
                    out.push_str("  ");
                    i += 2;
                    while i < chars.len() {
                        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                            out.push_str("  ");
                            i += 2;
                            break;
                        }
                        out.push(if chars[i] == '\n' { '\n' } else { ' ' });
                        i += 1;
                    }
                } else {
                    out.push(c);
                    i += 1;
                }
            }
        }
    }

    out
}

/// Blank out commas whose next non-whitespace character closes a
/// container, leaving strings intact.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = chars.clone();
    let mut in_string: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match in_string {
            Some(quote) => {
                if c == '\\' {
                    i += 2;
                    continue;
                }
                if c == quote {
                    in_string = None;
                }
                i += 1;
            }
            None => {
                if c == '"' || c == '\'' {
                    in_string = Some(c);
                } else if c == ',' {
                    let mut j = i + 1;
                    while j < chars.len() && chars[j].is_whitespace() {
                        j += 1;
                    }
                    if matches!(chars.get(j), Some(&'}') | Some(&']')) {
                        out[i] = ' ';
                    }
                }
                i += 1;
            }
        }
    }

    out.into_iter().collect()
}
