//! # conform-cli — Command-Line Interface for the conform Engine
//!
//! Wraps the engine crates behind a `conform` binary. This crate owns all
//! file I/O; the engine itself never touches the filesystem.
//!
//! ## Subcommands
//!
//! - `check` — Validate a configuration document against a schema.
//! - `fmt` — Reformat a (possibly commented) document as clean JSON.
//! - `defaults` — Print the default document a schema describes.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from handlers.
//! - Handler functions delegate to the engine crates — no validation
//!   logic here.
//! - Handlers return process exit codes so behavior is testable without
//!   spawning the binary.

use std::path::Path;

use conform_core::ConformError;
use conform_schema::SchemaNode;
use conform_text::{parse_document, Document};

pub mod check;
pub mod defaults;
pub mod fmt;

/// Process exit codes for the `conform` binary.
pub mod exit {
    /// The operation succeeded; a checked document is valid.
    pub const OK: u8 = 0;
    /// The document failed validation.
    pub const INVALID: u8 = 1;
    /// The document could not be parsed, even after recovery.
    pub const PARSE_ERROR: u8 = 2;
}

/// Read and parse a document file, with recovery for comments and
/// trailing commas. A parse failure surfaces as `ConformError::Parse` so
/// callers can map it to its dedicated exit code.
pub(crate) fn load_document(path: &Path) -> Result<Document, ConformError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConformError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;
    Ok(parse_document(&text)?)
}

/// Load a schema file. Schema documents are parsed with the same
/// resilient parser as config documents, so they may carry comments too.
pub(crate) fn load_schema_document(path: &Path) -> Result<Document, ConformError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConformError::SchemaLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;
    parse_document(&text).map_err(|failure| ConformError::SchemaLoad {
        path: path.display().to_string(),
        reason: failure.to_string(),
    })
}

/// Deserialize one schema node from a parsed schema document.
pub(crate) fn schema_from_document(
    doc: Document,
    path: &Path,
) -> Result<SchemaNode, ConformError> {
    SchemaNode::from_value(serde_json::Value::Object(doc)).map_err(|e| {
        ConformError::SchemaLoad {
            path: path.display().to_string(),
            reason: format!("not a schema node: {e}"),
        }
    })
}
