//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used at the engine's outer boundary. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation outcomes are **values** (reports), not errors. Nothing in
//!   the validator signals failure through this hierarchy.
//! - Parse failures carry a 1-indexed line/column so editors can jump to
//!   the offending character.
//! - Load errors carry the path and a reason; a schema that cannot be
//!   loaded is distinct from a document that cannot be loaded.

use thiserror::Error;

/// Top-level error type for the conform engine's boundary.
#[derive(Error, Debug)]
pub enum ConformError {
    /// Source text could not be parsed, even after recovery.
    #[error("parse error: {0}")]
    Parse(#[from] ParseFailure),

    /// The document file could not be loaded.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The schema file could not be loaded or did not describe a schema.
    #[error("schema load error for '{path}': {reason}")]
    SchemaLoad {
        /// Path to the schema that failed to load.
        path: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },
}

/// A terminal parse failure, located in the source text.
///
/// `line` and `column` are 1-indexed. When every recovery stage fails,
/// the failure reported is the one from the original strict parse, not
/// from a rewritten intermediate text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}, column {column}: {message}")]
pub struct ParseFailure {
    /// 1-indexed line of the offending character.
    pub line: usize,
    /// 1-indexed column of the offending character.
    pub column: usize,
    /// Human-readable description of the failure.
    pub message: String,
}
