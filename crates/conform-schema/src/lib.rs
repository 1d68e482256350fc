//! # conform-schema — Schema Validation & Coercion Engine
//!
//! Validates structured values against recursive [`SchemaNode`]
//! descriptions, reimplementing a working subset of JSON-Schema semantics:
//! type constraints, numeric/string/array/object constraints,
//! enumerations, the `anyOf`/`oneOf`/`allOf`/`not` combinators,
//! `if`/`then`/`else` conditionals, and pattern-keyed properties — plus a
//! parallel coercion layer that repairs type mismatches and surfaces every
//! repair as a warning.
//!
//! ## Entry Points
//!
//! - [`validate`] / [`validate_at`] — one value against one schema.
//! - [`validate_batch`] — a keyed document against per-key schemas.
//! - [`coerce`] — standalone best-effort type conversion.
//! - [`schema_default`] — synthesize a default value from a schema.
//! - [`validate_format`] — named semantic string formats.
//!
//! ## Crate Policy
//!
//! - Every call is a pure function of its inputs: no caches, no I/O, no
//!   process-wide state. Concurrent use is safe by construction.
//! - Validation outcomes are returned values; nothing here panics on bad
//!   schemas or bad documents. A schema-authoring mistake (say, a regex
//!   that does not compile) degrades to a reported error or a logged
//!   no-op.
//! - No `$ref` resolution and no remote schemas.

pub mod coerce;
pub mod constraints;
pub mod default;
pub mod format;
pub mod node;
pub mod report;
pub mod validate;

pub use coerce::{coerce, Coercion};
pub use conform_core::{ValueKind, ValuePath};
pub use default::schema_default;
pub use format::validate_format;
pub use node::{AdditionalProperties, ItemsSpec, SchemaList, SchemaNode, SchemaType, TypeSpec};
pub use report::{ValidationError, ValidationReport, ValidationWarning, WarningKind};
pub use validate::{validate, validate_at, validate_batch, MAX_DEPTH};
