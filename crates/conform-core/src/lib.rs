//! # conform-core — Foundational Types for the conform Engine
//!
//! This crate is the leaf of the workspace DAG. It defines the small set of
//! primitives every other crate builds on: the closed value-kind dispatch
//! enum, the locator-path newtype used in diagnostics, and the structured
//! error hierarchy for the engine's outer boundary.
//!
//! ## Key Design Principles
//!
//! 1. **Closed dispatch over runtime types.** [`ValueKind`] is a six-variant
//!    enum covering exactly the JSON value space. Checkers `match` on it
//!    exhaustively — adding a kind forces every consumer to handle it.
//!
//! 2. **Newtype for locator paths.** [`ValuePath`] builds the dotted/bracketed
//!    locators (`editor.tabSize`, `items[2].name`) that make diagnostics
//!    actionable. No bare string concatenation at call sites.
//!
//! 3. **Errors are values.** Validation outcomes are returned, never thrown.
//!    [`ConformError`] exists only for the outer boundary (file loading,
//!    document parsing) where `?` propagation is the right shape.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `conform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod path;
pub mod value;

pub use error::{ConformError, ParseFailure};
pub use path::ValuePath;
pub use value::ValueKind;
