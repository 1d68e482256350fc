//! # conform-text — Resilient Configuration-Text Handling
//!
//! Turns hand-edited configuration text into documents and back. The
//! parser recovers from comments and trailing commas through staged
//! rewrites before giving up with a line/column-located error; the
//! formatter emits stable strict JSON that the parser round-trips.
//!
//! ## Crate Policy
//!
//! - No file or network I/O; callers hand in text and take back values.
//! - Parse failures are returned, never thrown, and always locate the
//!   error in the text the user wrote.

pub mod format;
pub mod parse;

pub use format::format_document;
pub use parse::{parse_document, Document};
