//! # Check Subcommand
//!
//! Validates a configuration document against a schema file. With
//! `--key-schemas` the schema file is a map from top-level document key
//! to schema, and each key is validated independently; unknown keys are
//! left alone.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use conform_core::ConformError;
use conform_schema::{validate, validate_batch, SchemaNode, ValidationReport};

use crate::{exit, load_document, load_schema_document, schema_from_document};

/// Arguments for the `conform check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Configuration document to validate (comments and trailing commas
    /// are tolerated).
    pub file: PathBuf,

    /// Schema file to validate against.
    #[arg(long)]
    pub schema: PathBuf,

    /// Treat the schema file as a map of top-level key to schema.
    #[arg(long)]
    pub key_schemas: bool,

    /// Emit the full validation report as JSON on stdout.
    #[arg(long)]
    pub json: bool,
}

/// Run `conform check`. Returns the process exit code.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let document = match load_document(&args.file) {
        Ok(document) => document,
        Err(ConformError::Parse(failure)) => {
            eprintln!("{}: {failure}", args.file.display());
            return Ok(exit::PARSE_ERROR);
        }
        Err(other) => return Err(other.into()),
    };

    let report = check_document(&document, args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(args, &report);
    }

    Ok(if report.is_valid() {
        exit::OK
    } else {
        exit::INVALID
    })
}

fn check_document(document: &conform_text::Document, args: &CheckArgs) -> Result<ValidationReport> {
    let schema_doc = load_schema_document(&args.schema)?;

    if args.key_schemas {
        let schemas = schema_doc
            .into_iter()
            .map(|(key, value)| {
                SchemaNode::from_value(value)
                    .map(|schema| (key.clone(), schema))
                    .with_context(|| format!("schema for key {key:?} is malformed"))
            })
            .collect::<Result<BTreeMap<String, SchemaNode>>>()?;
        tracing::debug!(keys = schemas.len(), "validating per-key");
        Ok(validate_batch(document, &schemas))
    } else {
        let schema = schema_from_document(schema_doc, &args.schema)?;
        Ok(validate(&Value::Object(document.clone()), &schema))
    }
}

fn render_report(args: &CheckArgs, report: &ValidationReport) {
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    if report.is_valid() {
        println!("{}: OK", args.file.display());
    } else {
        println!(
            "{}: {} error(s)",
            args.file.display(),
            report.errors.len()
        );
        println!("{report}");
    }
}
