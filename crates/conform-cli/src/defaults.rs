//! # Defaults Subcommand
//!
//! Prints the default document a schema describes, assembled from nested
//! property defaults.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde_json::Value;

use conform_schema::schema_default;
use conform_text::format_document;

use crate::{exit, load_schema_document, schema_from_document};

/// Arguments for the `conform defaults` subcommand.
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Schema file to read defaults from.
    pub schema: PathBuf,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = 2)]
    pub indent: usize,
}

/// Run `conform defaults`. Returns the process exit code.
pub fn run_defaults(args: &DefaultsArgs) -> Result<u8> {
    let schema_doc = load_schema_document(&args.schema)?;
    let schema = schema_from_document(schema_doc, &args.schema)?;

    match schema_default(&schema) {
        Some(Value::Object(map)) => print!("{}", format_document(&map, args.indent)),
        Some(other) => println!("{other}"),
        None => bail!(
            "schema {} defines no default value",
            args.schema.display()
        ),
    }
    Ok(exit::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_object_defaults_exit_zero() {
        let schema = temp_file(
            r#"{"type": "object", "properties": {"tabSize": {"default": 4}}}"#,
        );
        let args = DefaultsArgs {
            schema: schema.path().to_path_buf(),
            indent: 2,
        };
        assert_eq!(run_defaults(&args).unwrap(), exit::OK);
    }

    #[test]
    fn test_schema_without_defaults_is_an_error() {
        let schema = temp_file(r#"{"type": "string"}"#);
        let args = DefaultsArgs {
            schema: schema.path().to_path_buf(),
            indent: 2,
        };
        assert!(run_defaults(&args).is_err());
    }
}
