//! # Fmt Subcommand
//!
//! Reformats a configuration document as clean, indented JSON. The input
//! goes through the resilient parser, so this also normalizes away
//! comments and trailing commas.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use conform_core::ConformError;
use conform_text::format_document;

use crate::{exit, load_document};

/// Arguments for the `conform fmt` subcommand.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to reformat.
    pub file: PathBuf,

    /// Spaces per indentation level.
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Rewrite the file in place instead of printing to stdout.
    #[arg(long)]
    pub write: bool,
}

/// Run `conform fmt`. Returns the process exit code.
pub fn run_fmt(args: &FmtArgs) -> Result<u8> {
    let document = match load_document(&args.file) {
        Ok(document) => document,
        Err(ConformError::Parse(failure)) => {
            eprintln!("{}: {failure}", args.file.display());
            return Ok(exit::PARSE_ERROR);
        }
        Err(other) => return Err(other.into()),
    };

    let rendered = format_document(&document, args.indent);
    if args.write {
        std::fs::write(&args.file, &rendered)
            .with_context(|| format!("cannot write {}", args.file.display()))?;
        tracing::debug!(file = %args.file.display(), "rewrote document");
    } else {
        print!("{rendered}");
    }
    Ok(exit::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_normalizes_comments_and_commas() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\n  // note\n  \"a\": 1,\n}").unwrap();

        let args = FmtArgs {
            file: file.path().to_path_buf(),
            indent: 2,
            write: true,
        };
        assert_eq!(run_fmt(&args).unwrap(), exit::OK);

        let rewritten = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(rewritten, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_unparseable_input_exits_two() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let args = FmtArgs {
            file: file.path().to_path_buf(),
            indent: 2,
            write: false,
        };
        assert_eq!(run_fmt(&args).unwrap(), exit::PARSE_ERROR);
    }
}
