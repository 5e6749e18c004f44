//! Miette diagnostics for language loading errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan, miette};
use polyglot::{ErrorKind, LoadError};
use thiserror::Error;

/// A YAML syntax error pointing into the offending file.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(polyglot::syntax))]
pub struct YamlDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl YamlDiagnostic {
    /// Create a diagnostic from a 1-based line and column in `content`.
    pub fn new(path: &Path, content: String, line: usize, column: usize, message: String) -> Self {
        let offset = byte_offset(&content, line, column);
        YamlDiagnostic {
            src: NamedSource::new(path.display().to_string(), content),
            span: (offset, 1).into(),
            message,
            help: Some("language files are YAML mappings of message keys to strings".into()),
        }
    }
}

/// Byte offset of a 1-based line and column, clamped to `content`.
///
/// Line lengths include their terminator, so `\r\n` files do not drift.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum::<usize>()
        + column.saturating_sub(1);

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    offset.min(content.len())
}

/// Turn a [`LoadError`] into a report, with a source snippet for parse errors.
pub fn load_error_report(err: LoadError) -> Report {
    match err {
        LoadError::Parse {
            path,
            line: Some(line),
            column,
            message,
        } => match read_to_string(&path) {
            Ok(content) => YamlDiagnostic::new(&path, content, line, column.unwrap_or(1), message).into(),
            Err(_) => miette!("{}: {message}", path.display()),
        },
        other => {
            let help = match other.kind() {
                ErrorKind::InvalidArgument => "check the meta.key entries and the default language",
                ErrorKind::Unavailable => "check that the path exists and is readable",
            };
            miette!(help = help, "{other}")
        }
    }
}
