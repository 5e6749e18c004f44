//! Error types for expansion, lookup and loading.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Coarse classification shared by [`Error`] and [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was blank or malformed. Never retried.
    InvalidArgument,
    /// An external collaborator (file system, config parser) failed.
    Unavailable,
}

/// Argument validation failures, raised at construction or call time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An expander setting (prefix or delimiter) was empty or whitespace.
    #[error("the {name} cannot be blank")]
    BlankSetting { name: &'static str },

    /// A targets-and-replacements list had an odd number of entries.
    #[error("every target needs a replacement, got {len} entries")]
    UnpairedReplacement { len: usize },

    /// A new language set did not contain the configured default language.
    #[error("the new languages do not contain the default language '{default}'")]
    MissingDefaultLanguage { default: String },

    /// A default language was requested that is not among the loaded languages.
    #[error("language '{key}' is not loaded")]
    UnknownLanguage { key: String },

    /// A language key was empty or whitespace.
    #[error("the language key cannot be blank")]
    BlankLanguageKey,

    /// A configuration source lacks a required metadata entry.
    #[error("missing required '{key}' entry")]
    MissingMeta { key: &'static str },
}

impl Error {
    /// Every variant is an argument error; lookups that miss return `None` instead.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

/// Errors that occur while reading language files from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a language file or directory.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// YAML syntax error, with location when the parser reports one.
    #[error("{}: {message}", location(path, *line, *column))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        column: Option<usize>,
        message: String,
    },

    /// The file parsed but does not describe a valid language, or the
    /// loaded set was rejected.
    #[error("'{path}' is invalid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: Error,
    },

    /// The language directory path does not point at a directory.
    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Invalid { source, .. } => source.kind(),
            LoadError::Io { .. }
            | LoadError::Parse { .. }
            | LoadError::NotADirectory { .. } => ErrorKind::Unavailable,
        }
    }
}

fn location(path: &Path, line: Option<usize>, column: Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!("{}:{line}:{column}", path.display()),
        _ => path.display().to_string(),
    }
}
