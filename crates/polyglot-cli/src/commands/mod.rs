//! CLI command implementations.

mod coverage;
mod expand;
mod resolve;

use std::path::Path;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use polyglot::expander::{
    DEFAULT_CLOSING_DELIMITER, DEFAULT_OPENING_DELIMITER, DEFAULT_VARIABLE_PREFIX,
};
use polyglot::{ExpanderSettings, LanguageLoader, LanguageStorage};

use crate::output::load_error_report;

pub use coverage::{CoverageArgs, run_coverage};
pub use expand::{ExpandArgs, run_expand};
pub use resolve::{ResolveArgs, run_resolve};

/// Variable expansion options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct ExpanderArgs {
    /// Key prefix marking variable entries
    #[arg(long, env = "POLYGLOT_VARIABLE_PREFIX", default_value = DEFAULT_VARIABLE_PREFIX)]
    pub variable_prefix: String,

    /// Delimiter opening a variable reference
    #[arg(long, env = "POLYGLOT_OPENING_DELIMITER", default_value = DEFAULT_OPENING_DELIMITER)]
    pub opening_delimiter: String,

    /// Delimiter closing a variable reference
    #[arg(long, env = "POLYGLOT_CLOSING_DELIMITER", default_value = DEFAULT_CLOSING_DELIMITER)]
    pub closing_delimiter: String,
}

impl ExpanderArgs {
    pub fn settings(&self) -> Result<ExpanderSettings> {
        ExpanderSettings::builder()
            .variable_prefix(self.variable_prefix.as_str())
            .opening_delimiter(self.opening_delimiter.as_str())
            .closing_delimiter(self.closing_delimiter.as_str())
            .build()
            .into_diagnostic()
    }
}

/// Load every language of `dir` into a fresh storage.
fn load_storage(dir: &Path, default_language: &str, expander: &ExpanderArgs) -> Result<LanguageStorage> {
    let storage = LanguageStorage::new(default_language).into_diagnostic()?;
    LanguageLoader::builder()
        .dir(dir)
        .settings(expander.settings()?)
        .build()
        .load_into(&storage)
        .map_err(load_error_report)?;
    Ok(storage)
}
