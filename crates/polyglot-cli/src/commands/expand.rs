//! Implementation of the `polyglot expand` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use polyglot::{Language, expand_references, load_language_file};

use crate::commands::ExpanderArgs;
use crate::output::load_error_report;

/// Arguments for the expand command.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Language file to expand (.yml)
    pub file: PathBuf,

    /// Also substitute references to other message keys
    #[arg(long)]
    pub references: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub expander: ExpanderArgs,
}

/// Run the expand command.
pub fn run_expand(args: ExpandArgs) -> Result<i32> {
    let settings = args.expander.settings()?;
    let mut language = load_language_file(&args.file, &settings).map_err(load_error_report)?;

    if args.references {
        let translations = expand_references(
            language.translations().clone(),
            settings.opening_delimiter(),
            settings.closing_delimiter(),
        )
        .into_diagnostic()?;
        language = Language::builder()
            .key(language.key())
            .translations(translations)
            .maybe_name_in_english(language.name_in_english())
            .maybe_name_in_language(language.name_in_language())
            .build()
            .into_diagnostic()?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&language).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    for (key, value) in language.translations() {
        println!(
            "{} = {}",
            key.if_supports_color(Stream::Stdout, |text| text.cyan()),
            value
        );
    }
    Ok(exitcode::OK)
}
