//! Coverage command implementation.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;

use crate::commands::{ExpanderArgs, load_storage};
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory holding one YAML file per language.
    #[arg(long)]
    pub dir: PathBuf,

    /// Language whose keys every other language is compared against.
    #[arg(long, env = "POLYGLOT_DEFAULT_LANGUAGE", default_value = "en")]
    pub default_language: String,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub expander: ExpanderArgs,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson<'a> {
    language: &'a str,
    translated: usize,
    total: usize,
    missing: &'a [String],
    extra: &'a [String],
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let storage = load_storage(&args.dir, &args.default_language, &args.expander)?;
    let languages = storage.snapshot();
    let source = languages
        .default_language()
        .ok_or_else(|| miette!("default language '{}' is not loaded", languages.default_key()))?;
    let source_count = source.len();

    let coverage_data: Vec<LanguageCoverage> = languages
        .iter()
        .filter(|language| language.key() != source.key())
        .map(|language| {
            let missing: Vec<String> = source
                .translations()
                .keys()
                .filter(|key| !language.contains(key))
                .cloned()
                .collect();
            let extra: Vec<String> = language
                .translations()
                .keys()
                .filter(|key| !source.contains(key))
                .cloned()
                .collect();
            LanguageCoverage {
                language: language.key().to_owned(),
                translated: source_count - missing.len(),
                missing,
                extra,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson<'_>> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: &c.language,
                translated: c.translated,
                total: source_count,
                missing: &c.missing,
                extra: &c.extra,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("Source: {} ({source_count} messages)", source.key());
        println!("{}", format_coverage_table(source_count, &coverage_data));

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
            if !lang_coverage.extra.is_empty() {
                println!("\nOnly in {}:", lang_coverage.language);
                for name in &lang_coverage.extra {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
