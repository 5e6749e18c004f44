//! Implementation of the `polyglot resolve` command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use polyglot::{ClientLocale, LanguageLookup, TargetsAndReplacements, Translator, split_lines};
use serde::Serialize;

use crate::commands::{ExpanderArgs, load_storage};

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Directory holding one YAML file per language
    #[arg(long)]
    pub dir: PathBuf,

    /// Message key to resolve
    #[arg(long)]
    pub key: String,

    /// Locale tag to resolve for (e.g., de_DE). Defaults to the default language
    #[arg(long)]
    pub locale: Option<String>,

    /// Language used when the locale is missing or not loaded
    #[arg(long, env = "POLYGLOT_DEFAULT_LANGUAGE", default_value = "en")]
    pub default_language: String,

    /// Replacements in target=replacement format (repeatable, applied in order)
    #[arg(short = 'r', long = "replace", value_parser = parse_key_val)]
    pub replacements: Vec<(String, String)>,

    /// Split the result into lines
    #[arg(long)]
    pub lines: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub expander: ExpanderArgs,
}

/// JSON output for a resolved message.
#[derive(Serialize)]
struct ResolveJson<'a> {
    language: &'a str,
    key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<String>>,
}

/// JSON output for a missing message.
#[derive(Serialize)]
struct MissingJson<'a> {
    error: String,
    suggestions: &'a [String],
}

/// Parse a target=replacement string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (target, replacement) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid replacement '{s}': expected target=replacement"))?;
    if target.is_empty() {
        return Err(format!("invalid replacement '{s}': the target cannot be empty"));
    }
    Ok((target.to_owned(), replacement.to_owned()))
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let storage = Arc::new(load_storage(&args.dir, &args.default_language, &args.expander)?);
    let translator = Translator::new(storage.clone(), Arc::new(ClientLocale));
    let replacements = TargetsAndReplacements::from_pairs(args.replacements);

    let Some(language) = storage.language(args.locale.as_deref()) else {
        return Err(miette::miette!("no languages loaded from {}", args.dir.display()));
    };
    let translation = translator.translation(args.key.as_str());
    let text = translation.resolve_in(args.locale.as_deref(), &replacements);

    let Some(text) = text else {
        let suggestions = language.similar_keys(&args.key);
        let error = format!("no message '{}' in language '{}'", args.key, language.key());
        if args.json {
            let output = MissingJson {
                error,
                suggestions: &suggestions,
            };
            eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
        } else {
            eprintln!("{error}");
            if !suggestions.is_empty() {
                eprintln!("did you mean: {}?", suggestions.join(", "));
            }
        }
        return Ok(exitcode::DATAERR);
    };

    let lines = args.lines.then(|| split_lines(&text));
    if args.json {
        let (text, lines) = match lines {
            Some(lines) => (None, Some(lines)),
            None => (Some(text), None),
        };
        let output = ResolveJson {
            language: language.key(),
            key: &args.key,
            text,
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if let Some(lines) = lines {
        for line in lines {
            println!("{line}");
        }
    } else {
        println!("{text}");
    }
    Ok(exitcode::OK)
}
