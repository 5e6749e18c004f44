//! Load-time variable expansion over a whole language table.
//!
//! Entries whose key starts with the variable prefix are variables. Their
//! token (`opening + name + closing`) is replaced by their value in every
//! other entry, after which the variable entries are dropped. Expansion is a
//! single pass: variable values are never expanded themselves, so a variable
//! referencing another variable keeps that token verbatim unless a later
//! pass over the output happens to match it.

mod settings;

use std::collections::BTreeMap;

use tracing::debug;

pub use settings::{
    DEFAULT_CLOSING_DELIMITER, DEFAULT_OPENING_DELIMITER, DEFAULT_VARIABLE_PREFIX,
    ExpanderSettings,
};

use crate::error::Error;
use settings::require_non_blank;

/// A flat key to string mapping read from one configuration source.
///
/// Ordered so that expansion order, and therefore its output, is reproducible.
pub type RawTable = BTreeMap<String, String>;

/// Validate the three strings and expand `table`.
///
/// # Example
///
/// ```
/// use polyglot::{expand, RawTable};
///
/// let mut table = RawTable::new();
/// table.insert("variable.name".into(), "Bob".into());
/// table.insert("greeting".into(), "Hello ${name}".into());
///
/// let expanded = expand(table, "${", "}", "variable.").unwrap();
/// assert_eq!(expanded.len(), 1);
/// assert_eq!(expanded["greeting"], "Hello Bob");
/// ```
pub fn expand(
    table: RawTable,
    opening: &str,
    closing: &str,
    variable_prefix: &str,
) -> Result<RawTable, Error> {
    let settings = ExpanderSettings::builder()
        .variable_prefix(variable_prefix)
        .opening_delimiter(opening)
        .closing_delimiter(closing)
        .build()?;
    Ok(expand_variables(table, &settings))
}

/// Expand every variable of `table` into its remaining entries.
///
/// Variable names are the key with the prefix stripped, lower-cased.
/// Variables are applied in key order, each one to the output as left by the
/// previous one.
pub fn expand_variables(table: RawTable, settings: &ExpanderSettings) -> RawTable {
    let prefix = settings.variable_prefix();
    let (variables, mut output): (RawTable, RawTable) = table
        .into_iter()
        .partition(|(key, _)| key.starts_with(prefix));

    for (key, value) in &variables {
        let token = settings.token(&key[prefix.len()..].to_lowercase());
        replace_in_values(&mut output, &token, value, None);
    }

    debug!(
        variables = variables.len(),
        entries = output.len(),
        "expanded language table"
    );
    output
}

/// Treat every entry as a variable named by its full key.
///
/// Each entry's token is replaced in all other entries, never in itself.
/// Entries are visited in key order and each contributes its value as it
/// stands at that moment, so earlier substitutions flow into later
/// replacements. Nothing is removed.
///
/// # Example
///
/// ```
/// use polyglot::{expand_references, RawTable};
///
/// let mut table = RawTable::new();
/// table.insert("brand".into(), "Polyglot".into());
/// table.insert("title".into(), "Welcome to <brand>".into());
///
/// let expanded = expand_references(table, "<", ">").unwrap();
/// assert_eq!(expanded["title"], "Welcome to Polyglot");
/// assert_eq!(expanded["brand"], "Polyglot");
/// ```
pub fn expand_references(
    mut table: RawTable,
    opening: &str,
    closing: &str,
) -> Result<RawTable, Error> {
    require_non_blank("opening delimiter", opening)?;
    require_non_blank("closing delimiter", closing)?;

    let keys: Vec<String> = table.keys().cloned().collect();
    for key in &keys {
        let Some(replacement) = table.get(key).cloned() else {
            continue;
        };
        let token = format!("{opening}{key}{closing}");
        replace_in_values(&mut table, &token, &replacement, Some(key));
    }
    Ok(table)
}

fn replace_in_values(table: &mut RawTable, token: &str, replacement: &str, skip: Option<&str>) {
    for (key, value) in table.iter_mut() {
        if skip == Some(key.as_str()) || !value.contains(token) {
            continue;
        }
        *value = value.replace(token, replacement);
    }
}
