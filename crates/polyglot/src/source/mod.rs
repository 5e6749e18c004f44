//! Configuration sources and the language loader built on them.

mod loader;
mod yaml;

pub use loader::{LanguageLoader, load_language_dir, load_language_file};
pub use yaml::YamlSource;

use crate::error::Error;
use crate::expander::{ExpanderSettings, RawTable, expand_variables};
use crate::language::Language;

/// Key of the language identifier entry.
pub const META_KEY: &str = "meta.key";
/// Key of the optional English language name.
pub const META_NAME_IN_ENGLISH: &str = "meta.nameInEnglish";
/// Key of the optional native language name.
pub const META_NAME_IN_LANGUAGE: &str = "meta.nameInLanguage";

const META_PREFIX: &str = "meta.";

/// A parsed configuration file, reduced to its string entries.
pub trait ConfigSource {
    /// Every key whose value is a plain string.
    fn string_keys(&self) -> Vec<String>;

    /// The string stored at `key`.
    fn string(&self, key: &str) -> Option<&str>;
}

impl ConfigSource for RawTable {
    fn string_keys(&self) -> Vec<String> {
        self.keys().cloned().collect()
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Build a [`Language`] from one source.
///
/// `meta.*` entries become the language metadata; `meta.key` is required.
/// Everything else is expanded with `settings` and becomes the translations.
///
/// ```
/// use polyglot::{language_from_source, ExpanderSettings, RawTable};
///
/// let mut table = RawTable::new();
/// table.insert("meta.key".into(), "EN".into());
/// table.insert("variables.server".into(), "Lobby".into());
/// table.insert("join".into(), "Welcome to ${server}".into());
///
/// let language = language_from_source(&table, &ExpanderSettings::default()).unwrap();
/// assert_eq!(language.key(), "en");
/// assert_eq!(language.translation("join"), Some("Welcome to Lobby"));
/// assert_eq!(language.len(), 1);
/// ```
pub fn language_from_source(
    source: &impl ConfigSource,
    settings: &ExpanderSettings,
) -> Result<Language, Error> {
    let key = source
        .string(META_KEY)
        .ok_or(Error::MissingMeta { key: META_KEY })?;

    let translations: RawTable = source
        .string_keys()
        .into_iter()
        .filter(|key| !key.starts_with(META_PREFIX))
        .filter_map(|key| {
            let value = source.string(&key)?.to_owned();
            Some((key, value))
        })
        .collect();

    Language::builder()
        .key(key)
        .translations(expand_variables(translations, settings))
        .maybe_name_in_english(source.string(META_NAME_IN_ENGLISH))
        .maybe_name_in_language(source.string(META_NAME_IN_LANGUAGE))
        .build()
}
