//! A single loaded language.

use bon::bon;
use serde::Serialize;
use strsim::levenshtein;

use crate::error::Error;
use crate::expander::RawTable;

/// An immutable, fully expanded translation table for one language.
///
/// # Example
///
/// ```
/// use polyglot::{Language, RawTable};
///
/// let mut translations = RawTable::new();
/// translations.insert("hello".into(), "Hallo!".into());
///
/// let german = Language::builder()
///     .key("DE")
///     .translations(translations)
///     .name_in_english("German")
///     .name_in_language("Deutsch")
///     .build()
///     .unwrap();
///
/// assert_eq!(german.key(), "de");
/// assert_eq!(german.translation("hello"), Some("Hallo!"));
/// assert_eq!(german.translation("bye"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_in_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name_in_language: Option<String>,
    translations: RawTable,
}

#[bon]
impl Language {
    /// The key is lower-cased; a blank key is rejected.
    #[builder]
    pub fn new(
        #[builder(into)] key: String,
        #[builder(default)] translations: RawTable,
        #[builder(into)] name_in_english: Option<String>,
        #[builder(into)] name_in_language: Option<String>,
    ) -> Result<Self, Error> {
        if key.trim().is_empty() {
            return Err(Error::BlankLanguageKey);
        }
        Ok(Self {
            key: key.to_lowercase(),
            name_in_english,
            name_in_language,
            translations,
        })
    }

    /// The lower-cased language key, e.g. `en` or `de`.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name_in_english(&self) -> Option<&str> {
        self.name_in_english.as_deref()
    }

    pub fn name_in_language(&self) -> Option<&str> {
        self.name_in_language.as_deref()
    }

    /// Look up a message. No substitution happens here.
    pub fn translation(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn translations(&self) -> &RawTable {
        &self.translations
    }

    pub fn contains(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Up to three message keys close to `key`, nearest first.
    ///
    /// Short keys tolerate one edit, longer keys two.
    pub fn similar_keys(&self, key: &str) -> Vec<String> {
        let max_distance = if key.len() <= 3 { 1 } else { 2 };
        let mut suggestions: Vec<(usize, &String)> = self
            .translations
            .keys()
            .filter_map(|candidate| {
                let distance = levenshtein(key, candidate);
                (distance > 0 && distance <= max_distance).then_some((distance, candidate))
            })
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions
            .into_iter()
            .take(3)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}
