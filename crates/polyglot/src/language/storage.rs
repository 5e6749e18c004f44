//! The set of loaded languages plus the default language key.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwap;
use icu_locale_core::Locale;
use tracing::{info, warn};

use crate::error::Error;
use crate::language::{Language, LanguageLookup, normalize_language_key};

/// An immutable snapshot of every loaded language.
///
/// Readers hold on to one snapshot for as long as they need it; reloads
/// publish a new snapshot instead of touching this one.
#[derive(Debug, Default)]
pub struct LanguageSet {
    default_key: String,
    languages: BTreeMap<String, Arc<Language>>,
}

impl LanguageSet {
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// The default language; `None` only before the first load.
    pub fn default_language(&self) -> Option<&Arc<Language>> {
        self.languages.get(&self.default_key)
    }

    /// Exact lookup by an already normalized key.
    pub fn get(&self, key: &str) -> Option<&Arc<Language>> {
        self.languages.get(key)
    }

    /// Language keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Language>> {
        self.languages.values()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// An exact (case-insensitive) key match, else the key cut at `_`.
    fn find(&self, key: &str) -> Option<&Arc<Language>> {
        self.languages
            .get(&key.to_lowercase())
            .or_else(|| self.languages.get(&normalize_language_key(key)))
    }

    fn resolve(&self, key: Option<&str>) -> Option<Arc<Language>> {
        key.and_then(|key| self.find(key))
            .or_else(|| self.default_language())
            .cloned()
    }
}

/// Owns all loaded languages and the configured default language.
///
/// Every change publishes a complete new [`LanguageSet`] with a single atomic
/// swap, so concurrent readers see either the old set or the new one. Writers
/// are serialized; readers never block.
///
/// # Example
///
/// ```
/// use polyglot::{Language, LanguageLookup, LanguageStorage};
///
/// let storage = LanguageStorage::new("en").unwrap();
/// storage
///     .set_languages([
///         Language::builder().key("en").build().unwrap(),
///         Language::builder().key("de").build().unwrap(),
///     ])
///     .unwrap();
///
/// assert_eq!(storage.language(Some("de_DE")).unwrap().key(), "de");
/// assert_eq!(storage.language(Some("fr_FR")).unwrap().key(), "en");
/// assert_eq!(storage.language(None).unwrap().key(), "en");
/// ```
#[derive(Debug)]
pub struct LanguageStorage {
    current: ArcSwap<LanguageSet>,
    writer: Mutex<()>,
}

impl LanguageStorage {
    /// An empty storage whose languages must include `default_language` once set.
    ///
    /// The default is compared with language keys ignoring case, so a
    /// region-tagged default such as `pt_BR` matches a `pt_BR` language.
    pub fn new(default_language: &str) -> Result<Self, Error> {
        if default_language.trim().is_empty() {
            return Err(Error::BlankLanguageKey);
        }
        Ok(Self {
            current: ArcSwap::from_pointee(LanguageSet {
                default_key: default_language.to_lowercase(),
                languages: BTreeMap::new(),
            }),
            writer: Mutex::new(()),
        })
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<LanguageSet> {
        self.current.load_full()
    }

    pub fn default_language_key(&self) -> String {
        self.current.load().default_key.clone()
    }

    /// Replace every loaded language at once.
    ///
    /// Fails with [`Error::MissingDefaultLanguage`] and leaves the current set
    /// untouched if none of `languages` has the default key. When two entries
    /// share a key the later one wins.
    pub fn set_languages(&self, languages: impl IntoIterator<Item = Language>) -> Result<(), Error> {
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let default_key = self.current.load().default_key.clone();

        let mut next = BTreeMap::new();
        for language in languages {
            let key = language.key().to_owned();
            if next.insert(key.clone(), Arc::new(language)).is_some() {
                warn!(language = %key, "duplicate language key, keeping the last one");
            }
        }
        if !next.contains_key(&default_key) {
            return Err(Error::MissingDefaultLanguage {
                default: default_key,
            });
        }

        info!(languages = next.len(), default = %default_key, "publishing language set");
        self.current.store(Arc::new(LanguageSet {
            default_key,
            languages: next,
        }));
        Ok(())
    }

    /// Change the default language key.
    ///
    /// Before the first load any key is accepted as is (lower-cased).
    /// Afterwards the key must name a loaded language, either exactly or
    /// once cut at `_`, otherwise [`Error::UnknownLanguage`].
    pub fn set_default_language(&self, key: &str) -> Result<(), Error> {
        if key.trim().is_empty() {
            return Err(Error::BlankLanguageKey);
        }
        let _writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let current = self.current.load_full();

        let default_key = if current.is_empty() {
            key.to_lowercase()
        } else if let Some(language) = current.find(key) {
            language.key().to_owned()
        } else {
            let key = key.to_lowercase();
            warn!(language = %key, "refusing unknown default language");
            return Err(Error::UnknownLanguage { key });
        };

        self.current.store(Arc::new(LanguageSet {
            default_key,
            languages: current.languages.clone(),
        }));
        Ok(())
    }

    /// Look up by the primary language subtag of a parsed locale.
    pub fn language_for_locale(&self, locale: &Locale) -> Option<Arc<Language>> {
        self.current.load().resolve(Some(locale.id.language.as_str()))
    }

    /// Sorted keys of the loaded languages.
    pub fn language_keys(&self) -> Vec<String> {
        self.current.load().keys().map(str::to_owned).collect()
    }
}

impl LanguageLookup for LanguageStorage {
    fn language(&self, key: Option<&str>) -> Option<Arc<Language>> {
        self.current.load().resolve(key)
    }
}
