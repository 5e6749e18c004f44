//! Loaded languages and the lookups that choose between them.

mod model;
mod single;
mod storage;

use std::sync::Arc;

pub use model::Language;
pub use single::SingleLanguageStore;
pub use storage::{LanguageSet, LanguageStorage};

use crate::actor::{Actor, LocaleProvider};

/// Something that can pick a [`Language`] for a requested key.
///
/// Implementations fall back to their default language instead of returning
/// `None` whenever they hold any language at all.
pub trait LanguageLookup: Send + Sync {
    /// The language for `key`, or the default when `key` is `None` or unknown.
    fn language(&self, key: Option<&str>) -> Option<Arc<Language>>;

    fn default_language(&self) -> Option<Arc<Language>> {
        self.language(None)
    }

    /// Resolve the actor's locale through `provider`, then look it up.
    fn language_for(&self, actor: &Actor, provider: &dyn LocaleProvider) -> Option<Arc<Language>> {
        self.language(provider.locale_for(actor).as_deref())
    }
}

/// Reduce a locale tag to the language key it is stored under.
///
/// Lower-cases and cuts at the first `_`.
///
/// ```
/// use polyglot::normalize_language_key;
///
/// assert_eq!(normalize_language_key("en_US"), "en");
/// assert_eq!(normalize_language_key("DE"), "de");
/// assert_eq!(normalize_language_key("zh_hant_tw"), "zh");
/// ```
pub fn normalize_language_key(tag: &str) -> String {
    let lower = tag.to_lowercase();
    match lower.split_once('_') {
        Some((language, _)) => language.to_owned(),
        None => lower,
    }
}
