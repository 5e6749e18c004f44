//! Tracks which languages each message owner ships.

use std::collections::{BTreeMap, BTreeSet};

/// Registry of the language keys provided per owner (a plugin, a module, ...).
///
/// A language is *fully* supported when every registered owner ships it and
/// *partially* supported when at least one does.
///
/// ```
/// use polyglot::LanguageSupport;
///
/// let mut support = LanguageSupport::new();
/// support.register("chat", ["en", "de", "fr"]);
/// support.register("shop", ["en", "de"]);
///
/// assert_eq!(support.fully_supported().into_iter().collect::<Vec<_>>(), ["de", "en"]);
/// assert_eq!(support.partially_supported().len(), 3);
/// ```
#[derive(Debug, Default, Clone)]
pub struct LanguageSupport {
    owners: BTreeMap<String, BTreeSet<String>>,
}

impl LanguageSupport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the languages of `owner`, replacing any earlier registration.
    pub fn register<I, S>(&mut self, owner: impl Into<String>, languages: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let languages = languages
            .into_iter()
            .map(|key| key.as_ref().to_lowercase())
            .collect();
        self.owners.insert(owner.into(), languages);
    }

    /// Forget an owner; returns whether it was registered.
    pub fn unregister(&mut self, owner: &str) -> bool {
        self.owners.remove(owner).is_some()
    }

    /// Languages shipped by every owner. Empty when nothing is registered.
    pub fn fully_supported(&self) -> BTreeSet<String> {
        let mut sets = self.owners.values();
        let Some(first) = sets.next() else {
            return BTreeSet::new();
        };
        sets.fold(first.clone(), |acc, languages| {
            acc.intersection(languages).cloned().collect()
        })
    }

    /// Languages shipped by at least one owner.
    pub fn partially_supported(&self) -> BTreeSet<String> {
        self.owners.values().flatten().cloned().collect()
    }

    pub fn is_registered(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.owners.values().any(|languages| languages.contains(&key))
    }
}
