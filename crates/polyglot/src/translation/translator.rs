//! Wires a language lookup to a locale provider.

use std::fmt;
use std::sync::Arc;

use crate::actor::{Actor, LocaleProvider};
use crate::language::{Language, LanguageLookup};
use crate::translation::{ItemTranslation, Translation};

/// Resolves actors to languages and hands out translation views.
///
/// Both collaborators are passed in; cloning shares them.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use polyglot::{tar, Actor, ClientLocale, Language, LanguageStorage, RawTable, Translator};
///
/// let mut en = RawTable::new();
/// en.insert("welcome".into(), "Welcome, %name%!".into());
/// let mut de = RawTable::new();
/// de.insert("welcome".into(), "Willkommen, %name%!".into());
///
/// let storage = Arc::new(LanguageStorage::new("en").unwrap());
/// storage
///     .set_languages([
///         Language::builder().key("en").translations(en).build().unwrap(),
///         Language::builder().key("de").translations(de).build().unwrap(),
///     ])
///     .unwrap();
///
/// let translator = Translator::new(storage, Arc::new(ClientLocale));
/// let welcome = translator.translation("welcome");
///
/// let anna = Actor::player("anna", Some("de_DE"));
/// assert_eq!(
///     welcome.resolve(&anna, &tar!["%name%" => "Anna"]).as_deref(),
///     Some("Willkommen, Anna!")
/// );
/// assert_eq!(
///     welcome.resolve(&Actor::Console, &tar!["%name%" => "admin"]).as_deref(),
///     Some("Welcome, admin!")
/// );
/// ```
#[derive(Clone)]
pub struct Translator {
    languages: Arc<dyn LanguageLookup>,
    locales: Arc<dyn LocaleProvider>,
}

impl Translator {
    pub fn new(languages: Arc<dyn LanguageLookup>, locales: Arc<dyn LocaleProvider>) -> Self {
        Self { languages, locales }
    }

    /// The language `actor` should be addressed in.
    pub fn language_for(&self, actor: &Actor) -> Option<Arc<Language>> {
        self.languages.language_for(actor, self.locales.as_ref())
    }

    /// The language stored under `key`, falling back to the default.
    pub fn language(&self, key: Option<&str>) -> Option<Arc<Language>> {
        self.languages.language(key)
    }

    pub fn translation(&self, key: impl Into<String>) -> Translation {
        Translation::new(self.clone(), key.into())
    }

    pub fn item(
        &self,
        display_name_key: impl Into<String>,
        description_key: impl Into<String>,
    ) -> ItemTranslation {
        ItemTranslation::new(self.clone(), display_name_key.into(), description_key.into())
    }

    /// An item view over `<key>.displayName` and `<key>.description`.
    pub fn item_with_common_key(&self, key: &str) -> ItemTranslation {
        self.item(format!("{key}.displayName"), format!("{key}.description"))
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator").finish_non_exhaustive()
    }
}
