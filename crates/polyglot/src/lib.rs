pub mod actor;
pub mod error;
pub mod expander;
pub mod language;
pub mod replace;
pub mod source;
pub mod support;
pub mod translation;

pub use actor::{Actor, ClientLocale, LocaleProvider, PreferenceStore};
pub use error::{Error, ErrorKind, LoadError};
pub use expander::{ExpanderSettings, RawTable, expand, expand_references, expand_variables};
pub use language::{
    Language, LanguageLookup, LanguageSet, LanguageStorage, SingleLanguageStore,
    normalize_language_key,
};
pub use replace::{TargetsAndReplacements, multi_replace, split_lines};
pub use source::{
    ConfigSource, LanguageLoader, YamlSource, language_from_source, load_language_dir,
    load_language_file,
};
pub use support::LanguageSupport;
pub use translation::{
    ItemTargetsAndReplacements, ItemText, ItemTranslation, Translation, Translator,
};

/// Creates a [`TargetsAndReplacements`] from `target => replacement` pairs.
///
/// Both sides accept anything convertible into a `String`. Pairs are applied
/// in the order written.
///
/// # Example
///
/// ```
/// use polyglot::tar;
///
/// let tar = tar! { "%player%" => "Alex", "%count%" => 3.to_string() };
/// assert_eq!(tar.len(), 2);
/// assert_eq!(tar.apply("%player% has %count% coins"), "Alex has 3 coins");
/// assert!(tar![].is_empty());
/// ```
#[macro_export]
macro_rules! tar {
    () => {
        $crate::TargetsAndReplacements::none()
    };
    ($($target:expr => $replacement:expr),+ $(,)?) => {
        {
            let mut tar = $crate::TargetsAndReplacements::none();
            $(
                tar.push($target, $replacement);
            )+
            tar
        }
    };
}
