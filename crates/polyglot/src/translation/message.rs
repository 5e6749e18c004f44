//! Single-message translation view.

use tracing::debug;

use crate::actor::Actor;
use crate::language::Language;
use crate::replace::{TargetsAndReplacements, split_lines};
use crate::translation::Translator;

/// A message key bound to a [`Translator`].
#[derive(Debug, Clone)]
pub struct Translation {
    translator: Translator,
    key: String,
}

impl Translation {
    pub(crate) fn new(translator: Translator, key: String) -> Self {
        Self { translator, key }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The message in the actor's language with substitutions applied.
    ///
    /// `None` when the resolved language has no entry for this key. Other
    /// languages are never consulted for the missing key.
    pub fn resolve(&self, actor: &Actor, targets_and_replacements: &TargetsAndReplacements) -> Option<String> {
        let language = self.translator.language_for(actor)?;
        self.render(&language, targets_and_replacements)
    }

    /// Like [`resolve`](Self::resolve), but for an explicit language key.
    pub fn resolve_in(
        &self,
        language_key: Option<&str>,
        targets_and_replacements: &TargetsAndReplacements,
    ) -> Option<String> {
        let language = self.translator.language(language_key)?;
        self.render(&language, targets_and_replacements)
    }

    /// The resolved message split into lines.
    pub fn lines(&self, actor: &Actor, targets_and_replacements: &TargetsAndReplacements) -> Option<Vec<String>> {
        self.resolve(actor, targets_and_replacements)
            .map(|text| split_lines(&text))
    }

    fn render(&self, language: &Language, targets_and_replacements: &TargetsAndReplacements) -> Option<String> {
        let Some(text) = language.translation(&self.key) else {
            debug!(key = %self.key, language = language.key(), "missing translation");
            return None;
        };
        Some(targets_and_replacements.apply(text))
    }
}
