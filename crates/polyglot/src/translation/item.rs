//! Two-part translations for displayable items: a name and a description.

use serde::Serialize;

use crate::actor::Actor;
use crate::language::Language;
use crate::replace::{TargetsAndReplacements, split_lines};
use crate::translation::Translator;

/// Substitutions for the display name and the description of an item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTargetsAndReplacements {
    display_name: TargetsAndReplacements,
    description: TargetsAndReplacements,
}

impl ItemTargetsAndReplacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display_name(mut self, targets_and_replacements: TargetsAndReplacements) -> Self {
        self.display_name = targets_and_replacements;
        self
    }

    pub fn with_description(mut self, targets_and_replacements: TargetsAndReplacements) -> Self {
        self.description = targets_and_replacements;
        self
    }

    pub fn display_name(&self) -> &TargetsAndReplacements {
        &self.display_name
    }

    pub fn description(&self) -> &TargetsAndReplacements {
        &self.description
    }
}

/// A resolved item: its name and the description split into lines.
///
/// Each part is `None` when its key is missing from the language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemText {
    pub display_name: Option<String>,
    pub description: Option<Vec<String>>,
}

/// A pair of message keys bound to a [`Translator`].
#[derive(Debug, Clone)]
pub struct ItemTranslation {
    translator: Translator,
    display_name_key: String,
    description_key: String,
}

impl ItemTranslation {
    pub(crate) fn new(translator: Translator, display_name_key: String, description_key: String) -> Self {
        Self {
            translator,
            display_name_key,
            description_key,
        }
    }

    pub fn display_name_key(&self) -> &str {
        &self.display_name_key
    }

    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    /// Resolve both parts in the actor's language.
    ///
    /// Substitution runs before the description is split, so replacements
    /// may introduce line breaks.
    pub fn resolve(&self, actor: &Actor, targets_and_replacements: &ItemTargetsAndReplacements) -> Option<ItemText> {
        let language = self.translator.language_for(actor)?;
        Some(self.render(&language, targets_and_replacements))
    }

    /// Like [`resolve`](Self::resolve), but for an explicit language key.
    pub fn resolve_in(
        &self,
        language_key: Option<&str>,
        targets_and_replacements: &ItemTargetsAndReplacements,
    ) -> Option<ItemText> {
        let language = self.translator.language(language_key)?;
        Some(self.render(&language, targets_and_replacements))
    }

    fn render(&self, language: &Language, targets_and_replacements: &ItemTargetsAndReplacements) -> ItemText {
        ItemText {
            display_name: language
                .translation(&self.display_name_key)
                .map(|text| targets_and_replacements.display_name.apply(text)),
            description: language
                .translation(&self.description_key)
                .map(|text| split_lines(&targets_and_replacements.description.apply(text))),
        }
    }
}
