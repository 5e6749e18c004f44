//! A lookup that always answers with the same language.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::language::{Language, LanguageLookup};

/// Serves one language regardless of the requested key.
///
/// Useful for embedding a fixed message table where per-user languages are
/// not wanted. The language can still be swapped as a whole.
#[derive(Debug)]
pub struct SingleLanguageStore {
    language: ArcSwap<Language>,
}

impl SingleLanguageStore {
    pub fn new(language: Language) -> Self {
        Self {
            language: ArcSwap::from_pointee(language),
        }
    }

    /// Replace the served language.
    pub fn set_language(&self, language: Language) {
        self.language.store(Arc::new(language));
    }
}

impl LanguageLookup for SingleLanguageStore {
    fn language(&self, _key: Option<&str>) -> Option<Arc<Language>> {
        Some(self.language.load_full())
    }
}
