//! Lazily resolved views over a language lookup.
//!
//! Views bind message keys, not strings: every call re-resolves the actor's
//! language against the current language set, so reloads and preference
//! changes are picked up immediately.

mod item;
mod message;
mod translator;

pub use item::{ItemTargetsAndReplacements, ItemText, ItemTranslation};
pub use message::Translation;
pub use translator::Translator;
