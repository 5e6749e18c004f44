//! Who a message is for, and which locale they want.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// The recipient of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Actor {
    /// A connected user, identified by a stable id.
    Player {
        id: String,
        /// Locale tag reported by the user's client, e.g. `en_US`.
        client_locale: Option<String>,
    },
    /// The server console.
    Console,
}

impl Actor {
    pub fn player(id: impl Into<String>, client_locale: Option<&str>) -> Self {
        Actor::Player {
            id: id.into(),
            client_locale: client_locale.map(str::to_owned),
        }
    }

    pub fn client_locale(&self) -> Option<&str> {
        match self {
            Actor::Player { client_locale, .. } => client_locale.as_deref(),
            Actor::Console => None,
        }
    }
}

/// Supplies the locale tag an actor should be addressed in.
///
/// `None` means "use the default language".
pub trait LocaleProvider: Send + Sync {
    fn locale_for(&self, actor: &Actor) -> Option<String>;
}

/// Addresses players in their client locale and the console in the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClientLocale;

impl LocaleProvider for ClientLocale {
    fn locale_for(&self, actor: &Actor) -> Option<String> {
        actor.client_locale().map(str::to_owned)
    }
}

/// In-memory language preferences chosen by players and for the console.
///
/// A player without a stored preference is addressed in their client locale.
///
/// ```
/// use polyglot::{Actor, LocaleProvider, PreferenceStore};
///
/// let store = PreferenceStore::new();
/// let alice = Actor::player("alice", Some("en_GB"));
/// assert_eq!(store.locale_for(&alice).as_deref(), Some("en_GB"));
///
/// store.set_language(&alice, Some("de"));
/// assert_eq!(store.locale_for(&alice).as_deref(), Some("de"));
///
/// store.set_language(&alice, None);
/// assert_eq!(store.locale_for(&alice).as_deref(), Some("en_GB"));
/// ```
#[derive(Debug, Default)]
pub struct PreferenceStore {
    preferences: RwLock<Preferences>,
}

#[derive(Debug, Default)]
struct Preferences {
    players: HashMap<String, String>,
    console: Option<String>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicitly chosen language of an actor, if any.
    pub fn language(&self, actor: &Actor) -> Option<String> {
        let preferences = self.preferences.read().unwrap_or_else(PoisonError::into_inner);
        match actor {
            Actor::Player { id, .. } => preferences.players.get(id).cloned(),
            Actor::Console => preferences.console.clone(),
        }
    }

    /// Store a preference; `None` removes it.
    pub fn set_language(&self, actor: &Actor, language: Option<&str>) {
        let mut preferences = self.preferences.write().unwrap_or_else(PoisonError::into_inner);
        match (actor, language) {
            (Actor::Player { id, .. }, Some(language)) => {
                preferences.players.insert(id.clone(), language.to_owned());
            }
            (Actor::Player { id, .. }, None) => {
                preferences.players.remove(id);
            }
            (Actor::Console, language) => preferences.console = language.map(str::to_owned),
        }
    }
}

impl LocaleProvider for PreferenceStore {
    fn locale_for(&self, actor: &Actor) -> Option<String> {
        self.language(actor)
            .or_else(|| actor.client_locale().map(str::to_owned))
    }
}
