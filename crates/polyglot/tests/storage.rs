//! Tests for language storage, lookup and fallback.

use std::sync::Arc;
use std::thread;

use icu_locale_core::locale;
use polyglot::{
    Actor, ClientLocale, Error, ErrorKind, Language, LanguageLookup, LanguageStorage, RawTable,
    SingleLanguageStore, normalize_language_key,
};

fn language(key: &str, entries: &[(&str, &str)]) -> Language {
    let translations: RawTable = entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    Language::builder()
        .key(key)
        .translations(translations)
        .build()
        .unwrap()
}

fn en_de_storage() -> LanguageStorage {
    let storage = LanguageStorage::new("en").unwrap();
    storage
        .set_languages([
            language("en", &[("hello", "Hello")]),
            language("de", &[("hello", "Hallo")]),
        ])
        .unwrap();
    storage
}

// =========================================================================
// Language
// =========================================================================

#[test]
fn language_key_is_lower_cased() {
    let language = language("EN", &[]);
    assert_eq!(language.key(), "en");
}

#[test]
fn blank_language_key_is_rejected() {
    let err = Language::builder().key("  ").build().unwrap_err();
    assert_eq!(err, Error::BlankLanguageKey);
}

#[test]
fn language_names_are_optional() {
    let plain = language("en", &[]);
    assert_eq!(plain.name_in_english(), None);

    let named = Language::builder()
        .key("de")
        .name_in_english("German")
        .name_in_language("Deutsch")
        .build()
        .unwrap();
    assert_eq!(named.name_in_english(), Some("German"));
    assert_eq!(named.name_in_language(), Some("Deutsch"));
}

#[test]
fn translation_lookup_is_exact() {
    let language = language("en", &[("command.help", "Help")]);
    assert_eq!(language.translation("command.help"), Some("Help"));
    assert_eq!(language.translation("Command.Help"), None);
    assert_eq!(language.translation("command"), None);
}

#[test]
fn similar_keys_suggests_near_misses() {
    let language = language(
        "en",
        &[("command.help", ""), ("command.hello", ""), ("unrelated", "")],
    );
    assert_eq!(language.similar_keys("command.helo"), ["command.hello", "command.help"]);
    assert_eq!(language.similar_keys("command.help"), ["command.hello"]);
    assert!(language.similar_keys("zzz").is_empty());
}

// =========================================================================
// Key Normalization
// =========================================================================

#[test]
fn normalization_lower_cases_and_truncates() {
    assert_eq!(normalize_language_key("en_US"), "en");
    assert_eq!(normalize_language_key("PT_br"), "pt");
    assert_eq!(normalize_language_key("fr"), "fr");
    assert_eq!(normalize_language_key("_x"), "");
    assert_eq!(normalize_language_key("en-US"), "en-us");
}

// =========================================================================
// Lookup and Fallback
// =========================================================================

#[test]
fn unknown_locale_falls_back_to_default() {
    let storage = en_de_storage();
    assert_eq!(storage.language(Some("fr_FR")).unwrap().key(), "en");
}

#[test]
fn locale_tag_resolves_to_language() {
    let storage = en_de_storage();
    assert_eq!(storage.language(Some("de_DE")).unwrap().key(), "de");
    assert_eq!(storage.language(Some("DE")).unwrap().key(), "de");
}

#[test]
fn absent_key_returns_default() {
    let storage = en_de_storage();
    assert_eq!(storage.language(None).unwrap().key(), "en");
    assert_eq!(storage.default_language().unwrap().key(), "en");
}

#[test]
fn empty_storage_returns_nothing() {
    let storage = LanguageStorage::new("en").unwrap();
    assert!(storage.language(None).is_none());
    assert!(storage.language(Some("en")).is_none());
}

#[test]
fn actor_lookup_uses_client_locale() {
    let storage = en_de_storage();
    let player = Actor::player("p1", Some("de_AT"));
    let without_locale = Actor::player("p2", None);

    assert_eq!(storage.language_for(&player, &ClientLocale).unwrap().key(), "de");
    assert_eq!(storage.language_for(&without_locale, &ClientLocale).unwrap().key(), "en");
    assert_eq!(storage.language_for(&Actor::Console, &ClientLocale).unwrap().key(), "en");
}

#[test]
fn parsed_locale_resolves_by_language_subtag() {
    let storage = en_de_storage();
    let austrian = locale!("de-AT");
    let french = locale!("fr-CA");

    assert_eq!(storage.language_for_locale(&austrian).unwrap().key(), "de");
    assert_eq!(storage.language_for_locale(&french).unwrap().key(), "en");
}

// =========================================================================
// Replacing the Language Set
// =========================================================================

#[test]
fn set_without_default_is_rejected_and_keeps_old_set() {
    let storage = en_de_storage();
    let err = storage
        .set_languages([language("de", &[("hello", "Servus")])])
        .unwrap_err();

    assert_eq!(
        err,
        Error::MissingDefaultLanguage {
            default: "en".to_string()
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(storage.language_keys(), ["de", "en"]);
    assert_eq!(
        storage.language(Some("de")).unwrap().translation("hello"),
        Some("Hallo")
    );
}

#[test]
fn first_set_without_default_is_rejected() {
    let storage = LanguageStorage::new("en").unwrap();
    assert!(storage.set_languages([language("de", &[])]).is_err());
    assert!(storage.language_keys().is_empty());
}

#[test]
fn default_is_matched_case_insensitively() {
    let storage = LanguageStorage::new("EN").unwrap();
    storage.set_languages([language("En", &[])]).unwrap();
    assert_eq!(storage.default_language_key(), "en");
    assert_eq!(storage.language(None).unwrap().key(), "en");
}

#[test]
fn region_tagged_default_accepts_matching_language() {
    let storage = LanguageStorage::new("pt_BR").unwrap();
    storage
        .set_languages([
            language("pt_BR", &[("hello", "Olá")]),
            language("en", &[("hello", "Hello")]),
        ])
        .unwrap();

    assert_eq!(storage.default_language_key(), "pt_br");
    assert_eq!(storage.language(None).unwrap().key(), "pt_br");
    assert_eq!(storage.language(Some("fr_FR")).unwrap().key(), "pt_br");
}

#[test]
fn region_tagged_default_rejects_plain_language() {
    let storage = LanguageStorage::new("pt_BR").unwrap();
    let err = storage.set_languages([language("pt", &[])]).unwrap_err();

    assert_eq!(
        err,
        Error::MissingDefaultLanguage {
            default: "pt_br".to_string()
        }
    );
}

#[test]
fn region_tagged_language_is_found_before_truncation() {
    let storage = LanguageStorage::new("en").unwrap();
    storage
        .set_languages([
            language("en", &[]),
            language("pt", &[("hello", "Olá")]),
            language("pt_BR", &[("hello", "Oi")]),
        ])
        .unwrap();

    assert_eq!(storage.language(Some("PT_br")).unwrap().key(), "pt_br");
    assert_eq!(storage.language(Some("pt_PT")).unwrap().key(), "pt");
}

#[test]
fn reload_replaces_every_language() {
    let storage = en_de_storage();
    storage
        .set_languages([language("en", &[("bye", "Bye")]), language("fr", &[])])
        .unwrap();

    assert_eq!(storage.language_keys(), ["en", "fr"]);
    assert_eq!(storage.language(Some("de")).unwrap().key(), "en");
    assert_eq!(storage.language(None).unwrap().translation("hello"), None);
}

#[test]
fn duplicate_keys_keep_the_last_language() {
    let storage = LanguageStorage::new("en").unwrap();
    storage
        .set_languages([language("en", &[("v", "first")]), language("EN", &[("v", "second")])])
        .unwrap();
    assert_eq!(storage.language(None).unwrap().translation("v"), Some("second"));
}

#[test]
fn held_snapshot_survives_reload() {
    let storage = en_de_storage();
    let before = storage.snapshot();

    storage.set_languages([language("en", &[])]).unwrap();

    assert_eq!(before.len(), 2);
    assert_eq!(before.get("de").unwrap().translation("hello"), Some("Hallo"));
    assert_eq!(storage.snapshot().len(), 1);
}

#[test]
fn blank_default_is_rejected() {
    assert_eq!(LanguageStorage::new(" ").unwrap_err(), Error::BlankLanguageKey);
}

// =========================================================================
// Changing the Default
// =========================================================================

#[test]
fn default_can_move_to_a_loaded_language() {
    let storage = en_de_storage();
    storage.set_default_language("de_DE").unwrap();

    assert_eq!(storage.default_language_key(), "de");
    assert_eq!(storage.language(Some("fr")).unwrap().key(), "de");
}

#[test]
fn default_can_move_to_a_region_tagged_language() {
    let storage = LanguageStorage::new("en").unwrap();
    storage
        .set_languages([language("en", &[]), language("pt_BR", &[])])
        .unwrap();
    storage.set_default_language("PT_BR").unwrap();

    assert_eq!(storage.default_language_key(), "pt_br");
    assert_eq!(storage.language(None).unwrap().key(), "pt_br");
}

#[test]
fn default_cannot_move_to_an_unloaded_language() {
    let storage = en_de_storage();
    let err = storage.set_default_language("fr").unwrap_err();

    assert_eq!(
        err,
        Error::UnknownLanguage {
            key: "fr".to_string()
        }
    );
    assert_eq!(storage.default_language_key(), "en");
}

#[test]
fn default_is_free_before_first_load() {
    let storage = LanguageStorage::new("en").unwrap();
    storage.set_default_language("fr").unwrap();

    assert!(storage.set_languages([language("en", &[])]).is_err());
    storage.set_languages([language("fr", &[])]).unwrap();
    assert_eq!(storage.language(None).unwrap().key(), "fr");
}

// =========================================================================
// Concurrent Readers
// =========================================================================

#[test]
fn readers_never_observe_a_partial_set() {
    let storage = Arc::new(LanguageStorage::new("en").unwrap());
    storage
        .set_languages([language("en", &[("gen", "0")]), language("de", &[("gen", "0")])])
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            let storage = Arc::clone(&storage);
            scope.spawn(move || {
                for _ in 0..500 {
                    let snapshot = storage.snapshot();
                    let en = snapshot.get("en").unwrap().translation("gen").unwrap();
                    let de = snapshot.get("de").unwrap().translation("gen").unwrap();
                    assert_eq!(en, de);
                }
            });
        }

        for generation in 1..=50 {
            let value = generation.to_string();
            storage
                .set_languages([
                    language("en", &[("gen", value.as_str())]),
                    language("de", &[("gen", value.as_str())]),
                ])
                .unwrap();
        }
    });
}

// =========================================================================
// SingleLanguageStore
// =========================================================================

#[test]
fn single_store_ignores_requested_key() {
    let store = SingleLanguageStore::new(language("en", &[("a", "b")]));
    assert_eq!(store.language(Some("de")).unwrap().key(), "en");
    assert_eq!(store.language(None).unwrap().key(), "en");
}

#[test]
fn single_store_language_can_be_swapped() {
    let store = SingleLanguageStore::new(language("en", &[]));
    store.set_language(language("de", &[]));
    assert_eq!(store.default_language().unwrap().key(), "de");
}
