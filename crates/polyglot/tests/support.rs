//! Tests for the language support registry.

use std::collections::BTreeSet;

use polyglot::LanguageSupport;

fn set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

#[test]
fn empty_registry_supports_nothing() {
    let support = LanguageSupport::new();
    assert!(support.fully_supported().is_empty());
    assert!(support.partially_supported().is_empty());
    assert!(!support.is_registered("en"));
}

#[test]
fn single_owner_fully_supports_its_languages() {
    let mut support = LanguageSupport::new();
    support.register("chat", ["en", "de"]);

    assert_eq!(support.fully_supported(), set(&["de", "en"]));
    assert_eq!(support.partially_supported(), set(&["de", "en"]));
}

#[test]
fn full_support_is_the_intersection() {
    let mut support = LanguageSupport::new();
    support.register("chat", ["en", "de", "fr"]);
    support.register("shop", ["en", "fr"]);
    support.register("quests", ["en", "es"]);

    assert_eq!(support.fully_supported(), set(&["en"]));
    assert_eq!(support.partially_supported(), set(&["de", "en", "es", "fr"]));
}

#[test]
fn disjoint_owners_share_nothing() {
    let mut support = LanguageSupport::new();
    support.register("a", ["en"]);
    support.register("b", ["de"]);
    support.register("c", ["de"]);

    assert!(support.fully_supported().is_empty());
}

#[test]
fn reregistering_replaces_languages() {
    let mut support = LanguageSupport::new();
    support.register("chat", ["en", "de"]);
    support.register("chat", ["fr"]);

    assert_eq!(support.partially_supported(), set(&["fr"]));
    assert!(!support.is_registered("de"));
}

#[test]
fn keys_are_case_insensitive() {
    let mut support = LanguageSupport::new();
    support.register("chat", ["EN"]);

    assert!(support.is_registered("en"));
    assert!(support.is_registered("En"));
}

#[test]
fn unregister_removes_owner() {
    let mut support = LanguageSupport::new();
    support.register("chat", ["en"]);
    support.register("shop", ["de"]);

    assert!(support.unregister("shop"));
    assert!(!support.unregister("shop"));
    assert_eq!(support.fully_supported(), set(&["en"]));
}
