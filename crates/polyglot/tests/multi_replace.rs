//! Tests for call-site substitution.

use polyglot::{Error, ErrorKind, TargetsAndReplacements, multi_replace, split_lines, tar};

// =========================================================================
// multi_replace
// =========================================================================

#[test]
fn replacements_apply_sequentially() {
    assert_eq!(multi_replace("A", &["A", "B", "B", "C"]).unwrap(), "C");
}

#[test]
fn order_of_pairs_matters() {
    assert_eq!(multi_replace("A", &["B", "C", "A", "B"]).unwrap(), "B");
}

#[test]
fn empty_pairs_return_text_unchanged() {
    let empty: [&str; 0] = [];
    assert_eq!(multi_replace("Hello %name%", &empty).unwrap(), "Hello %name%");
}

#[test]
fn unpaired_target_is_rejected() {
    let err = multi_replace("text", &["X"]).unwrap_err();
    assert_eq!(err, Error::UnpairedReplacement { len: 1 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn odd_length_is_rejected_even_when_long() {
    let err = multi_replace("text", &["a", "b", "c"]).unwrap_err();
    assert_eq!(err, Error::UnpairedReplacement { len: 3 });
}

#[test]
fn targets_are_literal_not_patterns() {
    let text = "cost: $1 (.*) [x]";
    let replaced = multi_replace(text, &["$1", "5€", ".*", "all", "[x]", "y"]).unwrap();
    assert_eq!(replaced, "cost: 5€ (all) y");
}

#[test]
fn every_occurrence_of_a_target_is_replaced() {
    assert_eq!(
        multi_replace("%p% and %p%", &["%p%", "Sam"]).unwrap(),
        "Sam and Sam"
    );
}

#[test]
fn accepts_owned_strings() {
    let pairs = vec!["%n%".to_string(), 42.to_string()];
    assert_eq!(multi_replace("n=%n%", &pairs).unwrap(), "n=42");
}

// =========================================================================
// TargetsAndReplacements
// =========================================================================

#[test]
fn flat_list_is_paired_in_order() {
    let tar = TargetsAndReplacements::new(vec!["%a%", "1", "%b%", "2"]).unwrap();
    let pairs: Vec<(&str, &str)> = tar.pairs().collect();
    assert_eq!(pairs, [("%a%", "1"), ("%b%", "2")]);
}

#[test]
fn flat_list_with_odd_length_is_rejected() {
    let err = TargetsAndReplacements::new(vec!["%a%"]).unwrap_err();
    assert_eq!(err, Error::UnpairedReplacement { len: 1 });
}

#[test]
fn apply_matches_multi_replace() {
    let tar = TargetsAndReplacements::from_pairs([("A", "B"), ("B", "C")]);
    assert_eq!(tar.apply("A"), multi_replace("A", &["A", "B", "B", "C"]).unwrap());
}

#[test]
fn macro_builds_pairs_in_written_order() {
    let tar = tar! { "%x%" => "%y%", "%y%" => "done" };
    assert_eq!(tar.apply("%x%"), "done");
    assert_eq!(tar, TargetsAndReplacements::from_pairs([("%x%", "%y%"), ("%y%", "done")]));
}

#[test]
fn empty_macro_is_a_no_op() {
    let tar = tar![];
    assert!(tar.is_empty());
    assert_eq!(tar.apply("unchanged"), "unchanged");
}

// =========================================================================
// split_lines
// =========================================================================

#[test]
fn splits_on_both_line_endings() {
    assert_eq!(split_lines("one\ntwo\r\nthree"), ["one", "two", "three"]);
}

#[test]
fn keeps_empty_and_trailing_lines() {
    assert_eq!(split_lines("a\n\nb\n"), ["a", "", "b", ""]);
}

#[test]
fn lone_carriage_return_is_kept() {
    assert_eq!(split_lines("a\rb\r"), ["a\rb\r"]);
}
