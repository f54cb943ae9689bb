// Native tests for the phonics scanner. The scanner is pure Rust with no
// browser dependency, so everything here runs under plain `cargo test`.

use phonics_pages::phonics::{PATTERNS, scan, strip_emphasis};

fn bucket_words<'a>(result: &'a phonics_pages::phonics::ScanResult, pattern: &str) -> &'a [String] {
    &result
        .buckets
        .iter()
        .find(|b| b.pattern == pattern)
        .expect("pattern bucket exists")
        .words
}

#[test]
fn matched_words_are_underlined_in_place() {
    let result = scan(&["She sells shells."]);
    assert_eq!(result.paragraphs, vec!["<u>She</u> sells <u>shells</u>."]);
    assert_eq!(bucket_words(&result, "sh"), ["She", "shells"]);
}

#[test]
fn earlier_declared_pattern_wins_for_overlapping_matches() {
    // "chick" contains both "ch" and "ck"; "ck" is declared first.
    assert_eq!(PATTERNS[0], "ck");
    let result = scan(&["a chick chirped"]);
    assert_eq!(bucket_words(&result, "ck"), ["chick"]);
    assert_eq!(bucket_words(&result, "ch"), ["chirped"]);
}

#[test]
fn buckets_dedup_and_keep_first_seen_order() {
    let result = scan(&["a thin thing", "that thing"]);
    assert_eq!(bucket_words(&result, "th"), ["thin", "thing", "that"]);
}

#[test]
fn dedup_is_case_sensitive() {
    let result = scan(&["Shell shell Shell"]);
    assert_eq!(bucket_words(&result, "sh"), ["Shell", "shell"]);
}

#[test]
fn matching_is_case_insensitive() {
    let result = scan(&["CHips ahoy"]);
    assert_eq!(bucket_words(&result, "ch"), ["CHips"]);
    assert_eq!(result.paragraphs, vec!["<u>CHips</u> ahoy"]);
}

#[test]
fn empty_input_yields_empty_buckets_for_every_pattern() {
    let result = scan(&[]);
    assert!(result.paragraphs.is_empty());
    assert_eq!(result.buckets.len(), PATTERNS.len());
    assert!(result.buckets.iter().all(|b| b.words.is_empty()));
}

#[test]
fn empty_paragraph_passes_through() {
    let result = scan(&[""]);
    assert_eq!(result.paragraphs, vec![""]);
    assert!(result.buckets.iter().all(|b| b.words.is_empty()));
}

#[test]
fn tokens_without_letters_never_match_or_wrap() {
    let result = scan(&["123 ... 456"]);
    assert_eq!(result.paragraphs, vec!["123 ... 456"]);
    assert!(result.buckets.iter().all(|b| b.words.is_empty()));
}

#[test]
fn punctuated_word_wraps_only_the_letters() {
    let result = scan(&["\u{201c}Whisker!\u{201d} she said."]);
    assert_eq!(
        result.paragraphs,
        vec!["\u{201c}<u>Whisker</u>!\u{201d} <u>she</u> said."]
    );
    assert_eq!(bucket_words(&result, "wh"), ["Whisker"]);
    assert_eq!(bucket_words(&result, "sh"), ["she"]);
}

#[test]
fn interior_whitespace_layout_is_preserved() {
    let input = "  the\tshop \n stayed  open  ";
    let result = scan(&[input]);
    assert_eq!(strip_emphasis(&result.paragraphs[0]), input);
}

#[test]
fn bucket_order_follows_declared_pattern_order() {
    let result = scan(&["x"]);
    let order: Vec<&str> = result.buckets.iter().map(|b| b.pattern).collect();
    assert_eq!(order, PATTERNS);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Stripping the emphasis markers must reproduce the input exactly,
        // whatever the whitespace / punctuation mix.
        #[test]
        fn reassembly_is_lossless(input in "[ \t\na-zA-Z0-9.,!?'-]{0,120}") {
            let result = scan(&[input.as_str()]);
            prop_assert_eq!(strip_emphasis(&result.paragraphs[0]), input);
        }

        // Scanning is idempotent on its pure outputs: same input, same result.
        #[test]
        fn scan_is_deterministic(input in "[ \ta-z.,]{0,60}") {
            let a = scan(&[input.as_str()]);
            let b = scan(&[input.as_str()]);
            prop_assert_eq!(a, b);
        }

        // Every bucketed word is free of duplicates.
        #[test]
        fn buckets_never_hold_duplicates(input in "[ a-z]{0,80}") {
            let result = scan(&[input.as_str()]);
            for bucket in &result.buckets {
                let mut seen = std::collections::HashSet::new();
                for w in &bucket.words {
                    prop_assert!(seen.insert(w.clone()), "duplicate {} in {}", w, bucket.pattern);
                }
            }
        }
    }
}
