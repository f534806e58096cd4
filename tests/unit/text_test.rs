//! Tokenizer and syllable counter through the public API

use littime::text::{count_sentences, count_syllables, split_words, split_words_with, Tokens};
use littime::HyphenPolicy;

use crate::helpers::load_fixture;

// ============================================================================
// Word splitting
// ============================================================================

#[test]
fn mixed_fixture_has_twelve_words() {
    let text = load_fixture("mixed.txt");
    let words = split_words(&text);
    assert_eq!(words.len(), 12);
    assert_eq!(words.first(), Some(&"Это"));
    assert_eq!(words.last(), Some(&"too"));
}

#[test]
fn hyphen_policy_on_compounds() {
    let text = "One-two three,four five!";
    assert_eq!(split_words_with(text, HyphenPolicy::Join).len(), 4);
    assert_eq!(split_words_with(text, HyphenPolicy::Split).len(), 5);
}

#[test]
fn numbers_are_words() {
    assert_eq!(split_words("123 456 789"), vec!["123", "456", "789"]);
}

#[test]
fn russian_hyphenated_word_stays_whole() {
    assert_eq!(split_words("Кто-нибудь придёт."), vec!["Кто-нибудь", "придёт"]);
}

// ============================================================================
// Sentences
// ============================================================================

#[test]
fn mixed_fixture_has_three_sentences() {
    assert_eq!(count_sentences(&load_fixture("mixed.txt")), 3);
}

#[test]
fn essay_counts_every_terminator_kind() {
    // 4 '.'-runs, 1 '!', 1 '?' across the fixture
    assert_eq!(count_sentences(&load_fixture("essay_en.txt")), 6);
}

#[test]
fn ellipsis_and_repeated_marks_count_once() {
    assert_eq!(count_sentences("Wait... What?! Fine."), 3);
}

#[test]
fn blank_text_has_no_sentences() {
    assert_eq!(count_sentences("   \n\t"), 0);
}

// ============================================================================
// Tokens
// ============================================================================

#[test]
fn tokens_expose_both_counts() {
    let text = load_fixture("mixed.txt");
    let tokens = Tokens::from_text(&text, HyphenPolicy::Join);
    assert_eq!(tokens.word_count(), 12);
    assert_eq!(tokens.sentence_count(), 3);
    assert!(!tokens.is_empty());
}

#[test]
fn punctuation_only_tokens_are_empty() {
    let tokens = Tokens::from_text("!!! ?? .. --", HyphenPolicy::Join);
    assert_eq!(tokens.word_count(), 0);
    assert!(tokens.is_empty());
}

// ============================================================================
// Syllables
// ============================================================================

#[test]
fn known_syllable_counts() {
    assert_eq!(count_syllables("cat"), 1);
    assert_eq!(count_syllables("elephant"), 3);
    assert_eq!(count_syllables("собака"), 3);
    assert_eq!(count_syllables("преимущество"), 5);
}

#[test]
fn every_fixture_word_has_a_syllable() {
    for name in ["mixed.txt", "essay_en.txt"] {
        let text = load_fixture(name);
        for word in split_words(&text) {
            assert!(count_syllables(word) >= 1, "{} in {}", word, name);
        }
    }
}

#[test]
fn case_does_not_change_count() {
    for word in ["Elephant", "СОБАКА", "ПреимуЩество", "RHYTHM"] {
        assert_eq!(count_syllables(word), count_syllables(&word.to_lowercase()));
    }
}
