//! Text normalization and tokenization shared by deduplication, grading and
//! the import parsers.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Unique, order-irrelevant set of significant tokens.
pub type TokenSet = HashSet<String>;

/// Characters replaced by a single space before whitespace is collapsed.
const PUNCTUATION: &[char] = &[
    '"', '\'', '`', '-', '\u{2013}', '\u{2014}', '(', ')', '[', ']', '{', '}', '.', ',', ':',
    ';', '?', '!', '/', '\\',
];

/// Canonicalize text for comparison.
///
/// Decomposes to NFD, strips combining marks, lower-cases, turns the fixed
/// punctuation set into spaces and collapses whitespace. Never fails; empty
/// input yields an empty string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let folded: String = text
        .nfd()
        .filter(|c| !is_mark(*c))
        .flat_map(char::to_lowercase)
        // Some lower-case mappings (U+0130) emit a combining mark of their own.
        .filter(|c| !is_mark(*c))
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Combining mark by Unicode category, with the combining diacritics block as
/// a fixed fallback.
fn is_mark(c: char) -> bool {
    is_combining_mark(c) || ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Split normalized text into its set of tokens longer than one character.
pub fn tokenize(text: &str) -> TokenSet {
    tokens_of_normalized(&normalize(text))
}

/// Tokenize text that has already been through [`normalize`].
pub(crate) fn tokens_of_normalized(normalized: &str) -> TokenSet {
    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}
