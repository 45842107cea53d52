//! Index tokenization.
//!
//! The token class here is broader than the word-character class used for
//! whole-word matching: `$` and apostrophes group into tokens so the index
//! works as a coarse lookup structure (`"$alpha"`, `"alpha's"` stay whole).
//! Scoring never uses this class; it matches with
//! [`crate::matcher::count_occurrences`] against the raw text.

use crate::matcher::is_word_char;

/// Characters that group into index tokens: word characters plus `$` and
/// apostrophe.
pub fn is_index_char(c: char) -> bool {
    is_word_char(c) || c == '$' || c == '\''
}

/// Split text into lowercase index tokens: maximal runs of index characters,
/// in order of appearance, duplicates kept.
pub fn index_tokens(text: &str) -> Vec<String> {
    let folded: String = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    folded
        .split(|c: char| !is_index_char(c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
