//! Whole-word occurrence counting.

/// Word characters for whole-word boundary checks: ASCII letters, digits,
/// and underscore. Everything else (punctuation, `$`, apostrophe, hyphen,
/// whitespace) is a boundary.
///
/// Deliberately narrower than [`crate::tokenizer::is_index_char`]; the two
/// classes must stay separate. The index groups `$` and apostrophes into
/// tokens, scoring does not.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Count whole-word, case-insensitive occurrences of `needle` in `text`.
///
/// A candidate match counts only when the character before it (if any) and
/// the character after it (if any) are both non-word characters. The scan is
/// left-to-right and non-overlapping: a valid match advances past the
/// matched span, a boundary violation advances one character and retries, so
/// a bounded occurrence later in the text is still found even when the
/// needle first shows up inside a larger token (`"shooting ... shoot"`).
///
/// The needle may itself contain non-word characters (`"$5"`); the boundary
/// rule applies to the characters flanking the full needle. An empty needle
/// counts zero.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }

    // Per-char ASCII lowercasing keeps the folded view position-aligned
    // with the raw text; non-ASCII case folding is out of scope.
    let text: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();
    let needle: Vec<char> = needle.chars().map(|c| c.to_ascii_lowercase()).collect();
    let n_len = needle.len();

    let mut count = 0;
    let mut from = 0;
    while let Some(idx) = find_from(&text, &needle, from) {
        let before_ok = idx == 0 || !is_word_char(text[idx - 1]);
        let after_ok = idx + n_len == text.len() || !is_word_char(text[idx + n_len]);
        if before_ok && after_ok {
            count += 1;
            from = idx + n_len;
        } else {
            from = idx + 1;
        }
    }
    count
}

/// First index `>= from` at which `needle` occurs in `text`, if any.
fn find_from(text: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.len() > text.len() {
        return None;
    }
    (from..=text.len() - needle.len()).find(|&i| text[i..i + needle.len()] == *needle)
}
