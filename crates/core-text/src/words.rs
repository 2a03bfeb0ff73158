//! Word-boundary helpers for the wrap policy.

use unicode_segmentation::UnicodeSegmentation;

/// Split `line` into everything before its last space and the word after it.
///
/// Matches "split on single spaces, pop the last token, re-join the rest with
/// single spaces": runs of spaces survive in the remainder untouched and a
/// trailing space yields an empty last word. Without any space the remainder
/// is empty and the whole line is the last word.
pub fn split_last_word(line: &str) -> (&str, &str) {
    line.rsplit_once(' ').unwrap_or(("", line))
}

/// Remove the last grapheme cluster of `s`, returning it.
pub fn pop_grapheme(s: &mut String) -> Option<String> {
    let (start, last) = s.grapheme_indices(true).next_back()?;
    let last = last.to_string();
    s.truncate(start);
    Some(last)
}
