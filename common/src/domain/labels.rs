//! # Domain Labels
//!
//! Helpers for looking at a target domain as a sequence of `.`-delimited labels.
//!
//! Label sequences are never cached: every caller splits the target it is
//! currently working on, so the labels always reflect the string in hand.

use tracing::debug;

pub const LABEL_DELIMITER: char = '.';

/// Splits `domain` on every occurrence of `delimiter`.
///
/// Quirks callers must handle:
/// * A domain without any delimiter yields an **empty** sequence, not a
///   sequence holding the whole string.
/// * Empty segments between delimiters (and a leading empty segment) are kept.
/// * A trailing empty segment after a final delimiter is dropped.
pub fn split(domain: &str, delimiter: char) -> Vec<&str> {
    if !domain.contains(delimiter) {
        return Vec::new();
    }

    let mut labels: Vec<&str> = domain.split(delimiter).collect();
    if labels.last().is_some_and(|last| last.is_empty()) {
        labels.pop();
    }
    labels
}

/// Splits a domain on [`LABEL_DELIMITER`].
pub fn labels(domain: &str) -> Vec<&str> {
    split(domain, LABEL_DELIMITER)
}

pub fn count_char(domain: &str, character: char) -> usize {
    domain.chars().filter(|c| *c == character).count()
}

/// Reports whether any two labels of `domain` are identical (case-sensitive),
/// regardless of their position. Catches degenerate output like `one.one.com`.
pub fn has_repeated_label(domain: &str) -> bool {
    let labels = labels(domain);
    for (i, label) in labels.iter().enumerate() {
        if labels[i + 1..].contains(label) {
            debug!("Repeats found in {domain}.");
            return true;
        }
    }
    false
}

/// Replaces the first textual occurrence of `needle` in `haystack` with `with`.
///
/// This is a plain substring search and is not aware of label boundaries:
/// when the needle text recurs earlier in the string (e.g. label `1` in
/// `a1.1.com`) the earlier occurrence is the one replaced. Returns the
/// haystack unchanged when the needle does not occur.
pub fn replace_first(haystack: &str, needle: &str, with: &str) -> String {
    haystack.replacen(needle, with, 1)
}

/// True for a non-empty string made only of ASCII digits.
pub fn is_integer(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}
