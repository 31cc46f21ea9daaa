//! Segmentation Module
//!
//! Splits text into the three units every metric is built from: words, lines
//! and sentences.
//!
//! ## Words
//!
//! Words come from **cleaned** text and are split on the literal ASCII space
//! (0x20), never on a pattern. Splitting is exact: an empty input yields one
//! empty word, so a document always has at least one word.
//!
//! ```rust
//! use textstat_core::analyzer::tokenizer::split_words;
//!
//! assert_eq!(split_words("hello world"), vec!["hello", "world"]);
//! assert_eq!(split_words(""), vec![""]);
//! ```
//!
//! ## Lines and sentences
//!
//! Lines and sentences come from the **original** text:
//!
//! - Lines split on `\n` or `\r` independently, so `"\r\n"` produces an empty
//!   line between the two separators.
//! - Sentences split on whitespace that follows `!`, `?` or `.`; the
//!   punctuation stays with the preceding sentence.
//!
//! Both accept an override pattern. For sentences, the text matched by
//! capture group 1 (when the group participates) is kept at the end of the
//! preceding sentence; the rest of the match is dropped.

use memchr::memchr_iter;
use once_cell::sync::Lazy;
use regex::Regex;

/// Default line separator: a single `\n` or `\r`.
pub const DEFAULT_LINE_PATTERN: &str = r"\n|\r";

/// Default sentence boundary: terminator (retained) plus following whitespace.
pub const DEFAULT_SENTENCE_PATTERN: &str = r"([!?.])\s+";

pub(crate) static DEFAULT_LINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_LINE_PATTERN).expect("default line pattern must compile"));

pub(crate) static DEFAULT_SENTENCES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_SENTENCE_PATTERN).expect("default sentence pattern must compile")
});

/// Streams the words of cleaned text, emitting `(word, position)`.
///
/// Empty pieces between adjacent spaces are emitted too; splitting is exact.
#[inline]
pub fn tokenize<'c, F>(clean: &'c str, mut emit: F)
where
    F: FnMut(&'c str, usize),
{
    let mut start = 0usize;
    let mut pos = 0usize;

    for i in memchr_iter(b' ', clean.as_bytes()) {
        // Space is a single-byte code point, so `start..i` is a char boundary.
        emit(&clean[start..i], pos);
        pos += 1;
        start = i + 1;
    }

    emit(&clean[start..], pos);
}

/// Splits cleaned text into its ordered word list.
pub fn split_words(clean: &str) -> Vec<&str> {
    let mut out = Vec::with_capacity(count_words(clean));
    tokenize(clean, |word, _| out.push(word));
    out
}

/// Counts words without allocating. Never returns 0.
#[inline]
pub fn count_words(clean: &str) -> usize {
    memchr_iter(b' ', clean.as_bytes()).count() + 1
}

/// Splits text on every match of `separator`.
pub fn split_lines<'t>(text: &'t str, separator: &Regex) -> Vec<&'t str> {
    separator.split(text).collect()
}

/// Splits text into sentences at every match of `boundary`.
///
/// Capture group 1, when it participates, stays with the preceding sentence.
pub fn split_sentences<'t>(text: &'t str, boundary: &Regex) -> Vec<&'t str> {
    let mut out = Vec::new();
    let mut start = 0usize;

    for caps in boundary.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let end = caps.get(1).map_or(whole.start(), |kept| kept.end());
        out.push(&text[start..end]);
        start = whole.end();
    }

    out.push(&text[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        split_lines(text, &DEFAULT_LINES)
    }

    fn sentences(text: &str) -> Vec<&str> {
        split_sentences(text, &DEFAULT_SENTENCES)
    }

    #[test]
    fn single_word() {
        assert_eq!(split_words("hello"), vec!["hello"]);
    }

    #[test]
    fn words_in_order() {
        assert_eq!(
            split_words("the quick brown fox"),
            vec!["the", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn empty_text_is_one_empty_word() {
        assert_eq!(split_words(""), vec![""]);
        assert_eq!(count_words(""), 1);
    }

    #[test]
    fn adjacent_spaces_yield_empty_words() {
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
    }

    #[test]
    fn non_space_whitespace_does_not_split() {
        assert_eq!(split_words("one two\nthree"), vec!["one", "two\nthree"]);
    }

    #[test]
    fn positions_are_sequential() {
        let mut seen = Vec::new();
        tokenize("a b c", |w, p| seen.push((w, p)));
        assert_eq!(seen, vec![("a", 0), ("b", 1), ("c", 2)]);
    }

    #[test]
    fn words_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr <= end);
        });
    }

    #[test]
    fn multibyte_words() {
        assert_eq!(split_words("привет 世界 café"), vec!["привет", "世界", "café"]);
    }

    #[test]
    fn count_matches_split() {
        for s in ["", "a", "a b", "a  b c", "x y z w"] {
            assert_eq!(count_words(s), split_words(s).len());
        }
    }

    #[test]
    fn lines_split_on_newline() {
        assert_eq!(lines("one two\nthree"), vec!["one two", "three"]);
    }

    #[test]
    fn crlf_yields_empty_line() {
        assert_eq!(lines("a\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn lines_of_empty_text() {
        assert_eq!(lines(""), vec![""]);
    }

    #[test]
    fn sentences_keep_terminator() {
        assert_eq!(
            sentences("The cat sat. The dog ran!"),
            vec!["The cat sat.", "The dog ran!"]
        );
    }

    #[test]
    fn sentences_need_whitespace_after_terminator() {
        assert_eq!(sentences("3.14 is pi"), vec!["3.14 is pi"]);
        assert_eq!(sentences("Really?!  Yes."), vec!["Really?!", "Yes."]);
    }

    #[test]
    fn trailing_boundary_leaves_empty_sentence() {
        assert_eq!(sentences("Done. "), vec!["Done.", ""]);
    }

    #[test]
    fn sentences_of_empty_text() {
        assert_eq!(sentences(""), vec![""]);
    }

    #[test]
    fn override_without_group_drops_match() {
        let semi = Regex::new(r";\s*").expect("should compile");
        assert_eq!(split_sentences("a; b;c", &semi), vec!["a", "b", "c"]);
    }

    #[test]
    fn override_with_group_retains_it() {
        let bang = Regex::new(r"(!+)\s*").expect("should compile");
        assert_eq!(split_sentences("hey!! you", &bang), vec!["hey!!", "you"]);
    }
}
