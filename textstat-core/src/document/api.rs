//! Public API for setting text and reading its segments.

use textstat_types::{PositionTable, TextError};
use tracing::{debug, debug_span, trace};

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::pattern;
use crate::analyzer::tokenizer::{
    count_words, split_lines, split_sentences, split_words, tokenize, DEFAULT_LINES,
    DEFAULT_SENTENCES,
};
use crate::document::types::{Document, TextPair};

/// Character offset of the first occurrence of `needle` in `haystack`.
#[inline]
fn char_offset(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}

impl Document {
    /// Sets the text, cleaning it with the default exclusion pattern.
    ///
    /// Replaces any previously set text.
    pub fn set_text(&mut self, text: &str) {
        self.store(text, &TextNormalizer::default());
    }

    /// Sets the text, cleaning it with a caller-supplied exclusion pattern.
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidPattern` if the pattern does not compile; the
    /// document keeps its previous text in that case.
    pub fn set_text_with(&mut self, text: &str, exclude_pattern: &str) -> Result<(), TextError> {
        let normalizer = TextNormalizer::with_pattern(exclude_pattern)?;
        self.store(text, &normalizer);
        Ok(())
    }

    fn store(&mut self, text: &str, normalizer: &TextNormalizer) {
        let span = debug_span!("document.set_text", original_len = text.len());
        let _guard = span.enter();

        let clean = normalizer.clean(text);
        debug!(
            clean_len = clean.len(),
            pattern = normalizer.pattern(),
            "text_set"
        );

        self.text = Some(TextPair {
            original: text.to_owned(),
            clean,
        });
    }

    /// Words of the cleaned text, in order, split on single spaces.
    ///
    /// Never empty: an empty text has one empty word.
    pub fn words(&self) -> Result<Vec<&str>, TextError> {
        self.pair().map(|p| split_words(&p.clean))
    }

    /// Number of words. At least 1, even for empty text.
    pub fn word_count(&self) -> Result<usize, TextError> {
        self.pair().map(|p| count_words(&p.clean))
    }

    /// Lines of the original text.
    pub fn lines(&self) -> Result<Vec<&str>, TextError> {
        self.lines_by(None)
    }

    /// Lines of the original text split on a caller-supplied separator.
    pub fn lines_with(&self, separator: &str) -> Result<Vec<&str>, TextError> {
        self.lines_by(Some(separator))
    }

    fn lines_by(&self, separator: Option<&str>) -> Result<Vec<&str>, TextError> {
        let pair = self.pair()?;
        let separator = pattern::resolve(separator, &DEFAULT_LINES)?;
        Ok(split_lines(&pair.original, &separator))
    }

    /// Number of lines.
    pub fn line_count(&self) -> Result<usize, TextError> {
        self.lines().map(|lines| lines.len())
    }

    /// Sentences of the original text, terminators retained.
    pub fn sentences(&self) -> Result<Vec<&str>, TextError> {
        self.sentences_by(None)
    }

    /// Sentences split on a caller-supplied boundary pattern.
    ///
    /// Text matched by capture group 1 stays with the preceding sentence.
    pub fn sentences_with(&self, boundary: &str) -> Result<Vec<&str>, TextError> {
        self.sentences_by(Some(boundary))
    }

    fn sentences_by(&self, boundary: Option<&str>) -> Result<Vec<&str>, TextError> {
        let pair = self.pair()?;
        let boundary = pattern::resolve(boundary, &DEFAULT_SENTENCES)?;
        Ok(split_sentences(&pair.original, &boundary))
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> Result<usize, TextError> {
        self.sentences().map(|s| s.len())
    }

    /// Maps character offsets in the original text to words.
    ///
    /// Each word is located by searching for its first occurrence, not by
    /// tracking a cursor: every repetition of a word resolves to the offset
    /// of its first appearance, so repeated words contribute a single entry.
    pub fn word_positions(&self) -> Result<PositionTable, TextError> {
        let pair = self.pair()?;
        let mut table = PositionTable::new();

        tokenize(&pair.clean, |word, _| match char_offset(&pair.original, word) {
            Some(offset) => {
                table.insert(offset, word.to_owned());
            }
            None => trace!(word, "word_not_in_original"),
        });

        Ok(table)
    }
}
