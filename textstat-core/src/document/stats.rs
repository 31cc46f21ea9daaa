//! Length, frequency and section statistics, plus the summary snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use textstat_types::{
    CaseFolding, Extreme, FrequencyOptions, FrequencyTable, LengthTable, Selector, TextError,
};
use tracing::trace;

use crate::analyzer::normalizer::TextNormalizer;
use crate::analyzer::tokenizer::{count_words, tokenize};
use crate::document::types::Document;

/// Applies `selector` to the word counts of each section.
///
/// Each section is cleaned with the default exclusion pattern and split into
/// words first. Pass the output of [`Document::lines`] or
/// [`Document::sentences`] to get shortest/longest/average line or sentence
/// length in words.
///
/// # Errors
///
/// `TextError::EmptySelection` (Min/Max) or `TextError::DivisionByZero`
/// (Average) when `sections` is empty.
pub fn section_length_stat<S>(selector: Selector, sections: &[S]) -> Result<f64, TextError>
where
    S: AsRef<str>,
{
    let normalizer = TextNormalizer::default();
    let mut buf = String::new();
    let mut counts: SmallVec<[usize; 32]> = SmallVec::with_capacity(sections.len());

    for section in sections {
        normalizer.clean_into(section.as_ref(), &mut buf);
        counts.push(count_words(&buf));
    }

    trace!(sections = counts.len(), %selector, "section_length_stat");
    selector.reduce(counts, "section length")
}

impl Document {
    /// Length of the original text in characters (Unicode scalar values).
    ///
    /// With `include_whitespace == false`, whitespace is removed first.
    pub fn length(&self, include_whitespace: bool) -> Result<usize, TextError> {
        let original = &self.pair()?.original;
        Ok(if include_whitespace {
            original.chars().count()
        } else {
            original.chars().filter(|c| !c.is_whitespace()).count()
        })
    }

    /// Alias of [`length`](Self::length).
    #[inline]
    pub fn character_count(&self, include_whitespace: bool) -> Result<usize, TextError> {
        self.length(include_whitespace)
    }

    /// Character length of every distinct word, in first-seen order.
    pub fn lengths_by_word(&self) -> Result<LengthTable, TextError> {
        let clean = &self.pair()?.clean;
        let mut table = LengthTable::new();
        tokenize(clean, |word, _| {
            table.insert(word.to_owned(), word.chars().count());
        });
        Ok(table)
    }

    /// Every word whose length equals the shortest or longest length.
    ///
    /// Ties are all included, in first-seen order.
    pub fn words_at_extreme(&self, extreme: Extreme) -> Result<LengthTable, TextError> {
        let mut table = self.lengths_by_word()?;
        let target = Selector::from(extreme).reduce(table.values().copied(), "word length")?;
        table.retain(|_, &len| len as f64 == target);
        Ok(table)
    }

    /// Shortest words. See [`words_at_extreme`](Self::words_at_extreme).
    #[inline]
    pub fn shortest_words(&self) -> Result<LengthTable, TextError> {
        self.words_at_extreme(Extreme::Min)
    }

    /// Longest words. See [`words_at_extreme`](Self::words_at_extreme).
    #[inline]
    pub fn longest_words(&self) -> Result<LengthTable, TextError> {
        self.words_at_extreme(Extreme::Max)
    }

    /// Applies `selector` to the lengths of distinct words.
    pub fn word_length_stat(&self, selector: Selector) -> Result<f64, TextError> {
        let table = self.lengths_by_word()?;
        selector.reduce(table.values().copied(), "word length")
    }

    #[inline]
    pub fn average_word_length(&self) -> Result<f64, TextError> {
        self.word_length_stat(Selector::Average)
    }

    /// Word frequency table.
    ///
    /// With `case_sensitive == false` every word is folded with the
    /// document's [`CaseFolding`] before counting. When `sorted`, entries are
    /// ordered by descending count with ties in first-seen order. A non-zero
    /// `limit` keeps only the first `limit` entries.
    pub fn unique_words(&self, options: FrequencyOptions) -> Result<FrequencyTable, TextError> {
        let clean = &self.pair()?.clean;
        let folding = self.config.case_folding;
        let mut table = FrequencyTable::new();

        tokenize(clean, |word, _| {
            let key = if options.case_sensitive {
                word.to_owned()
            } else {
                folding.fold(word)
            };
            table.increment(key);
        });

        if options.sorted {
            table.sort_by_value_desc();
        }
        if options.limit > 0 {
            table.truncate(options.limit);
        }
        Ok(table)
    }

    /// Number of distinct words.
    pub fn unique_word_count(&self, case_sensitive: bool) -> Result<usize, TextError> {
        let options = FrequencyOptions::default().case_sensitive(case_sensitive);
        self.unique_words(options).map(|t| t.len())
    }

    /// Distinct words as a percentage of all words.
    ///
    /// # Errors
    ///
    /// `TextError::DivisionByZero` if the word count is zero. Word splitting
    /// always yields at least one word, so a document with text never hits it.
    pub fn unique_word_percentage(&self, case_sensitive: bool) -> Result<f64, TextError> {
        let total = self.word_count()?;
        let unique = self.unique_word_count(case_sensitive)?;
        unique_percentage(unique, total)
    }

    /// [`section_length_stat`] over this document's lines.
    pub fn line_length_stat(&self, selector: Selector) -> Result<f64, TextError> {
        section_length_stat(selector, &self.lines()?)
    }

    /// [`section_length_stat`] over this document's sentences.
    pub fn sentence_length_stat(&self, selector: Selector) -> Result<f64, TextError> {
        section_length_stat(selector, &self.sentences()?)
    }

    /// Snapshot of the headline statistics.
    pub fn summary(&self) -> Result<TextSummary, TextError> {
        Ok(TextSummary {
            characters: self.length(true)?,
            characters_without_whitespace: self.length(false)?,
            words: self.word_count()?,
            unique_words: self.unique_word_count(true)?,
            unique_word_percentage: self.unique_word_percentage(true)?,
            lines: self.line_count()?,
            sentences: self.sentence_count()?,
            shortest_word_length: self.word_length_stat(Selector::Min)? as usize,
            longest_word_length: self.word_length_stat(Selector::Max)? as usize,
            average_word_length: self.average_word_length()?,
            average_words_per_line: self.line_length_stat(Selector::Average)?,
            average_words_per_sentence: self.sentence_length_stat(Selector::Average)?,
            case_folding: self.config.case_folding,
        })
    }
}

fn unique_percentage(unique: usize, total: usize) -> Result<f64, TextError> {
    if total == 0 {
        return Err(TextError::DivisionByZero {
            metric: "unique word percentage",
        });
    }
    Ok(100.0 * unique as f64 / total as f64)
}

/// A snapshot of document statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSummary {
    /// Characters in the original text.
    pub characters: usize,
    /// Characters in the original text, whitespace excluded.
    pub characters_without_whitespace: usize,
    /// Words in the cleaned text.
    pub words: usize,
    /// Distinct words (case-sensitive).
    pub unique_words: usize,
    /// `unique_words / words` as a percentage.
    pub unique_word_percentage: f64,
    /// Lines in the original text.
    pub lines: usize,
    /// Sentences in the original text.
    pub sentences: usize,
    /// Length of the shortest distinct word.
    pub shortest_word_length: usize,
    /// Length of the longest distinct word.
    pub longest_word_length: usize,
    /// Mean length over distinct words.
    pub average_word_length: f64,
    /// Mean words per line.
    pub average_words_per_line: f64,
    /// Mean words per sentence.
    pub average_words_per_sentence: f64,
    /// Folding mode the document was configured with.
    pub case_folding: CaseFolding,
}

impl core::fmt::Display for TextSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words ({} unique, {:.1}%), {} lines, {} sentences, {} chars",
            self.words,
            self.unique_words,
            self.unique_word_percentage,
            self.lines,
            self.sentences,
            self.characters
        )?;

        write!(
            f,
            ", word length {}..{} (avg {:.2}), {:.2} words/line, {:.2} words/sentence",
            self.shortest_word_length,
            self.longest_word_length,
            self.average_word_length,
            self.average_words_per_line,
            self.average_words_per_sentence
        )
    }
}
