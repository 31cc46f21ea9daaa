//! Descriptive statistics over a block of text.
//!
//! Set text once on a [`Document`], then query word, line and sentence
//! counts, word-frequency tables, word-length extremes and unique-word
//! ratios. All metrics are derived from the original text and its cleaned
//! form (punctuation and separator runs replaced by spaces).
//!
//! ```
//! use textstat_core::{Document, FrequencyOptions, Selector};
//!
//! let mut doc = Document::new();
//! doc.set_text("The cat sat. The dog ran!");
//!
//! assert_eq!(doc.sentence_count().unwrap(), 2);
//! assert_eq!(doc.word_count().unwrap(), 6);
//!
//! let top = doc
//!     .unique_words(FrequencyOptions::default().sorted(true).limit(1))
//!     .unwrap();
//! assert_eq!(top.get("The"), Some(&2));
//!
//! assert_eq!(doc.line_length_stat(Selector::Average).unwrap(), 6.0);
//! ```

pub mod analyzer;
pub mod document;

pub use document::{section_length_stat, Document, TextSummary};
pub use textstat_types::{
    AnalyzerConfig, CaseFolding, Extreme, FrequencyOptions, FrequencyTable, LengthTable,
    OrderedMap, PositionTable, Selector, TextError,
};
