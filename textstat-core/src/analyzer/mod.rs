//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Strips punctuation and separator runs from raw text
//! - **Tokenizer**: Splits text into words, lines and sentences
//! - **Pattern**: Compiles caller-supplied override patterns
//! - **Folding**: Probes the case-folding capability once per process

pub mod folding;
pub mod normalizer;
pub mod pattern;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use tokenizer::{split_lines, split_sentences, split_words, tokenize};
