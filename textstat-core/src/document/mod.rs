//! The stateful document and every metric derived from it.
//!
//! - **types**: the [`Document`] itself and its cached text pair
//! - **api**: setting text, words, lines, sentences, word positions
//! - **stats**: lengths, frequencies, extremes, section statistics, summary

pub mod api;
pub mod stats;
pub mod types;

pub use stats::{section_length_stat, TextSummary};
pub use types::Document;
