//! Document types.

use textstat_types::{AnalyzerConfig, CaseFolding, TextError};

use crate::analyzer::folding;

/// Original text together with its cleaned form.
///
/// Both halves are only ever written together by `Document::set_text*`.
#[derive(Debug, Clone)]
pub(crate) struct TextPair {
    pub(crate) original: String,
    pub(crate) clean: String,
}

/// Statistics view over one block of text.
///
/// Created empty; populated by [`set_text`](Document::set_text) and replaced
/// wholesale by the next call. Every query before the first `set_text` fails
/// with `TextError::NoTextSet`.
///
/// Derived structures (word list, frequency and length tables) are rebuilt
/// from the cached text on each query.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) text: Option<TextPair>,
    pub(crate) config: AnalyzerConfig,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document using the detected case-folding capability.
    pub fn new() -> Self {
        Self::with_config(folding::detected_config())
    }

    /// Creates an empty document with explicit configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { text: None, config }
    }

    /// Returns the configuration in use.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> AnalyzerConfig {
        self.config
    }

    /// Folding mode used by case-insensitive frequency queries.
    #[inline(always)]
    #[must_use]
    pub fn case_folding(&self) -> CaseFolding {
        self.config.case_folding
    }

    /// Returns `true` once text has been set.
    #[inline(always)]
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    /// The text exactly as it was set.
    pub fn original_text(&self) -> Result<&str, TextError> {
        self.pair().map(|p| p.original.as_str())
    }

    /// The cleaned form of the text.
    pub fn clean_text(&self) -> Result<&str, TextError> {
        self.pair().map(|p| p.clean.as_str())
    }

    #[inline]
    pub(crate) fn pair(&self) -> Result<&TextPair, TextError> {
        self.text.as_ref().ok_or(TextError::NoTextSet)
    }
}
