//! Core types and errors for the textstat library.
//!
//! This crate holds the value types shared by the analyzer and its callers.
//! Keeping them separate ensures:
//!
//! - **No text processing here**: only data shapes, reducers and errors
//! - **Cross-crate compatibility**: the core library and the CLI share the same types
//! - **Clean boundaries**: no circular dependencies between crates

#![warn(missing_docs)]

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by text analysis.
///
/// All variants are cloneable and comparable so tests can match them exactly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextError {
    /// A metric was requested before any text was set on the document.
    #[error("no text has been set on this document")]
    NoTextSet,

    /// A caller-supplied pattern was rejected by the regular-expression engine.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The engine's description of what is wrong with it.
        reason: String,
    },

    /// An average or percentage was requested over an empty set.
    #[error("division by zero while computing {metric}")]
    DivisionByZero {
        /// The metric being computed.
        metric: &'static str,
    },

    /// A minimum or maximum was requested over an empty set.
    #[error("no values to select from while computing {metric}")]
    EmptySelection {
        /// The metric being computed.
        metric: &'static str,
    },
}

impl TextError {
    /// Returns true if the error was caused by how the caller used the API
    /// (missing text or a bad pattern) rather than by the shape of the data.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, TextError::NoTextSet | TextError::InvalidPattern { .. })
    }
}

/// Reducer applied to a set of numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selector {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Arithmetic mean.
    Average,
}

impl Selector {
    /// Reduces `values` with this selector.
    ///
    /// `metric` names the quantity for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `TextError::EmptySelection` for `Min`/`Max` and
    /// `TextError::DivisionByZero` for `Average` when `values` is empty.
    pub fn reduce<I>(self, values: I, metric: &'static str) -> Result<f64, TextError>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut count = 0usize;
        let mut sum = 0usize;
        let mut min = usize::MAX;
        let mut max = 0usize;

        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }

        if count == 0 {
            return Err(match self {
                Selector::Average => TextError::DivisionByZero { metric },
                Selector::Min | Selector::Max => TextError::EmptySelection { metric },
            });
        }

        Ok(match self {
            Selector::Min => min as f64,
            Selector::Max => max as f64,
            Selector::Average => sum as f64 / count as f64,
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Selector::Min => "min",
            Selector::Max => "max",
            Selector::Average => "average",
        };
        f.write_str(name)
    }
}

/// Which end of a length distribution to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extreme {
    /// Shortest entries.
    Min,
    /// Longest entries.
    Max,
}

impl From<Extreme> for Selector {
    #[inline(always)]
    fn from(e: Extreme) -> Self {
        match e {
            Extreme::Min => Selector::Min,
            Extreme::Max => Selector::Max,
        }
    }
}

/// Case-folding mode used when words are compared case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    /// Full Unicode lowercase mapping ("ÜBER" -> "über").
    Unicode,
    /// ASCII letters only; everything else passes through ("ÜBER" -> "Über").
    Ascii,
}

impl CaseFolding {
    /// Folds a word to lowercase under this mode.
    #[inline]
    pub fn fold(self, word: &str) -> String {
        match self {
            CaseFolding::Unicode => word.to_lowercase(),
            CaseFolding::Ascii => word.to_ascii_lowercase(),
        }
    }

    /// Returns true for full Unicode folding.
    #[inline(always)]
    pub const fn is_unicode(self) -> bool {
        matches!(self, CaseFolding::Unicode)
    }
}

impl fmt::Display for CaseFolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseFolding::Unicode => f.write_str("unicode"),
            CaseFolding::Ascii => f.write_str("ascii"),
        }
    }
}

/// Analyzer configuration.
///
/// Carries the case-folding capability into a document explicitly so that
/// nothing reads process-wide state per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Folding used by case-insensitive frequency queries.
    pub case_folding: CaseFolding,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::unicode()
    }
}

impl AnalyzerConfig {
    /// Configuration with full Unicode case folding.
    pub const fn unicode() -> Self {
        Self {
            case_folding: CaseFolding::Unicode,
        }
    }

    /// Configuration restricted to ASCII case folding.
    pub const fn ascii() -> Self {
        Self {
            case_folding: CaseFolding::Ascii,
        }
    }
}

/// Options for frequency queries.
///
/// Defaults: no limit, insertion order, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyOptions {
    /// Maximum number of entries to return; `0` means unlimited.
    pub limit: usize,
    /// Order entries by descending count, ties kept in first-seen order.
    pub sorted: bool,
    /// Treat differently-cased words as distinct.
    pub case_sensitive: bool,
}

impl Default for FrequencyOptions {
    fn default() -> Self {
        Self {
            limit: 0,
            sorted: false,
            case_sensitive: true,
        }
    }
}

impl FrequencyOptions {
    /// Sets the entry limit.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables descending-count ordering.
    #[must_use]
    pub const fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Enables or disables case sensitivity.
    #[must_use]
    pub const fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Insertion-ordered map.
///
/// Re-inserting an existing key replaces its value but keeps the key at its
/// original position, so iteration always follows first-seen order unless the
/// map is explicitly re-sorted.
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

/// Word -> occurrence count.
pub type FrequencyTable = OrderedMap<String, usize>;

/// Word -> length in Unicode scalar values.
pub type LengthTable = OrderedMap<String, usize>;

/// Character offset in the original text -> word.
pub type PositionTable = OrderedMap<usize, String>;

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}

impl<K: Hash + Eq + Clone, V> OrderedMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(capacity);
        Self {
            entries: Vec::with_capacity(capacity),
            index,
        }
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            return Some(core::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Returns true if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Number of entries.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in map order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterates keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterates values in map order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in map order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Consumes the map, returning its entries in order.
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Keeps only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.entries.len() {
            return;
        }
        for (key, _) in self.entries.drain(len..) {
            self.index.remove(&key);
        }
    }

    /// Keeps only entries for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.entries.retain(|(k, v)| keep(k, v));
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index.clear();
        for (slot, (key, _)) in self.entries.iter().enumerate() {
            self.index.insert(key.clone(), slot);
        }
    }
}

impl<K: Hash + Eq + Clone, V: Ord> OrderedMap<K, V> {
    /// Reorders entries by descending value.
    ///
    /// The sort is stable: equal values keep their current relative order.
    pub fn sort_by_value_desc(&mut self) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.reindex();
    }
}

impl<K: Hash + Eq + Clone> OrderedMap<K, usize> {
    /// Adds one to the count stored under `key`, inserting it at 1.
    pub fn increment(&mut self, key: K) {
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].1 += 1;
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, 1));
    }
}

impl<K: Hash + Eq + Clone, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    /// Maps are equal when they hold the same entries in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
