use once_cell::sync::Lazy;
use regex::Regex;
use textstat_types::TextError;

use crate::analyzer::pattern;

/// Punctuation runs, plus symbol clusters that end at whitespace, punctuation
/// or the end of the text.
///
/// The symbol alternative swallows what trails it so that a cleaned string
/// never exposes a new symbol cluster to a second pass.
pub const DEFAULT_EXCLUDE_PATTERN: &str =
    r#"[!?,.:;/\\]+|[#$%&*+\-<=>@^_|~\[\](){}"'`]+(?:[\s!?,.:;/\\]+|$)"#;

static DEFAULT_EXCLUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_EXCLUDE_PATTERN).expect("default exclude pattern must compile")
});

#[inline(always)]
const fn is_trim_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Text cleaner feeding every word-level metric.
///
/// Performs, in order:
/// - Replaces each match of the exclusion pattern with a single space
/// - Collapses runs of ASCII spaces (0x20 only) into one space
/// - Removes leading/trailing ASCII whitespace
///
/// Tabs and line breaks inside the text survive cleaning; only the
/// exclusion pattern or trimming removes them.
///
/// # Examples
///
/// ```
/// use textstat_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.clean("  Hello,   world!  "), "Hello world");
/// assert_eq!(normalizer.clean("one -- two"), "one two");
/// ```
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    exclude: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_EXCLUDE.clone(),
        }
    }
}

impl TextNormalizer {
    /// Creates a normalizer with a caller-supplied exclusion pattern.
    ///
    /// # Errors
    ///
    /// Returns `TextError::InvalidPattern` if the pattern does not compile.
    pub fn with_pattern(exclude_pattern: &str) -> Result<Self, TextError> {
        Ok(Self {
            exclude: pattern::compile(exclude_pattern)?,
        })
    }

    /// The exclusion pattern in use.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.exclude.as_str()
    }

    /// Cleans text into an existing String buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity.
    pub fn clean_into(&self, input: &str, out: &mut String) {
        out.clear();

        let replaced = self.exclude.replace_all(input, " ");
        let trimmed = replaced.trim_matches(is_trim_char);
        out.reserve(trimmed.len());

        let mut prev_space = false;
        for ch in trimmed.chars() {
            if ch == ' ' {
                if !prev_space {
                    out.push(' ');
                    prev_space = true;
                }
            } else {
                out.push(ch);
                prev_space = false;
            }
        }
    }

    /// Cleans text and returns a new String.
    #[inline]
    pub fn clean(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.clean_into(input, &mut out);
        out
    }
}

/// Cleans `text` with a one-off exclusion pattern.
///
/// # Errors
///
/// Returns `TextError::InvalidPattern` if `exclude_pattern` does not compile.
pub fn clean(text: &str, exclude_pattern: &str) -> Result<String, TextError> {
    TextNormalizer::with_pattern(exclude_pattern).map(|n| n.clean(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn norm(input: &str) -> String {
        TextNormalizer::default().clean(input)
    }

    #[test]
    fn default_pattern_compiles() {
        assert_eq!(TextNormalizer::default().pattern(), DEFAULT_EXCLUDE_PATTERN);
    }

    #[test]
    fn sentence_punctuation_removed() {
        assert_eq!(norm("The cat sat. The dog ran!"), "The cat sat The dog ran");
        assert_eq!(norm("wait... what?!"), "wait what");
        assert_eq!(norm("a,b;c:d"), "a b c d");
    }

    #[test]
    fn slashes_removed() {
        assert_eq!(norm(r"and/or back\slash"), "and or back slash");
    }

    #[test]
    fn separator_clusters_removed() {
        assert_eq!(norm("one -- two"), "one two");
        assert_eq!(norm("header ===== body"), "header body");
        assert_eq!(norm("header\n=====\nbody"), "header\n body");
        assert_eq!(norm("a *** b ### c"), "a b c");
    }

    #[test]
    fn separator_at_end_removed() {
        assert_eq!(norm("closing ~~"), "closing");
        assert_eq!(norm("(aside)"), "(aside");
    }

    #[test]
    fn inner_symbols_kept() {
        assert_eq!(norm("don't re-use e-mail"), "don't re-use e-mail");
        assert_eq!(norm("snake_case"), "snake_case");
    }

    #[test]
    fn symbol_before_punctuation_removed() {
        assert_eq!(norm("a -. b"), "a b");
        assert_eq!(norm("end-."), "end");
    }

    #[test]
    fn space_runs_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert!(!norm("a  b   c    d").contains("  "));
    }

    #[test]
    fn tabs_and_newlines_survive_inside() {
        assert_eq!(norm("a\tb"), "a\tb");
        assert_eq!(norm("one two\nthree"), "one two\nthree");
    }

    #[test]
    fn outer_whitespace_trimmed() {
        assert_eq!(norm("  \t hello \n "), "hello");
        assert_eq!(norm("\r\n"), "");
    }

    #[test]
    fn no_matches_only_trims() {
        assert_eq!(norm("  plain words  "), "plain words");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn only_punctuation() {
        assert_eq!(norm("?!..,"), "");
        assert_eq!(norm("-- ** --"), "");
    }

    #[test]
    fn unicode_passthrough() {
        assert_eq!(norm("Café, naïve!"), "Café naïve");
        assert_eq!(norm("ПРИВЕТ мир."), "ПРИВЕТ мир");
        assert_eq!(norm("你好 世界"), "你好 世界");
    }

    #[test]
    fn custom_pattern() {
        let digits = TextNormalizer::with_pattern(r"\d+").expect("should compile");
        assert_eq!(digits.clean("a1b22c"), "a b c");
        assert_eq!(digits.clean("keep, punctuation."), "keep, punctuation.");
    }

    #[test]
    fn invalid_custom_pattern() {
        let err = clean("text", "[unterminated").unwrap_err();
        assert!(matches!(err, TextError::InvalidPattern { .. }));
    }

    #[test]
    fn clean_fn_matches_method() {
        let out = clean("x | y", DEFAULT_EXCLUDE_PATTERN).expect("should compile");
        assert_eq!(out, norm("x | y"));
    }

    #[test]
    fn clean_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.clean_into("Hello, world.", &mut buf);
        assert_eq!(buf, "Hello world");
        assert_eq!(buf.capacity(), cap);

        normalizer.clean_into("again!", &mut buf);
        assert_eq!(buf, "again");
    }

    #[test]
    fn idempotent_on_samples() {
        let samples = [
            "The cat sat. The dog ran!",
            "x -. -y",
            "a - \t b ~",
            "(hello) [world] {foo}",
            "'quoted' \"double\" `tick`",
        ];
        for s in samples {
            let once = norm(s);
            assert_eq!(norm(&once), once, "input: {s:?}");
        }
    }

    proptest! {
        /// Cleaning a cleaned string changes nothing.
        #[test]
        fn clean_is_idempotent(text in r#"[a-zA-Zé Ü\t\n\r!?,.:;/#$%&*+<=>@^_|~(){}'"-]{0,64}"#) {
            let once = norm(&text);
            prop_assert_eq!(norm(&once), once);
        }

        /// Cleaned text never carries the excluded punctuation or double spaces.
        #[test]
        fn clean_strips_punctuation(text in r#"[a-z !?,.:;/-]{0,64}"#) {
            let out = norm(&text);
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.chars().any(|c| "!?,.:;/".contains(c)));
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        }
    }
}
