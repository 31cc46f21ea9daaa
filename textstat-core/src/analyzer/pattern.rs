//! Pattern compilation.
//!
//! Every pipeline stage that accepts a caller override (cleaning, line
//! splitting, sentence splitting) funnels it through [`compile`], so a bad
//! pattern is reported the same way no matter which call received it.

use std::borrow::Cow;

use regex::Regex;
use textstat_types::TextError;
use tracing::warn;

/// Compiles a caller-supplied pattern.
///
/// # Errors
///
/// Returns `TextError::InvalidPattern` carrying the engine's message when the
/// pattern does not parse.
pub fn compile(pattern: &str) -> Result<Regex, TextError> {
    Regex::new(pattern).map_err(|err| {
        warn!(pattern, error = %err, "pattern_rejected");
        TextError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: err.to_string(),
        }
    })
}

/// Returns the compiled override, or the built-in default when none is given.
pub fn resolve<'d>(
    custom: Option<&str>,
    default: &'d Regex,
) -> Result<Cow<'d, Regex>, TextError> {
    match custom {
        Some(pattern) => compile(pattern).map(Cow::Owned),
        None => Ok(Cow::Borrowed(default)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_pattern_compiles() {
        let re = compile(r"\d+").expect("should compile");
        assert!(re.is_match("abc 123"));
    }

    #[test]
    fn invalid_pattern_reports_source() {
        let err = compile("(unclosed").unwrap_err();
        match err {
            TextError::InvalidPattern { pattern, reason } => {
                assert_eq!(pattern, "(unclosed");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolve_prefers_override() {
        let default = Regex::new("a").expect("should compile");
        let chosen = resolve(Some("b"), &default).expect("should compile");
        assert_eq!(chosen.as_str(), "b");

        let fallback = resolve(None, &default).expect("should compile");
        assert!(matches!(fallback, Cow::Borrowed(_)));
        assert_eq!(fallback.as_str(), "a");
    }

    #[test]
    fn resolve_propagates_errors() {
        let default = Regex::new("a").expect("should compile");
        assert!(resolve(Some("[z-a]"), &default).is_err());
    }
}
