//! Pattern matching for ownership rules.
//!
//! Each pattern is compiled into an anchored regular expression with a
//! single character substitution pass:
//!
//! - `*` becomes `.*` and matches any sequence, including `/`
//! - `?` becomes `.` and matches exactly one character
//! - `[` and `]` pass through, so bracket expressions are regex classes
//! - every other character is copied unescaped
//!
//! The last rule means regex metacharacters keep their regex meaning: `.`
//! matches any character and `+` repeats. Existing ownership files rely on
//! this, so it must not be "fixed" without a compatibility break.
//!
//! The translated pattern is wrapped in a non-capturing group before
//! anchoring, so an alternation such as `a|b` still has to match the whole
//! path.

use regex::Regex;
use thiserror::Error;

/// A pattern that could not be compiled into a matcher.
#[derive(Debug, Error)]
#[error("invalid pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The original pattern string.
    pub pattern: String,
    /// The underlying regex error.
    pub source: regex::Error,
}

/// A compiled ownership pattern that can match file paths.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The original pattern string.
    original: String,
    /// The anchored regex.
    regex: Regex,
}

impl CompiledPattern {
    /// Compiles an ownership pattern for matching.
    ///
    /// # Example
    ///
    /// ```rust
    /// use codeowners_reviewers_core::matching::CompiledPattern;
    ///
    /// let pattern = CompiledPattern::new("docs/*").unwrap();
    /// assert!(pattern.matches("docs/sub/page.md"));
    /// assert!(!pattern.matches("src/docs/page.md"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&pattern_to_regex(pattern)).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            original: pattern.to_string(),
            regex,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks if this pattern matches the entire path.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Translates an ownership pattern into anchored regex source.
pub fn pattern_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 8);
    regex.push_str("^(?:");
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            _ => regex.push(c),
        }
    }
    regex.push_str(")$");
    regex
}
