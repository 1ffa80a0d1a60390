use regex::Regex;

use super::CharFilter;
use crate::error::{Result, TriageError};

/// Pattern matching URL-like substrings (`http://…`, `https://…`, `www.…`).
pub const URL_PATTERN: &str = r"https?://\S+|www\.\S+";

/// Pattern matching Unicode decimal digit runs.
pub const DIGIT_PATTERN: &str = r"\d+";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| {
            TriageError::analysis(format!("invalid char filter pattern {pattern:?}: {e}"))
        })?;
        Ok(Self {
            pattern,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        })
    }

    /// Filter that deletes URL-like substrings.
    pub fn urls() -> Result<Self> {
        Ok(Self::new(URL_PATTERN, "")?.with_name("url_removal"))
    }

    /// Filter that deletes newline characters without inserting a space.
    pub fn newlines() -> Result<Self> {
        Ok(Self::new(r"\n", "")?.with_name("newline_removal"))
    }

    /// Filter that deletes digit runs.
    pub fn digits() -> Result<Self> {
        Ok(Self::new(DIGIT_PATTERN, "")?.with_name("digit_removal"))
    }

    /// Set the name reported by [`CharFilter::name`].
    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The source pattern of this filter.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
