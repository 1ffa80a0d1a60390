//! Stop filter implementation.
//!
//! Removes common English function words. The default list is the 179-word
//! NLTK English stopword corpus, embedded at compile time. A different list
//! can be loaded from a newline-separated file with [`StopFilter::from_file`].
//!
//! # Examples
//!
//! ```
//! use symptom_triage::analysis::token_filter::Filter;
//! use symptom_triage::analysis::token_filter::stop::StopFilter;
//! use symptom_triage::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("i", 0),
//!     Token::new("have", 1),
//!     Token::new("headaches", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "headaches");
//! ```

use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;
use log::debug;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::{Result, TriageError};

const ENGLISH_STOP_WORDS: &str = include_str!("../../../resources/stopwords/english.txt");

/// Default English stop words as a set.
pub static DEFAULT_ENGLISH_STOP_WORDS_SET: LazyLock<Arc<AHashSet<String>>> =
    LazyLock::new(|| Arc::new(parse_word_list(ENGLISH_STOP_WORDS)));

/// Parse a newline-separated word list.
///
/// Blank lines and lines starting with `#` are skipped; entries are trimmed
/// and lowercased.
pub fn parse_word_list(content: &str) -> AHashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// A filter that removes stop words from the token stream.
///
/// Lookup is an exact match against the token text, so the text must already
/// be lowercased.
///
/// ## Custom Stop Words
///
/// ```
/// use symptom_triage::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["patient", "doctor"]);
/// assert!(filter.is_stop_word("doctor"));
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<AHashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default English stop words.
    ///
    /// ```
    /// use symptom_triage::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("fever"));
    /// ```
    pub fn new() -> Self {
        StopFilter {
            stop_words: Arc::clone(&DEFAULT_ENGLISH_STOP_WORDS_SET),
        }
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: AHashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Load stop words from a newline-separated file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TriageError::resource(format!(
                "cannot read stopword list {}: {e}",
                path.display()
            ))
        })?;
        let stop_words = parse_word_list(&content);
        debug!(
            "loaded {} stop words from {}",
            stop_words.len(),
            path.display()
        );
        Ok(Self::with_stop_words(stop_words))
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("chest", 0),
            Token::new("the", 1),
            Token::new("pain", 2),
            Token::new("and", 3),
            Token::new("cough", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "chest");
        assert_eq!(result[1].text, "pain");
        assert_eq!(result[2].text, "cough");
    }

    #[test]
    fn test_default_list_is_nltk_english() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), 179);
        for word in ["i", "me", "have", "am", "now", "don", "wouldn't", "y"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
        for word in ["blood", "every", "feel", "pressure"] {
            assert!(!filter.is_stop_word(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_parse_word_list() {
        let words = parse_word_list("# comment\n\n  Foo \nbar\n#baz\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("foo"));
        assert!(words.contains("bar"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nPatient\ndoctor").unwrap();

        let filter = StopFilter::from_file(file.path()).unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.is_stop_word("patient"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopFilter::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, TriageError::Resource(_)));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
