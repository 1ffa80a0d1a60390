//! Char filter implementations for text normalization.
//!
//! Char filters rewrite the raw text before it reaches the tokenizer. Each
//! filter performs exactly one normalization step so that every step can be
//! tested and traced on its own.
//!
//! # Available Filters
//!
//! - [`html_entity::HtmlEntityCharFilter`] - Decodes HTML character references
//! - [`lowercase::LowercaseCharFilter`] - Unicode-aware lowercasing
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`punctuation::PunctuationCharFilter`] - Drops ASCII punctuation
//!
//! # Examples
//!
//! ```
//! use symptom_triage::analysis::char_filter::CharFilter;
//! use symptom_triage::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\d+", "").unwrap();
//! assert_eq!(filter.filter("took 200mg"), "took mg");
//! ```

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text and return the filtered text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod html_entity;
pub mod lowercase;
pub mod pattern_replace;
pub mod punctuation;
