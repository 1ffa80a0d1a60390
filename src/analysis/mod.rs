//! Text analysis for symptom descriptions.
//!
//! The analysis pipeline turns raw user text into the normalized form the
//! vectorizer vocabulary was fitted on:
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → joined tokens
//! ```
//!
//! [`analyzer::TextNormalizer`] assembles the complete pipeline.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, NormalizationTrace, PipelineAnalyzer, TextNormalizer};
pub use token::{IntoTokenStream, Token, TokenStream};
