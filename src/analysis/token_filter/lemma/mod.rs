//! Lemmatization token filter.
//!
//! [`LemmaFilter`] replaces every token with its dictionary lemma using a
//! [`Lemmatizer`] and a fixed part of speech (noun unless configured
//! otherwise).

use std::sync::Arc;

use super::Filter;
use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod dictionary;
pub mod wordnet;

pub use dictionary::{LemmaDictionary, PartOfSpeech};
pub use wordnet::WordNetLemmatizer;

/// Trait for lemmatization algorithms.
pub trait Lemmatizer: Send + Sync {
    /// Reduce `word` to its lemma for the given part of speech.
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;
}

/// Lemmatizer that returns words unchanged.
#[derive(Clone, Debug, Default)]
pub struct IdentityLemmatizer;

impl IdentityLemmatizer {
    pub fn new() -> Self {
        IdentityLemmatizer
    }
}

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str, _pos: PartOfSpeech) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Filter that applies lemmatization to tokens.
pub struct LemmaFilter {
    lemmatizer: Arc<dyn Lemmatizer>,
    pos: PartOfSpeech,
}

impl std::fmt::Debug for LemmaFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemmaFilter")
            .field("lemmatizer", &self.lemmatizer.name())
            .field("pos", &self.pos)
            .finish()
    }
}

impl LemmaFilter {
    /// Create a lemma filter over the embedded WordNet dictionary, treating
    /// every token as a noun.
    pub fn new() -> Self {
        Self::with_lemmatizer(Arc::new(WordNetLemmatizer::embedded()))
    }

    /// Create a lemma filter with a custom lemmatizer.
    pub fn with_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        LemmaFilter {
            lemmatizer,
            pos: PartOfSpeech::Noun,
        }
    }

    /// Set the part of speech used for every token.
    pub fn with_pos(mut self, pos: PartOfSpeech) -> Self {
        self.pos = pos;
        self
    }

    pub fn pos(&self) -> PartOfSpeech {
        self.pos
    }
}

impl Default for LemmaFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LemmaFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lemma = self.lemmatizer.lemmatize(&token.text, self.pos);
                token.with_text(lemma)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lemma"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_lemma_filter() {
        let filter = LemmaFilter::new();
        let tokens = vec![
            Token::new("headaches", 0),
            Token::new("feet", 1),
            Token::new("sleeping", 2),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "headache");
        assert_eq!(result[1].text, "foot");
        // noun lemmatization does not strip verb inflections
        assert_eq!(result[2].text, "sleeping");
    }

    #[test]
    fn test_lemma_filter_verb_pos() {
        let filter = LemmaFilter::new().with_pos(PartOfSpeech::Verb);
        let tokens = vec![Token::new("sleeping", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "sleep");
        assert_eq!(filter.pos(), PartOfSpeech::Verb);
    }

    #[test]
    fn test_identity_lemmatizer() {
        let filter = LemmaFilter::with_lemmatizer(Arc::new(IdentityLemmatizer::new()));
        let tokens = vec![Token::new("headaches", 0)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result[0].text, "headaches");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LemmaFilter::new().name(), "lemma");
    }
}
