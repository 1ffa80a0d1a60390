//! The symptom text normalizer.
//!
//! [`TextNormalizer`] applies, in order:
//!
//! 1. HTML entity decoding
//! 2. lowercasing
//! 3. URL removal (`https?://\S+` and `www\.\S+`)
//! 4. newline removal (no space inserted)
//! 5. ASCII punctuation removal
//! 6. digit removal
//! 7. Unicode word tokenization
//! 8. English stopword removal
//! 9. dictionary lemmatization (noun by default)
//! 10. joining the surviving tokens with single spaces
//!
//! The output must match the text the vectorizer vocabulary was fitted on,
//! so changing any step invalidates existing artifacts.
//!
//! # Examples
//!
//! ```
//! use symptom_triage::analysis::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! assert_eq!(normalizer.normalize("I have 123 headaches!!!").unwrap(), "headache");
//! assert_eq!(normalizer.normalize("THE the The").unwrap(), "");
//! ```

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use super::analyzer::Analyzer;
use super::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::html_entity::HtmlEntityCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::punctuation::PunctuationCharFilter;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::token_filter::lemma::{LemmaDictionary, LemmaFilter, WordNetLemmatizer};
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::config::ResourceConfig;
use crate::error::Result;

/// One stage of a traced normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationStep {
    /// Name of the char filter, tokenizer or token filter.
    pub stage: &'static str,
    /// Text after the stage; token stages show tokens joined by spaces.
    pub output: String,
}

/// Every intermediate result of a normalization, for debugging parity with
/// the training transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizationTrace {
    pub input: String,
    pub steps: Vec<NormalizationStep>,
    pub normalized: String,
}

/// Text normalizer producing the vectorizer's input representation.
#[derive(Clone, Debug)]
pub struct TextNormalizer {
    inner: PipelineAnalyzer,
}

impl TextNormalizer {
    /// Create a normalizer with the embedded stopword list and lemma
    /// dictionary.
    pub fn new() -> Result<Self> {
        Self::with_filters(StopFilter::new(), LemmaFilter::new())
    }

    /// Create a normalizer with the given stopword and lemma filters.
    pub fn with_filters(stop_filter: StopFilter, lemma_filter: LemmaFilter) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_char_filter(Arc::new(HtmlEntityCharFilter::new()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::urls()?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::newlines()?))
            .add_char_filter(Arc::new(PunctuationCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::digits()?))
            .add_filter(Arc::new(stop_filter))
            .add_filter(Arc::new(lemma_filter))
            .with_name("symptom_normalizer");

        Ok(Self { inner: analyzer })
    }

    /// Create a normalizer honoring the resource overrides in `config`.
    pub fn from_config(config: &ResourceConfig) -> Result<Self> {
        let stop_filter = match &config.stopwords_path {
            Some(path) => StopFilter::from_file(path)?,
            None => StopFilter::new(),
        };
        let dictionary = match &config.lemma_dir {
            Some(dir) => Arc::new(LemmaDictionary::from_dir(dir)?),
            None => LemmaDictionary::embedded(),
        };
        let lemma_filter = LemmaFilter::with_lemmatizer(Arc::new(WordNetLemmatizer::new(
            dictionary,
        )))
        .with_pos(config.lemma_pos);

        debug!(
            "normalizer resources: {} stop words, lemma pos {}",
            stop_filter.len(),
            config.lemma_pos
        );
        Self::with_filters(stop_filter, lemma_filter)
    }

    /// Normalize `text`. Empty, stopword-only or punctuation-only input
    /// yields an empty string.
    pub fn normalize(&self, text: &str) -> Result<String> {
        let tokens: Vec<String> = self.inner.analyze(text)?.map(|t| t.text).collect();
        Ok(tokens.join(" "))
    }

    /// Normalize `text`, recording the output of every stage.
    pub fn explain(&self, text: &str) -> Result<NormalizationTrace> {
        let mut steps = Vec::new();

        let mut filtered = text.to_string();
        for char_filter in self.inner.char_filters() {
            filtered = char_filter.filter(&filtered);
            steps.push(NormalizationStep {
                stage: char_filter.name(),
                output: filtered.clone(),
            });
        }

        let tokenizer = self.inner.tokenizer();
        let mut tokens: Vec<String> = tokenizer.tokenize(&filtered)?.map(|t| t.text).collect();
        steps.push(NormalizationStep {
            stage: tokenizer.name(),
            output: tokens.join(" "),
        });

        for filter in self.inner.filters() {
            let stream = tokens
                .into_iter()
                .enumerate()
                .map(|(i, text)| Token::new(text, i))
                .collect::<Vec<_>>()
                .into_token_stream();
            tokens = filter.filter(stream)?.map(|t| t.text).collect();
            steps.push(NormalizationStep {
                stage: filter.name(),
                output: tokens.join(" "),
            });
        }

        Ok(NormalizationTrace {
            input: text.to_string(),
            steps,
            normalized: tokens.join(" "),
        })
    }

    /// The underlying analysis pipeline.
    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Analyzer for TextNormalizer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "symptom_normalizer"
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::analysis::token_filter::lemma::PartOfSpeech;

    fn normalize(text: &str) -> String {
        TextNormalizer::new().unwrap().normalize(text).unwrap()
    }

    #[test]
    fn test_empty_and_stopword_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
        assert_eq!(normalize("THE the The"), "");
        assert_eq!(normalize("?!... ,,;"), "");
    }

    #[test]
    fn test_digits_punctuation_and_plurals() {
        assert_eq!(normalize("I have 123 headaches!!!"), "headache");
    }

    #[test]
    fn test_url_removal() {
        assert_eq!(normalize("Visit http://example.com now"), "visit");
        assert_eq!(normalize("see www.clinic.org/help for help"), "see help");
    }

    #[test]
    fn test_html_entities_decoded_before_punctuation_removal() {
        assert_eq!(normalize("salt &amp; sugar"), "salt sugar");
        assert_eq!(normalize("I&#039;m so tired"), "im tired");
    }

    #[test]
    fn test_newline_removed_without_space() {
        assert_eq!(normalize("chest\npain"), "chestpain");
        assert_eq!(normalize("chest \npain"), "chest pain");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(normalize("My feet and teeth hurt"), "foot tooth hurt");
    }

    #[test]
    fn test_output_has_single_spaces() {
        let normalized = normalize("  Blood   pressure\t\tspikes ");
        assert_eq!(normalized, "blood pressure spike");
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        let normalizer = TextNormalizer::new().unwrap();
        for text in [
            "I've been feeling sad and hopeless for weeks, crying every night.",
            "Constant thirst, blurry vision & frequent urination (3-4 times/night)",
            "Terrible headaches and dizziness; my blood pressure is 160/100!",
            "Children's teeth & knives &lt;3",
        ] {
            let once = normalizer.normalize(text).unwrap();
            let twice = normalizer.normalize(&once).unwrap();
            assert_eq!(once, twice, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_explain_records_every_stage() {
        let normalizer = TextNormalizer::new().unwrap();
        let trace = normalizer.explain("I have 123 headaches!!!").unwrap();

        let stages: Vec<&str> = trace.steps.iter().map(|s| s.stage).collect();
        assert_eq!(
            stages,
            vec![
                "html_entity",
                "lowercase",
                "url_removal",
                "newline_removal",
                "punctuation_removal",
                "digit_removal",
                "unicode_word",
                "stop",
                "lemma",
            ]
        );
        assert_eq!(trace.steps[4].output, "i have 123 headaches");
        assert_eq!(trace.steps[6].output, "i have headaches");
        assert_eq!(trace.steps[7].output, "headaches");
        assert_eq!(trace.normalized, "headache");
        assert_eq!(trace.normalized, normalizer.normalize(&trace.input).unwrap());
    }

    #[test]
    fn test_from_config_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let stopwords = dir.path().join("stop.txt");
        fs::write(&stopwords, "patient\n").unwrap();
        let lemma_dir = dir.path().join("dict");
        fs::create_dir(&lemma_dir).unwrap();
        fs::write(lemma_dir.join("index.noun"), "cough n\n").unwrap();
        fs::write(lemma_dir.join("index.verb"), "cough v\n").unwrap();

        let config = ResourceConfig {
            stopwords_path: Some(stopwords),
            lemma_dir: Some(lemma_dir),
            lemma_pos: PartOfSpeech::Verb,
        };
        let normalizer = TextNormalizer::from_config(&config).unwrap();

        // "the" is no longer a stop word, "patient" is
        assert_eq!(
            normalizer.normalize("The patient coughed").unwrap(),
            "the cough"
        );
    }

    #[test]
    fn test_from_config_missing_resources() {
        let config = ResourceConfig {
            stopwords_path: Some("/nonexistent/stop.txt".into()),
            ..ResourceConfig::default()
        };
        assert!(TextNormalizer::from_config(&config).is_err());

        let config = ResourceConfig {
            lemma_dir: Some("/nonexistent/dict".into()),
            ..ResourceConfig::default()
        };
        assert!(TextNormalizer::from_config(&config).is_err());
    }

    #[test]
    fn test_analyzer_name() {
        let normalizer = TextNormalizer::new().unwrap();
        assert_eq!(normalizer.name(), "symptom_normalizer");
    }
}
