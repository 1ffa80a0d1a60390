//! End-to-end prediction.
//!
//! A [`Predictor`] owns one instance of every pipeline stage. It is built once
//! at startup and is immutable afterwards, so a single handle can be shared
//! across threads.

use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::analysis::TextNormalizer;
use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::labels::{LabelStyle, LabelTable};
use crate::ml::classifier::{Classifier, ModelArtifact};
use crate::ml::vectorizer::{TfidfVectorizer, Vectorizer};

/// Result of one prediction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    /// Label emitted by the classifier.
    pub raw_label: i64,
    /// Resolved display style.
    pub label: LabelStyle,
    /// The normalized text that was vectorized.
    pub normalized: String,
}

/// Immutable handle over normalizer, vectorizer, classifier and labels.
pub struct Predictor {
    normalizer: TextNormalizer,
    vectorizer: Box<dyn Vectorizer>,
    classifier: Box<dyn Classifier>,
    labels: LabelTable,
}

impl Predictor {
    /// Assemble a predictor from already-loaded components.
    ///
    /// Fails when the vectorizer and the classifier disagree on the feature
    /// dimension.
    pub fn new(
        normalizer: TextNormalizer,
        vectorizer: Box<dyn Vectorizer>,
        classifier: Box<dyn Classifier>,
        labels: LabelTable,
    ) -> Result<Self> {
        if vectorizer.num_features() != classifier.num_features() {
            return Err(TriageError::artifact(format!(
                "vectorizer '{}' produces {} features but classifier '{}' expects {}",
                vectorizer.name(),
                vectorizer.num_features(),
                classifier.name(),
                classifier.num_features()
            )));
        }
        Ok(Self {
            normalizer,
            vectorizer,
            classifier,
            labels,
        })
    }

    /// Load every component named in `config`. Any missing or invalid
    /// artifact or resource is an error.
    pub fn load(config: &TriageConfig) -> Result<Self> {
        let normalizer = TextNormalizer::from_config(&config.resources)?;
        let vectorizer = TfidfVectorizer::load(&config.vectorizer_path)?;
        let classifier = ModelArtifact::load(&config.model_path)?.into_classifier()?;
        let labels = match &config.labels_path {
            Some(path) => LabelTable::from_file(path)?,
            None => LabelTable::default(),
        };

        let predictor = Self::new(normalizer, Box::new(vectorizer), classifier, labels)?;
        info!(
            "Predictor ready: {} features, {} classes",
            predictor.vectorizer.num_features(),
            predictor.classifier.classes().len()
        );
        Ok(predictor)
    }

    /// Run the full pipeline on one text.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let normalized = self.normalizer.normalize(text)?;
        debug!("normalized: {normalized:?}");

        let vectors = self.vectorizer.transform(&[normalized.as_str()])?;
        let labels = self.classifier.predict(&vectors)?;
        let raw_label = labels.first().copied().ok_or_else(|| {
            TriageError::other(format!(
                "classifier '{}' returned no label",
                self.classifier.name()
            ))
        })?;
        debug!("raw label: {raw_label}");

        Ok(Prediction {
            raw_label,
            label: self.labels.resolve(raw_label).clone(),
            normalized,
        })
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    pub fn vectorizer(&self) -> &dyn Vectorizer {
        self.vectorizer.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predictor")
            .field("normalizer", &self.normalizer)
            .field("vectorizer", &self.vectorizer.name())
            .field("classifier", &self.classifier.name())
            .field("labels", &self.labels.len())
            .finish()
    }
}
