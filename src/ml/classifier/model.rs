//! Serialized model artifacts.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use super::{Classifier, LinearClassifier, MultinomialNbClassifier};
use crate::error::Result;
use crate::ml::artifact::load_artifact;

/// A trained model as stored on disk.
///
/// Externally tagged by kind, e.g. `{"linear": {"classes": [...], ...}}`, so
/// the same derive serves JSON and bincode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearClassifier),
    MultinomialNb(MultinomialNbClassifier),
}

impl ModelArtifact {
    /// Load a model artifact file without validating it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_artifact(path)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::MultinomialNb(_) => "multinomial_nb",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            ModelArtifact::Linear(model) => model.validate(),
            ModelArtifact::MultinomialNb(model) => model.validate(),
        }
    }

    /// Validate and convert into a classifier.
    pub fn into_classifier(self) -> Result<Box<dyn Classifier>> {
        self.validate()?;
        let classifier: Box<dyn Classifier> = match self {
            ModelArtifact::Linear(model) => Box::new(model),
            ModelArtifact::MultinomialNb(model) => Box::new(model),
        };
        info!(
            "loaded {} classifier ({} classes, {} features)",
            classifier.name(),
            classifier.classes().len(),
            classifier.num_features()
        );
        Ok(classifier)
    }

    pub fn classes(&self) -> &[i64] {
        match self {
            ModelArtifact::Linear(model) => model.classes(),
            ModelArtifact::MultinomialNb(model) => model.classes(),
        }
    }

    pub fn num_features(&self) -> usize {
        match self {
            ModelArtifact::Linear(model) => model.num_features(),
            ModelArtifact::MultinomialNb(model) => model.num_features(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TriageError;

    #[test]
    fn test_json_tagging() {
        let json = r#"{"linear": {"classes": [0, 1, 2],
            "coef": [[1.0, 0.0], [0.0, 1.0], [0.5, 0.5]],
            "intercept": [0.0, 0.0, 0.0]}}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.kind(), "linear");
        assert_eq!(artifact.classes(), &[0, 1, 2]);
        assert_eq!(artifact.num_features(), 2);

        let classifier = artifact.into_classifier().unwrap();
        assert_eq!(classifier.name(), "linear");
    }

    #[test]
    fn test_naive_bayes_json() {
        let json = r#"{"multinomial_nb": {"classes": [3, 4],
            "class_log_prior": [-0.7, -0.7],
            "feature_log_prob": [[-0.1, -2.3], [-2.3, -0.1]]}}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.kind(), "multinomial_nb");
        assert!(artifact.into_classifier().is_ok());
    }

    #[test]
    fn test_invalid_shapes_rejected_on_conversion() {
        let json = r#"{"linear": {"classes": [0, 1, 2],
            "coef": [[1.0, 0.0], [0.0, 1.0]],
            "intercept": [0.0, 0.0]}}"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert!(matches!(
            artifact.into_classifier().err(),
            Some(TriageError::Artifact(_))
        ));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"random_forest": {"classes": [0]}}"#;
        assert!(serde_json::from_str::<ModelArtifact>(json).is_err());
    }
}
