//! Multinomial naive Bayes.

use serde::{Deserialize, Serialize};

use super::{Classifier, argmax, check_dimension, sparse_dot, validate_matrix};
use crate::error::{Result, TriageError};
use crate::ml::vectorizer::FeatureVector;

/// Multinomial naive Bayes: `argmax_k(class_log_prior_k + x · feature_log_prob_k)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNbClassifier {
    classes: Vec<i64>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
}

impl MultinomialNbClassifier {
    pub fn new(
        classes: Vec<i64>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let classifier = Self {
            classes,
            class_log_prior,
            feature_log_prob,
        };
        classifier.validate()?;
        Ok(classifier)
    }

    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(TriageError::artifact("naive Bayes model has no classes"));
        }
        validate_matrix("feature_log_prob", &self.feature_log_prob)?;
        let n_classes = self.classes.len();
        if self.feature_log_prob.len() != n_classes || self.class_log_prior.len() != n_classes {
            return Err(TriageError::artifact(format!(
                "naive Bayes model has {} classes, {} priors and {} feature rows",
                n_classes,
                self.class_log_prior.len(),
                self.feature_log_prob.len()
            )));
        }
        if self.class_log_prior.iter().any(|v| !v.is_finite()) {
            return Err(TriageError::artifact(
                "class_log_prior contains a non-finite value",
            ));
        }
        Ok(())
    }

    /// Unnormalized joint log likelihood per class.
    pub fn joint_log_likelihood(&self, vector: &FeatureVector) -> Result<Vec<f64>> {
        check_dimension(vector, self.num_features())?;
        Ok(self
            .feature_log_prob
            .iter()
            .zip(&self.class_log_prior)
            .map(|(row, prior)| prior + sparse_dot(vector, row))
            .collect())
    }
}

impl Classifier for MultinomialNbClassifier {
    fn predict(&self, vectors: &[FeatureVector]) -> Result<Vec<i64>> {
        vectors
            .iter()
            .map(|v| {
                let jll = self.joint_log_likelihood(v)?;
                Ok(self.classes[argmax(&jll)])
            })
            .collect()
    }

    fn num_features(&self) -> usize {
        self.feature_log_prob.first().map_or(0, Vec::len)
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn name(&self) -> &'static str {
        "multinomial_nb"
    }
}
