//! Pre-trained classifiers.
//!
//! A classifier maps feature vectors to labels drawn from its `classes`.
//! Labels outside the display table are not an error here; the label table
//! resolves them to a fallback entry.

use crate::error::{Result, TriageError};
use crate::ml::vectorizer::FeatureVector;

pub mod linear;
pub mod model;
pub mod naive_bayes;

pub use linear::LinearClassifier;
pub use model::ModelArtifact;
pub use naive_bayes::MultinomialNbClassifier;

/// Trait for fitted classifiers.
pub trait Classifier: Send + Sync {
    /// Predict one label per input vector.
    ///
    /// Returns [`TriageError::Dimension`] when a vector does not have
    /// [`num_features`](Self::num_features) dimensions.
    fn predict(&self, vectors: &[FeatureVector]) -> Result<Vec<i64>>;

    /// Number of features the classifier was trained on.
    fn num_features(&self) -> usize;

    /// Class labels in the order of the model's rows.
    fn classes(&self) -> &[i64];

    /// Get the name of this classifier.
    fn name(&self) -> &'static str;
}

/// Dot product of a sparse vector with a dense weight row.
pub(crate) fn sparse_dot(vector: &FeatureVector, row: &[f64]) -> f64 {
    vector.iter().map(|(i, &v)| v * row[i]).sum()
}

pub(crate) fn check_dimension(vector: &FeatureVector, expected: usize) -> Result<()> {
    if vector.dim() != expected {
        return Err(TriageError::dimension(expected, vector.dim()));
    }
    Ok(())
}

/// Index of the first maximum. `scores` must be non-empty.
pub(crate) fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = i;
        }
    }
    best
}

/// Shared shape validation for weight matrices.
pub(crate) fn validate_matrix(name: &str, rows: &[Vec<f64>]) -> Result<usize> {
    let n_features = rows.first().map_or(0, Vec::len);
    if n_features == 0 {
        return Err(TriageError::artifact(format!("{name} has no features")));
    }
    for (k, row) in rows.iter().enumerate() {
        if row.len() != n_features {
            return Err(TriageError::artifact(format!(
                "{name} row {k} has {} features, expected {n_features}",
                row.len()
            )));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(TriageError::artifact(format!(
                "{name} row {k} contains a non-finite value"
            )));
        }
    }
    Ok(n_features)
}
