//! Feature vectorizers.

use sprs::CsVec;

use crate::error::Result;

pub mod tfidf;

pub use tfidf::{Norm, TfidfArtifact, TfidfParams, TfidfVectorizer};

/// Sparse feature vector whose dimension is the vectorizer's vocabulary size.
pub type FeatureVector = CsVec<f64>;

/// Trait for fitted vectorizers.
///
/// Implementations are immutable after loading. Unknown words contribute no
/// weight and an empty text maps to the all-zero vector.
pub trait Vectorizer: Send + Sync {
    /// Transform each text into a feature vector.
    fn transform(&self, texts: &[&str]) -> Result<Vec<FeatureVector>>;

    /// Dimension of the produced vectors.
    fn num_features(&self) -> usize;

    /// Get the name of this vectorizer.
    fn name(&self) -> &'static str;
}
