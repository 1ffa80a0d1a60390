//! Pre-trained feature extraction and classification.
//!
//! Both stages are loaded from serialized artifacts and never re-fitted:
//!
//! - [`vectorizer`]: normalized text → sparse feature vector
//! - [`classifier`]: feature vector → class label
//! - [`artifact`]: reading, writing and describing artifact files

pub mod artifact;
pub mod classifier;
pub mod vectorizer;

pub use artifact::{ArtifactEncoding, ArtifactSummary, load_artifact, save_artifact};
pub use classifier::{Classifier, LinearClassifier, ModelArtifact, MultinomialNbClassifier};
pub use vectorizer::{FeatureVector, TfidfArtifact, TfidfParams, TfidfVectorizer, Vectorizer};
