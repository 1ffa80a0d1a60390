//! TF-IDF vectorizer loaded from a fitted artifact.
//!
//! The transform reproduces scikit-learn's `TfidfVectorizer.transform` for
//! word analyzers:
//!
//! 1. optional lowercasing
//! 2. tokenization with `token_pattern` (default `(?u)\b\w\w+\b`)
//! 3. word n-grams over `ngram_range`, joined by a single space
//! 4. term counts for in-vocabulary terms
//! 5. `binary` (counts clipped to 1) or `sublinear_tf` (`1 + ln(tf)`)
//! 6. multiplication by `idf` when `use_idf`
//! 7. row normalization (`l2`, `l1` or none); all-zero rows stay zero

use std::collections::BTreeMap;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sprs::CsVec;

use super::{FeatureVector, Vectorizer};
use crate::error::{Result, TriageError};
use crate::ml::artifact::load_artifact;

/// Default scikit-learn token pattern.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    #[default]
    L2,
    None,
}

/// Transform parameters recorded when the vectorizer was fitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfParams {
    pub lowercase: bool,
    pub token_pattern: String,
    pub ngram_range: (usize, usize),
    pub binary: bool,
    pub sublinear_tf: bool,
    pub use_idf: bool,
    pub norm: Norm,
}

impl Default for TfidfParams {
    fn default() -> Self {
        Self {
            lowercase: true,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
            ngram_range: (1, 1),
            binary: false,
            sublinear_tf: false,
            use_idf: true,
            norm: Norm::L2,
        }
    }
}

/// Serialized form of a fitted TF-IDF vectorizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TfidfArtifact {
    /// Term → column index.
    pub vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency per column. May be empty when `use_idf` is
    /// false.
    #[serde(default)]
    pub idf: Vec<f64>,
    #[serde(default)]
    pub params: TfidfParams,
}

/// A fitted TF-IDF vectorizer.
#[derive(Clone, Debug)]
pub struct TfidfVectorizer {
    vocabulary: AHashMap<String, usize>,
    idf: Vec<f64>,
    params: TfidfParams,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Validate an artifact and build the vectorizer from it.
    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self> {
        let TfidfArtifact {
            vocabulary,
            idf,
            params,
        } = artifact;
        let n_features = vocabulary.len();

        if n_features == 0 {
            return Err(TriageError::artifact("vectorizer vocabulary is empty"));
        }

        let mut seen = AHashSet::with_capacity(n_features);
        for (term, &column) in &vocabulary {
            if column >= n_features {
                return Err(TriageError::artifact(format!(
                    "vocabulary column {column} for {term:?} is out of range (size {n_features})"
                )));
            }
            if !seen.insert(column) {
                return Err(TriageError::artifact(format!(
                    "vocabulary column {column} is assigned to more than one term"
                )));
            }
        }

        if params.use_idf {
            if idf.len() != n_features {
                return Err(TriageError::artifact(format!(
                    "idf has {} entries but the vocabulary has {n_features}",
                    idf.len()
                )));
            }
            if let Some(bad) = idf.iter().position(|v| !v.is_finite()) {
                return Err(TriageError::artifact(format!(
                    "idf entry {bad} is not a finite number"
                )));
            }
        }

        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(TriageError::artifact(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }

        let token_pattern = Regex::new(&params.token_pattern).map_err(|e| {
            TriageError::artifact(format!(
                "invalid token_pattern {:?}: {e}",
                params.token_pattern
            ))
        })?;

        Ok(Self {
            vocabulary: vocabulary.into_iter().collect(),
            idf,
            params,
            token_pattern,
        })
    }

    /// Load and validate a vectorizer artifact file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let vectorizer = Self::from_artifact(load_artifact(path)?)?;
        info!(
            "loaded tfidf vectorizer from {} ({} features)",
            path.display(),
            vectorizer.vocabulary_size()
        );
        Ok(vectorizer)
    }

    /// Convert back into the serializable form.
    pub fn to_artifact(&self) -> TfidfArtifact {
        TfidfArtifact {
            vocabulary: self
                .vocabulary
                .iter()
                .map(|(term, &column)| (term.clone(), column))
                .collect(),
            idf: self.idf.clone(),
            params: self.params.clone(),
        }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn params(&self) -> &TfidfParams {
        &self.params
    }

    /// Column of `term`, if it is in the vocabulary.
    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        let lowered;
        let text = if self.params.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();

        let (min_n, max_n) = self.params.ngram_range;
        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    /// Transform a single text.
    pub fn transform_one(&self, text: &str) -> FeatureVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let (indices, mut data): (Vec<usize>, Vec<f64>) = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.params.binary {
                    1.0
                } else if self.params.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                let weight = if self.params.use_idf {
                    tf * self.idf[column]
                } else {
                    tf
                };
                (column, weight)
            })
            .unzip();

        let norm = match self.params.norm {
            Norm::L2 => data.iter().map(|v| v * v).sum::<f64>().sqrt(),
            Norm::L1 => data.iter().map(|v| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if norm > 0.0 && norm != 1.0 {
            for value in &mut data {
                *value /= norm;
            }
        }

        CsVec::new(self.vocabulary.len(), indices, data)
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, texts: &[&str]) -> Result<Vec<FeatureVector>> {
        let vectors: Vec<FeatureVector> =
            texts.iter().map(|text| self.transform_one(text)).collect();
        debug!(
            "tfidf transformed {} texts ({} non-zero entries)",
            texts.len(),
            vectors.iter().map(|v| v.nnz()).sum::<usize>()
        );
        Ok(vectors)
    }

    fn num_features(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}
