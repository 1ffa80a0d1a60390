//! Startup configuration.
//!
//! Configuration is read once, before any artifact is loaded. Values come from
//! an optional JSON file and are then overridden by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::lemma::PartOfSpeech;
use crate::error::{Result, TriageError};

/// Default location of the classifier artifact.
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

/// Default location of the vectorizer artifact.
pub const DEFAULT_VECTORIZER_PATH: &str = "models/vectorizer.json";

/// Paths to the artifacts and resources used by a predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageConfig {
    /// Classifier artifact (`.json` or bincode).
    pub model_path: PathBuf,
    /// Vectorizer artifact (`.json` or bincode).
    pub vectorizer_path: PathBuf,
    /// Optional label table replacing the built-in one.
    pub labels_path: Option<PathBuf>,
    /// Linguistic resources used by the normalizer.
    pub resources: ResourceConfig,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            labels_path: None,
            resources: ResourceConfig::default(),
        }
    }
}

impl TriageConfig {
    /// Read a JSON configuration file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TriageError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// Overrides for the linguistic resources. `None` selects the embedded
/// default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourceConfig {
    /// Newline-separated stopword list.
    pub stopwords_path: Option<PathBuf>,
    /// WordNet `dict/` directory containing at least `index.noun`.
    pub lemma_dir: Option<PathBuf>,
    /// Part of speech used for every token during lemmatization.
    pub lemma_pos: PartOfSpeech,
}
