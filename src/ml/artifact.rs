//! Artifact files.
//!
//! Artifacts are serde-serialized; the encoding is picked from the file
//! extension: `.json` is read with `serde_json`, anything else with
//! `bincode`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::TriageConfig;
use crate::error::{Result, TriageError};
use crate::ml::classifier::ModelArtifact;
use crate::ml::vectorizer::{TfidfArtifact, TfidfParams, TfidfVectorizer, Vectorizer};

/// On-disk encoding of an artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactEncoding {
    Json,
    Bincode,
}

impl ArtifactEncoding {
    /// Pick the encoding from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ArtifactEncoding::Json,
            _ => ArtifactEncoding::Bincode,
        }
    }
}

/// Read an artifact from `path`.
pub fn load_artifact<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        TriageError::artifact(format!("cannot open {}: {e}", path.display()))
    })?;
    let reader = BufReader::new(file);
    let encoding = ArtifactEncoding::from_path(path);
    debug!("reading {encoding:?} artifact {}", path.display());

    match encoding {
        ArtifactEncoding::Json => serde_json::from_reader(reader).map_err(|e| {
            TriageError::artifact(format!("cannot decode {}: {e}", path.display()))
        }),
        ArtifactEncoding::Bincode => bincode::deserialize_from(reader).map_err(|e| {
            TriageError::artifact(format!("cannot decode {}: {e}", path.display()))
        }),
    }
}

/// Write an artifact to `path`, pretty-printing JSON.
pub fn save_artifact<T, P>(value: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    match ArtifactEncoding::from_path(path) {
        ArtifactEncoding::Json => serde_json::to_writer_pretty(&mut writer, value)?,
        ArtifactEncoding::Bincode => bincode::serialize_into(&mut writer, value)?,
    }
    writer.flush()?;
    Ok(())
}

/// Metadata about a model / vectorizer pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArtifactSummary {
    pub model_kind: &'static str,
    pub classes: Vec<i64>,
    pub model_features: usize,
    pub vocabulary_size: usize,
    pub vectorizer_params: TfidfParams,
    /// True when the model and vectorizer dimensions agree.
    pub compatible: bool,
}

impl ArtifactSummary {
    /// Load both artifacts named in `config`, validate them and summarize.
    pub fn load(config: &TriageConfig) -> Result<Self> {
        let model = ModelArtifact::load(&config.model_path)?;
        model.validate()?;
        let vectorizer: TfidfArtifact = load_artifact(&config.vectorizer_path)?;
        let vectorizer = TfidfVectorizer::from_artifact(vectorizer)?;
        Ok(Self::new(&model, &vectorizer))
    }

    pub fn new(model: &ModelArtifact, vectorizer: &TfidfVectorizer) -> Self {
        Self {
            model_kind: model.kind(),
            classes: model.classes().to_vec(),
            model_features: model.num_features(),
            vocabulary_size: vectorizer.num_features(),
            vectorizer_params: vectorizer.params().clone(),
            compatible: model.num_features() == vectorizer.num_features(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::ml::classifier::LinearClassifier;

    fn vectorizer_artifact() -> TfidfArtifact {
        TfidfArtifact {
            vocabulary: BTreeMap::from([("fever".to_string(), 0), ("rash".to_string(), 1)]),
            idf: vec![1.2, 1.7],
            params: TfidfParams::default(),
        }
    }

    fn model_artifact() -> ModelArtifact {
        ModelArtifact::Linear(
            LinearClassifier::new(vec![0, 1], vec![vec![0.5, -0.5]], vec![0.1]).unwrap(),
        )
    }

    #[test]
    fn test_encoding_from_extension() {
        assert_eq!(
            ArtifactEncoding::from_path(Path::new("m.json")),
            ArtifactEncoding::Json
        );
        assert_eq!(
            ArtifactEncoding::from_path(Path::new("M.JSON")),
            ArtifactEncoding::Json
        );
        assert_eq!(
            ArtifactEncoding::from_path(Path::new("m.bin")),
            ArtifactEncoding::Bincode
        );
        assert_eq!(
            ArtifactEncoding::from_path(Path::new("model")),
            ArtifactEncoding::Bincode
        );
    }

    #[test]
    fn test_json_and_bincode_files_agree() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("model.json");
        let bin = dir.path().join("model.bin");

        save_artifact(&model_artifact(), &json).unwrap();
        save_artifact(&model_artifact(), &bin).unwrap();

        let from_json: ModelArtifact = load_artifact(&json).unwrap();
        let from_bin: ModelArtifact = load_artifact(&bin).unwrap();
        assert_eq!(from_json, from_bin);
        assert!(std::fs::read_to_string(&json).unwrap().contains("\"linear\""));
    }

    #[test]
    fn test_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_artifact::<ModelArtifact, _>(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("cannot open"));

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{not json").unwrap();
        let err = load_artifact::<ModelArtifact, _>(&corrupt).unwrap_err();
        assert!(matches!(err, TriageError::Artifact(_)));

        let truncated = dir.path().join("truncated.bin");
        std::fs::write(&truncated, [1u8, 0]).unwrap();
        assert!(load_artifact::<TfidfArtifact, _>(&truncated).is_err());
    }

    #[test]
    fn test_summary() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriageConfig {
            model_path: dir.path().join("model.bin"),
            vectorizer_path: dir.path().join("vectorizer.json"),
            ..TriageConfig::default()
        };
        save_artifact(&model_artifact(), &config.model_path).unwrap();
        save_artifact(&vectorizer_artifact(), &config.vectorizer_path).unwrap();

        let summary = ArtifactSummary::load(&config).unwrap();
        assert_eq!(summary.model_kind, "linear");
        assert_eq!(summary.classes, vec![0, 1]);
        assert_eq!(summary.model_features, 2);
        assert_eq!(summary.vocabulary_size, 2);
        assert!(summary.compatible);
    }
}
