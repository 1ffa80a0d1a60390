//! Lemma dictionaries in WordNet `dict/` layout.
//!
//! A dictionary is built from two kinds of files per part of speech:
//!
//! - `index.{noun,verb,adj,adv}`: one lemma per line, the first two fields
//!   being the lemma and its part-of-speech tag. Lines starting with a space
//!   are license or header lines.
//! - `{noun,verb,adj,adv}.exc`: irregular forms, `inflected base [base...]`.
//!
//! A compact dictionary with a symptom and condition vocabulary is embedded
//! in the binary; a full WordNet installation can be loaded with
//! [`LemmaDictionary::from_dir`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use ahash::{AHashMap, AHashSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

const EMBEDDED_INDEX_NOUN: &str = include_str!("../../../../resources/wordnet/index.noun");
const EMBEDDED_INDEX_VERB: &str = include_str!("../../../../resources/wordnet/index.verb");
const EMBEDDED_INDEX_ADJ: &str = include_str!("../../../../resources/wordnet/index.adj");
const EMBEDDED_NOUN_EXC: &str = include_str!("../../../../resources/wordnet/noun.exc");
const EMBEDDED_VERB_EXC: &str = include_str!("../../../../resources/wordnet/verb.exc");
const EMBEDDED_ADJ_EXC: &str = include_str!("../../../../resources/wordnet/adj.exc");

static EMBEDDED: LazyLock<Arc<LemmaDictionary>> = LazyLock::new(|| {
    let mut dictionary = LemmaDictionary::new();
    dictionary.add_index(PartOfSpeech::Noun, EMBEDDED_INDEX_NOUN);
    dictionary.add_index(PartOfSpeech::Verb, EMBEDDED_INDEX_VERB);
    dictionary.add_index(PartOfSpeech::Adj, EMBEDDED_INDEX_ADJ);
    dictionary.add_exceptions(PartOfSpeech::Noun, EMBEDDED_NOUN_EXC);
    dictionary.add_exceptions(PartOfSpeech::Verb, EMBEDDED_VERB_EXC);
    dictionary.add_exceptions(PartOfSpeech::Adj, EMBEDDED_ADJ_EXC);
    Arc::new(dictionary)
});

/// WordNet part of speech.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    #[default]
    #[serde(alias = "n")]
    Noun,
    #[serde(alias = "v")]
    Verb,
    #[serde(alias = "a", alias = "adjective")]
    Adj,
    #[serde(alias = "r", alias = "adverb")]
    Adv,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adj,
        PartOfSpeech::Adv,
    ];

    /// File name component used by WordNet (`index.noun`, `noun.exc`, ...).
    pub fn file_stem(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adj => "adj",
            PartOfSpeech::Adv => "adv",
        }
    }

    /// Parse a single-letter WordNet tag. Satellite adjectives (`s`) map to
    /// [`PartOfSpeech::Adj`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adj),
            "r" => Some(PartOfSpeech::Adv),
            _ => None,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for PartOfSpeech {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "noun" | "n" => Ok(PartOfSpeech::Noun),
            "verb" | "v" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" | "a" => Ok(PartOfSpeech::Adj),
            "adv" | "adverb" | "r" => Ok(PartOfSpeech::Adv),
            other => Err(TriageError::config(format!(
                "unknown part of speech: {other}"
            ))),
        }
    }
}

/// Lemma sets and irregular-form tables per part of speech.
#[derive(Clone, Debug, Default)]
pub struct LemmaDictionary {
    lemmas: AHashMap<PartOfSpeech, AHashSet<String>>,
    exceptions: AHashMap<PartOfSpeech, AHashMap<String, Vec<String>>>,
}

impl LemmaDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dictionary compiled into the binary.
    pub fn embedded() -> Arc<LemmaDictionary> {
        Arc::clone(&EMBEDDED)
    }

    /// Load a WordNet `dict/` directory.
    ///
    /// `index.noun` is required; every other index and exception file is
    /// optional.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(TriageError::resource(format!(
                "lemma directory not found: {}",
                dir.display()
            )));
        }
        if !dir.join("index.noun").is_file() {
            return Err(TriageError::resource(format!(
                "lemma directory {} has no index.noun",
                dir.display()
            )));
        }

        let mut dictionary = LemmaDictionary::new();
        for pos in PartOfSpeech::ALL {
            let index_path = dir.join(format!("index.{}", pos.file_stem()));
            if index_path.is_file() {
                dictionary.add_index(pos, &read_resource(&index_path)?);
            }
            let exc_path = dir.join(format!("{}.exc", pos.file_stem()));
            if exc_path.is_file() {
                dictionary.add_exceptions(pos, &read_resource(&exc_path)?);
            }
        }

        debug!(
            "loaded lemma dictionary from {}: {} nouns, {} verbs",
            dir.display(),
            dictionary.len(PartOfSpeech::Noun),
            dictionary.len(PartOfSpeech::Verb)
        );
        Ok(dictionary)
    }

    /// Add the lemmas of an index file. Entries whose tag does not parse are
    /// filed under `pos`.
    pub fn add_index(&mut self, pos: PartOfSpeech, content: &str) {
        for (line_no, line) in content.lines().enumerate() {
            if line.is_empty() || line.starts_with(' ') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(lemma), Some(tag)) = (fields.next(), fields.next()) else {
                warn!("skipping malformed {pos} index line {}", line_no + 1);
                continue;
            };
            let entry_pos = PartOfSpeech::from_tag(tag).unwrap_or(pos);
            self.insert(lemma, entry_pos);
        }
    }

    /// Add the irregular forms of an exception file.
    pub fn add_exceptions(&mut self, pos: PartOfSpeech, content: &str) {
        let table = self.exceptions.entry(pos).or_default();
        for line in content.lines() {
            let mut fields = line.split_whitespace();
            let Some(inflected) = fields.next() else {
                continue;
            };
            let bases: Vec<String> = fields.map(str::to_string).collect();
            if bases.is_empty() {
                continue;
            }
            table.insert(inflected.to_string(), bases);
        }
    }

    /// Add a single lemma.
    pub fn insert<S: Into<String>>(&mut self, lemma: S, pos: PartOfSpeech) {
        self.lemmas.entry(pos).or_default().insert(lemma.into());
    }

    /// Check whether `word` is a lemma for `pos`.
    pub fn contains(&self, word: &str, pos: PartOfSpeech) -> bool {
        self.lemmas
            .get(&pos)
            .is_some_and(|lemmas| lemmas.contains(word))
    }

    /// The base forms recorded for an irregular `word`.
    pub fn exceptions(&self, word: &str, pos: PartOfSpeech) -> Option<&[String]> {
        self.exceptions
            .get(&pos)
            .and_then(|table| table.get(word))
            .map(Vec::as_slice)
    }

    /// Number of lemmas for `pos`.
    pub fn len(&self, pos: PartOfSpeech) -> usize {
        self.lemmas.get(&pos).map_or(0, |lemmas| lemmas.len())
    }

    /// True when no lemma of any part of speech is present.
    pub fn is_empty(&self) -> bool {
        self.lemmas.values().all(|lemmas| lemmas.is_empty())
    }
}

fn read_resource(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        TriageError::resource(format!("cannot read {}: {e}", path.display()))
    })
}
