//! Dictionary-backed lemmatizer using WordNet's morphological rules.

use std::sync::Arc;

use super::Lemmatizer;
use super::dictionary::{LemmaDictionary, PartOfSpeech};

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJ_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn detachment_rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adj => ADJ_RULES,
        PartOfSpeech::Adv => &[],
    }
}

/// Lemmatizer that reduces a word to the shortest dictionary form reachable
/// through the irregular-form table or one suffix detachment.
///
/// Words with no dictionary form are returned unchanged.
///
/// ```
/// use symptom_triage::analysis::token_filter::lemma::Lemmatizer;
/// use symptom_triage::analysis::token_filter::lemma::dictionary::PartOfSpeech;
/// use symptom_triage::analysis::token_filter::lemma::wordnet::WordNetLemmatizer;
///
/// let lemmatizer = WordNetLemmatizer::embedded();
/// assert_eq!(lemmatizer.lemmatize("headaches", PartOfSpeech::Noun), "headache");
/// assert_eq!(lemmatizer.lemmatize("feet", PartOfSpeech::Noun), "foot");
/// assert_eq!(lemmatizer.lemmatize("tired", PartOfSpeech::Noun), "tired");
/// ```
#[derive(Clone, Debug)]
pub struct WordNetLemmatizer {
    dictionary: Arc<LemmaDictionary>,
}

impl WordNetLemmatizer {
    /// Create a lemmatizer over the given dictionary.
    pub fn new(dictionary: Arc<LemmaDictionary>) -> Self {
        WordNetLemmatizer { dictionary }
    }

    /// Create a lemmatizer over the embedded dictionary.
    pub fn embedded() -> Self {
        Self::new(LemmaDictionary::embedded())
    }

    pub fn dictionary(&self) -> &LemmaDictionary {
        &self.dictionary
    }

    /// All dictionary forms of `word` for `pos`, in candidate order.
    pub fn morphy(&self, word: &str, pos: PartOfSpeech) -> Vec<String> {
        let candidates: Vec<String> = match self.dictionary.exceptions(word, pos) {
            Some(bases) => std::iter::once(word.to_string())
                .chain(bases.iter().cloned())
                .collect(),
            None => std::iter::once(word.to_string())
                .chain(
                    detachment_rules(pos)
                        .iter()
                        .filter_map(|(suffix, ending)| {
                            word.strip_suffix(suffix)
                                .map(|stem| format!("{stem}{ending}"))
                        }),
                )
                .collect(),
        };

        let mut forms: Vec<String> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.dictionary.contains(&candidate, pos) && !forms.contains(&candidate) {
                forms.push(candidate);
            }
        }
        forms
    }
}

impl Lemmatizer for WordNetLemmatizer {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        // min_by_key returns the first of equally short forms
        self.morphy(word, pos)
            .into_iter()
            .min_by_key(|form| form.chars().count())
            .unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "wordnet"
    }
}
