use super::CharFilter;

/// A char filter that deletes every ASCII punctuation character.
///
/// The removed set is exactly ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``. Removed
/// characters are not replaced, so `blood-sugar` becomes `bloodsugar`.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    /// Create a new punctuation char filter.
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|c| !c.is_ascii_punctuation()).collect()
    }

    fn name(&self) -> &'static str {
        "punctuation_removal"
    }
}
