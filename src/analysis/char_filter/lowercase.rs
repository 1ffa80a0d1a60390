use super::CharFilter;

/// A char filter that lowercases the whole text (Unicode-aware).
///
/// Lowercasing happens before tokenization so that the URL pattern and the
/// stopword lookup both see lowercase input.
#[derive(Clone, Debug, Default)]
pub struct LowercaseCharFilter;

impl LowercaseCharFilter {
    /// Create a new lowercase char filter.
    pub fn new() -> Self {
        LowercaseCharFilter
    }
}

impl CharFilter for LowercaseCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            input.to_ascii_lowercase()
        } else {
            input.to_lowercase()
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("High BLOOD Pressure"), "high blood pressure");
    }

    #[test]
    fn test_unicode_lowercase() {
        let filter = LowercaseCharFilter::new();
        assert_eq!(filter.filter("ÜBELKEIT"), "übelkeit");
        assert_eq!(filter.filter("ÉTÉ"), "été");
    }
}
