use scr_core::KeywordMatcher;

/// Counts literal, non-overlapping occurrences of each keyword anywhere in the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl SubstringMatcher {
    pub const NAME: &'static str = "substring";
}

impl KeywordMatcher for SubstringMatcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn count_matches(&self, text: &str, keywords: &[String]) -> usize {
        keywords
            .iter()
            .map(|keyword| text.matches(keyword.as_str()).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_inflected_forms() {
        let keywords = vec!["strike".to_string(), "shortage".to_string()];
        let matcher = SubstringMatcher;
        assert_eq!(matcher.count_matches("strikes and chip shortages", &keywords), 2);
        assert_eq!(matcher.count_matches("strikestrike", &keywords), 2);
        assert_eq!(matcher.count_matches("calm markets", &keywords), 0);
    }
}
