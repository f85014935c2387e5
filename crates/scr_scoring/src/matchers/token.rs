use scr_core::KeywordMatcher;

/// Word-level matcher: a token counts when it equals a keyword exactly.
///
/// Any character that is not alphanumeric separates tokens, so punctuation
/// and hyphens never glue a keyword to its neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl TokenMatcher {
    pub const NAME: &'static str = "token";
}

pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

impl KeywordMatcher for TokenMatcher {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn count_matches(&self, text: &str, keywords: &[String]) -> usize {
        tokenize(text)
            .filter(|token| keywords.iter().any(|k| k.as_str() == *token))
            .count()
    }
}
