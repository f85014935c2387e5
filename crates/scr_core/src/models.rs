/// Counts how many keyword hits a piece of text contains.
///
/// Implementations receive text that has already been lowercased and a
/// keyword list that is lowercase as well.
pub trait KeywordMatcher: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    fn count_matches(&self, text: &str, keywords: &[String]) -> usize;
}
